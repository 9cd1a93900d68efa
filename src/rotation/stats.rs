use std::collections::{BTreeMap, HashSet};

use super::types::{Player, Position, PositionCategory, Rotation};

/// Validates that all players have unique batting orders
pub fn validate_batting_orders(players: &[Player]) -> bool {
    let mut seen = HashSet::with_capacity(players.len());
    players.iter().all(|p| seen.insert(p.batting_order))
}

/// Counts how many innings a player spent at each position.
/// Innings the player is missing from are skipped.
pub fn player_stats(player_id: &str, rotation: &Rotation) -> BTreeMap<Position, u32> {
    let mut stats = BTreeMap::new();
    for inning in rotation {
        if let Some(assignment) = inning.iter().find(|a| a.player_id == player_id) {
            *stats.entry(assignment.position).or_insert(0) += 1;
        }
    }
    stats
}

/// Same as `player_stats`, folded into infield/outfield/bench
pub fn category_stats(player_id: &str, rotation: &Rotation) -> BTreeMap<PositionCategory, u32> {
    let mut stats = BTreeMap::new();
    for (position, count) in player_stats(player_id, rotation) {
        *stats.entry(position.category()).or_insert(0) += count;
    }
    stats
}
