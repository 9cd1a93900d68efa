use tracing::{debug, info};

use super::positions::field_positions;
use super::types::{
    InningAssignment, Player, Position, Rotation, RotationPlan, RotationSettings,
    UnfilledPosition, CATEGORY_COUNT, POSITION_COUNT,
};

/// Weight of one prior turn at the exact position. Large enough that category
/// balance only separates players tied on position repeats.
const POSITION_REPEAT_WEIGHT: u64 = 1000;

/// Counters for one planning run, indexed by roster slot
struct PlanState {
    position_counts: Vec<[u32; POSITION_COUNT]>,
    category_counts: Vec<[u32; CATEGORY_COUNT]>,
}

impl PlanState {
    fn new(roster_len: usize) -> Self {
        PlanState {
            position_counts: vec![[0; POSITION_COUNT]; roster_len],
            category_counts: vec![[0; CATEGORY_COUNT]; roster_len],
        }
    }

    /// Lower is better
    fn score(&self, slot: usize, position: Position) -> u64 {
        let repeats = u64::from(self.position_counts[slot][position.index()]);
        let in_category = u64::from(self.category_counts[slot][position.category().index()]);
        repeats * POSITION_REPEAT_WEIGHT + in_category
    }

    fn record(&mut self, slot: usize, position: Position) {
        self.position_counts[slot][position.index()] += 1;
        self.category_counts[slot][position.category().index()] += 1;
    }
}

fn assignment(inning: u32, player: &Player, position: Position) -> InningAssignment {
    InningAssignment {
        inning,
        player_id: player.id.clone(),
        player_name: player.name.clone(),
        position,
        batting_order: player.batting_order,
        jersey_number: player.jersey_number.clone(),
    }
}

/// Generates a fair rotation of players through positions over every inning
pub fn generate_rotation(players: &[Player], settings: &RotationSettings) -> Rotation {
    plan_rotation(players, settings).rotation
}

/// Generates the rotation and reports every field position left empty.
///
/// Each inning fills the active positions in processing order. For every position
/// the unassigned, eligible player with the lowest score wins, earlier roster
/// entries winning ties. Whoever is left over sits on the bench. A position with
/// no candidate is skipped without emitting a row and is listed in `unfilled`.
pub fn plan_rotation(players: &[Player], settings: &RotationSettings) -> RotationPlan {
    let positions = field_positions(settings);
    let mut state = PlanState::new(players.len());
    let mut rotation: Rotation = Vec::with_capacity(settings.number_of_innings as usize);
    let mut unfilled = Vec::new();

    for inning in 1..=settings.number_of_innings {
        let mut assigned = vec![false; players.len()];
        let mut assignments = Vec::with_capacity(players.len());

        for &position in &positions {
            let best = players
                .iter()
                .enumerate()
                .filter(|(slot, player)| !assigned[*slot] && player.can_play(position))
                .min_by_key(|(slot, _)| state.score(*slot, position));

            match best {
                Some((slot, player)) => {
                    assigned[slot] = true;
                    state.record(slot, position);
                    assignments.push(assignment(inning, player, position));
                }
                None => {
                    debug!(inning, position = position.code(), "no eligible player left");
                    unfilled.push(UnfilledPosition { inning, position });
                }
            }
        }

        for (slot, player) in players.iter().enumerate() {
            if !assigned[slot] {
                state.record(slot, Position::Bench);
                assignments.push(assignment(inning, player, Position::Bench));
            }
        }

        // stable, so equal batting orders keep placement order
        assignments.sort_by_key(|a| a.batting_order);
        rotation.push(assignments);
    }

    info!(
        players = players.len(),
        innings = settings.number_of_innings,
        field_positions = positions.len(),
        unfilled = unfilled.len(),
        "rotation planned"
    );

    RotationPlan { rotation, unfilled }
}
