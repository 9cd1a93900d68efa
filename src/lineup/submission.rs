use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::LineupError;
use crate::rotation::{validate_batting_orders, Player, RotationSettings};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    #[default]
    Baseball,
    Softball,
}

/// Lineup create/update request from the frontend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupRequest {
    pub name: String,
    #[serde(default)]
    pub sport: Sport,
    pub players: Vec<Player>,
    #[serde(default)]
    pub rotation_settings: RotationSettings,
}

/// Validates a lineup request before its rotation is generated
pub fn validate_lineup(req: &LineupRequest, max_innings: u32) -> Result<(), LineupError> {
    if req.name.trim().is_empty() {
        return Err(LineupError::MissingName);
    }
    validate_roster(&req.players, &req.rotation_settings, max_innings)
}

/// Checks a roster and settings are fit for planning: players present and
/// named, ids and batting orders unique, inning count in range, and someone able to
/// fill pitcher and catcher when those positions are on.
pub fn validate_roster(
    players: &[Player],
    settings: &RotationSettings,
    max_innings: u32,
) -> Result<(), LineupError> {
    if players.is_empty() {
        return Err(LineupError::EmptyRoster);
    }

    if let Some(index) = players.iter().position(|p| p.name.trim().is_empty()) {
        return Err(LineupError::PlayerNameMissing { index: index + 1 });
    }

    let mut ids = HashSet::with_capacity(players.len());
    if let Some(dup) = players.iter().find(|p| !ids.insert(p.id.as_str())) {
        return Err(LineupError::DuplicatePlayerId { id: dup.id.clone() });
    }

    if !validate_batting_orders(players) {
        return Err(LineupError::DuplicateBattingOrder);
    }

    if settings.number_of_innings < 1 || settings.number_of_innings > max_innings {
        return Err(LineupError::InningsOutOfRange {
            value: settings.number_of_innings,
            max: max_innings,
        });
    }

    if settings.use_pitcher && players.iter().all(|p| p.cannot_pitch) {
        return Err(LineupError::NoEligiblePitcher);
    }
    if settings.use_catcher && players.iter().all(|p| p.cannot_catch) {
        return Err(LineupError::NoEligibleCatcher);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(size: i32) -> LineupRequest {
        LineupRequest {
            name: "Tigers vs Bears".to_string(),
            sport: Sport::Softball,
            players: (1..=size)
                .map(|i| Player::new(format!("p{i}"), format!("Player {i}"), i))
                .collect(),
            rotation_settings: RotationSettings::default(),
        }
    }

    #[test]
    fn well_formed_request_passes() {
        assert_eq!(validate_lineup(&request(10), 12), Ok(()));
    }

    #[test]
    fn blank_names_are_rejected() {
        let mut req = request(3);
        req.name = "   ".to_string();
        assert_eq!(validate_lineup(&req, 12), Err(LineupError::MissingName));

        let mut req = request(3);
        req.players[2].name.clear();
        assert_eq!(
            validate_lineup(&req, 12),
            Err(LineupError::PlayerNameMissing { index: 3 })
        );
    }

    #[test]
    fn empty_roster_is_rejected() {
        assert_eq!(validate_lineup(&request(0), 12), Err(LineupError::EmptyRoster));
    }

    #[test]
    fn duplicate_batting_orders_are_rejected() {
        let mut req = request(4);
        req.players[3].batting_order = 1;
        assert_eq!(validate_lineup(&req, 12), Err(LineupError::DuplicateBattingOrder));
    }

    #[test]
    fn shared_player_ids_are_rejected() {
        let mut req = request(3);
        req.players[2].id = "p1".to_string();
        req.players[2].batting_order = 1;

        // id uniqueness is reported before batting orders
        assert_eq!(
            validate_lineup(&req, 12),
            Err(LineupError::DuplicatePlayerId { id: "p1".to_string() })
        );
    }

    #[test]
    fn innings_must_fit_the_configured_range() {
        let mut req = request(9);
        req.rotation_settings.number_of_innings = 0;
        assert_eq!(
            validate_lineup(&req, 12),
            Err(LineupError::InningsOutOfRange { value: 0, max: 12 })
        );

        req.rotation_settings.number_of_innings = 13;
        assert!(validate_lineup(&req, 12).is_err());
        assert!(validate_lineup(&req, 13).is_ok());
    }

    #[test]
    fn battery_needs_an_eligible_player_only_when_enabled() {
        let mut req = request(2);
        for player in &mut req.players {
            player.cannot_pitch = true;
            player.cannot_catch = true;
        }
        assert_eq!(validate_lineup(&req, 12), Err(LineupError::NoEligiblePitcher));

        req.rotation_settings.use_pitcher = false;
        assert_eq!(validate_lineup(&req, 12), Err(LineupError::NoEligibleCatcher));

        req.rotation_settings.use_catcher = false;
        assert_eq!(validate_lineup(&req, 12), Ok(()));
    }

    #[test]
    fn request_json_uses_camel_case_and_defaults() {
        let req: LineupRequest = serde_json::from_str(
            r#"{"name":"Game 1","players":[{"id":"a","name":"Ann","battingOrder":1,"cannotPitch":true}]}"#,
        )
        .unwrap();

        assert_eq!(req.sport, Sport::Baseball);
        assert_eq!(req.rotation_settings, RotationSettings::default());
        assert!(req.players[0].cannot_pitch);
        assert!(!req.players[0].cannot_catch);
    }
}
