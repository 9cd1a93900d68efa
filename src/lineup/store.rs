use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use super::submission::{validate_lineup, LineupRequest, Sport};
use crate::error::LineupError;
use crate::rotation::{generate_rotation, Player, Rotation, RotationSettings};

/// Stored lineup payload; the rotation is kept as generated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupData {
    pub sport: Sport,
    pub players: Vec<Player>,
    pub rotation_settings: RotationSettings,
    pub rotation: Rotation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lineup {
    pub id: String,
    pub name: String,
    pub data: LineupData,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn build_data(req: LineupRequest) -> LineupData {
    let rotation = generate_rotation(&req.players, &req.rotation_settings);
    LineupData {
        sport: req.sport,
        players: req.players,
        rotation_settings: req.rotation_settings,
        rotation,
    }
}

/// In-memory lineup records, kept in creation order
pub struct LineupStore {
    lineups: Mutex<Vec<Lineup>>,
    max_innings: u32,
}

impl LineupStore {
    pub fn new(max_innings: u32) -> Self {
        LineupStore {
            lineups: Mutex::new(Vec::new()),
            max_innings,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Lineup>> {
        self.lineups.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Validates the request, generates its rotation and stores the record
    pub fn create(&self, req: LineupRequest) -> Result<Lineup, LineupError> {
        validate_lineup(&req, self.max_innings)?;

        let now = Utc::now();
        let lineup = Lineup {
            id: Uuid::new_v4().to_string(),
            name: req.name.trim().to_string(),
            data: build_data(req),
            created_at: now,
            updated_at: now,
        };

        info!(id = %lineup.id, players = lineup.data.players.len(), "lineup created");
        self.lock().push(lineup.clone());
        Ok(lineup)
    }

    pub fn list(&self) -> Vec<Lineup> {
        self.lock().clone()
    }

    pub fn get(&self, id: &str) -> Result<Lineup, LineupError> {
        self.lock()
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or_else(|| LineupError::NotFound(id.to_string()))
    }

    /// Replaces a lineup's name and data, regenerating the whole rotation.
    /// A missing id is reported before the request is validated.
    pub fn update(&self, id: &str, req: LineupRequest) -> Result<Lineup, LineupError> {
        let mut lineups = self.lock();
        let lineup = lineups
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| LineupError::NotFound(id.to_string()))?;

        validate_lineup(&req, self.max_innings)?;

        lineup.name = req.name.trim().to_string();
        lineup.data = build_data(req);
        lineup.updated_at = Utc::now();

        info!(id, "lineup updated");
        Ok(lineup.clone())
    }

    pub fn delete(&self, id: &str) -> Result<(), LineupError> {
        let mut lineups = self.lock();
        let index = lineups
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| LineupError::NotFound(id.to_string()))?;
        lineups.remove(index);

        info!(id, "lineup deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::player_stats;

    fn request(name: &str, size: i32) -> LineupRequest {
        LineupRequest {
            name: name.to_string(),
            sport: Sport::Baseball,
            players: (1..=size)
                .map(|i| Player::new(format!("p{i}"), format!("Player {i}"), i))
                .collect(),
            rotation_settings: RotationSettings::default(),
        }
    }

    #[test]
    fn create_generates_rotation() {
        let store = LineupStore::new(12);
        let lineup = store.create(request("  Opening Day ", 10)).unwrap();

        assert_eq!(lineup.name, "Opening Day");
        assert_eq!(lineup.data.rotation.len(), 6);
        assert_eq!(lineup.created_at, lineup.updated_at);
        assert_eq!(player_stats("p1", &lineup.data.rotation).values().sum::<u32>(), 6);
        assert_eq!(store.get(&lineup.id).unwrap(), lineup);
    }

    #[test]
    fn invalid_requests_are_not_stored() {
        let store = LineupStore::new(12);
        assert_eq!(store.create(request("", 9)).unwrap_err(), LineupError::MissingName);
        assert!(store.list().is_empty());
    }

    #[test]
    fn update_replaces_the_rotation() {
        let store = LineupStore::new(12);
        let created = store.create(request("Game", 9)).unwrap();

        let mut req = request("Game (rainout)", 11);
        req.rotation_settings.number_of_innings = 3;
        let updated = store.update(&created.id, req).unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Game (rainout)");
        assert_eq!(updated.data.rotation.len(), 3);
        assert!(updated.data.rotation.iter().all(|inning| inning.len() == 11));
        assert!(updated.updated_at >= created.updated_at);
    }

    #[test]
    fn list_keeps_creation_order_and_delete_removes() {
        let store = LineupStore::new(12);
        let first = store.create(request("First", 9)).unwrap();
        let second = store.create(request("Second", 9)).unwrap();

        let names: Vec<_> = store.list().into_iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["First", "Second"]);

        store.delete(&first.id).unwrap();
        assert_eq!(store.list().len(), 1);
        assert_eq!(store.get(&first.id), Err(LineupError::NotFound(first.id.clone())));
        assert!(store.get(&second.id).is_ok());
    }

    #[test]
    fn missing_ids_are_not_found() {
        let store = LineupStore::new(12);
        assert!(matches!(store.delete("nope"), Err(LineupError::NotFound(_))));
        assert!(matches!(
            store.update("nope", request("x", 9)),
            Err(LineupError::NotFound(_))
        ));
        // an invalid body for a missing id is still not found
        assert!(matches!(
            store.update("nope", request("", 0)),
            Err(LineupError::NotFound(_))
        ));
    }

    #[test]
    fn invalid_update_keeps_the_stored_lineup() {
        let store = LineupStore::new(12);
        let created = store.create(request("Game", 9)).unwrap();

        assert_eq!(
            store.update(&created.id, request("", 9)).unwrap_err(),
            LineupError::MissingName
        );
        assert_eq!(store.get(&created.id).unwrap(), created);
    }
}
