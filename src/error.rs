use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Roster CSV import errors
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("failed to read roster CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("roster CSV has no name column")]
    MissingNameColumn,

    #[error("invalid batting order '{value}' on row {row}")]
    InvalidBattingOrder { row: usize, value: String },
}

/// Lineup validation and store errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LineupError {
    #[error("Please enter a lineup name")]
    MissingName,

    #[error("Please add at least one player")]
    EmptyRoster,

    #[error("All players must have a name (player {index} is blank)")]
    PlayerNameMissing { index: usize },

    #[error("Player ids must be unique ({id} appears more than once)")]
    DuplicatePlayerId { id: String },

    #[error("Batting orders must be unique")]
    DuplicateBattingOrder,

    #[error("Number of innings must be between 1 and {max}, got {value}")]
    InningsOutOfRange { value: u32, max: u32 },

    #[error("Pitcher position is enabled, but every player is marked as unable to pitch")]
    NoEligiblePitcher,

    #[error("Catcher position is enabled, but every player is marked as unable to catch")]
    NoEligibleCatcher,

    #[error("Lineup not found: {0}")]
    NotFound(String),
}

/// Environment configuration errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}

/// Errors surfaced by the HTTP API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Lineup(#[from] LineupError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Lineup(LineupError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Lineup(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "success": false,
            "error": self.to_string(),
        }))
    }
}
