use serde::{Deserialize, Serialize};

/// Number of distinct `Position` variants, bench included
pub const POSITION_COUNT: usize = 10;

/// Number of distinct `PositionCategory` variants
pub const CATEGORY_COUNT: usize = 3;

/// A fielding position, or the bench
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "P")]
    Pitcher,
    #[serde(rename = "C")]
    Catcher,
    #[serde(rename = "1B")]
    FirstBase,
    #[serde(rename = "2B")]
    SecondBase,
    #[serde(rename = "3B")]
    ThirdBase,
    #[serde(rename = "SS")]
    Shortstop,
    #[serde(rename = "LF")]
    LeftField,
    #[serde(rename = "CF")]
    CenterField,
    #[serde(rename = "RF")]
    RightField,
    #[serde(rename = "BENCH")]
    Bench,
}

impl Position {
    pub const ALL: [Position; POSITION_COUNT] = [
        Position::Pitcher,
        Position::Catcher,
        Position::FirstBase,
        Position::SecondBase,
        Position::ThirdBase,
        Position::Shortstop,
        Position::LeftField,
        Position::CenterField,
        Position::RightField,
        Position::Bench,
    ];

    /// Slot of this position in per-player counter arrays
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short scorebook code, also used as the serialized form
    pub fn code(self) -> &'static str {
        match self {
            Position::Pitcher => "P",
            Position::Catcher => "C",
            Position::FirstBase => "1B",
            Position::SecondBase => "2B",
            Position::ThirdBase => "3B",
            Position::Shortstop => "SS",
            Position::LeftField => "LF",
            Position::CenterField => "CF",
            Position::RightField => "RF",
            Position::Bench => "BENCH",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Position::Pitcher => "Pitcher",
            Position::Catcher => "Catcher",
            Position::FirstBase => "First Base",
            Position::SecondBase => "Second Base",
            Position::ThirdBase => "Third Base",
            Position::Shortstop => "Shortstop",
            Position::LeftField => "Left Field",
            Position::CenterField => "Center Field",
            Position::RightField => "Right Field",
            Position::Bench => "Bench",
        }
    }

    /// Parses a scorebook code ("ss", "1B", "bench"), ignoring case and surrounding whitespace
    pub fn from_code(code: &str) -> Option<Position> {
        let code = code.trim();
        Position::ALL
            .iter()
            .copied()
            .find(|p| p.code().eq_ignore_ascii_case(code))
    }
}

/// Coarse grouping used as the secondary fairness signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionCategory {
    Infield,
    Outfield,
    Bench,
}

impl PositionCategory {
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A player on the roster for one planning run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    /// Preferred position, informational only
    #[serde(default = "default_position")]
    pub position: Position,
    pub batting_order: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jersey_number: Option<String>,
    #[serde(default)]
    pub cannot_pitch: bool,
    #[serde(default)]
    pub cannot_catch: bool,
}

fn default_position() -> Position {
    Position::Bench
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>, batting_order: i32) -> Self {
        Player {
            id: id.into(),
            name: name.into(),
            position: Position::Bench,
            batting_order,
            jersey_number: None,
            cannot_pitch: false,
            cannot_catch: false,
        }
    }

    /// Whether this player may be placed at `position`
    pub fn can_play(&self, position: Position) -> bool {
        match position {
            Position::Pitcher => !self.cannot_pitch,
            Position::Catcher => !self.cannot_catch,
            _ => true,
        }
    }
}

/// Per-run settings that fully determine the active position set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotationSettings {
    pub number_of_innings: u32,
    pub use_pitcher: bool,
    pub use_catcher: bool,
}

impl Default for RotationSettings {
    fn default() -> Self {
        RotationSettings {
            number_of_innings: 6,
            use_pitcher: true,
            use_catcher: true,
        }
    }
}

/// One player's placement in one inning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InningAssignment {
    pub inning: u32,
    pub player_id: String,
    pub player_name: String,
    pub position: Position,
    pub batting_order: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jersey_number: Option<String>,
}

/// Innings in order; each inning holds one assignment per player
pub type Rotation = Vec<Vec<InningAssignment>>;

/// A field position nobody eligible was left to fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnfilledPosition {
    pub inning: u32,
    pub position: Position,
}

/// Rotation plus the shortfalls met while building it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationPlan {
    pub rotation: Rotation,
    pub unfilled: Vec<UnfilledPosition>,
}
