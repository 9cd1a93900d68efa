use super::types::{Position, PositionCategory, RotationSettings};

const BASES: [Position; 4] = [
    Position::FirstBase,
    Position::SecondBase,
    Position::ThirdBase,
    Position::Shortstop,
];

const OUTFIELD: [Position; 3] = [
    Position::LeftField,
    Position::CenterField,
    Position::RightField,
];

impl Position {
    /// Maps a position to infield, outfield or bench
    pub fn category(self) -> PositionCategory {
        match self {
            Position::Pitcher
            | Position::Catcher
            | Position::FirstBase
            | Position::SecondBase
            | Position::ThirdBase
            | Position::Shortstop => PositionCategory::Infield,
            Position::LeftField | Position::CenterField | Position::RightField => {
                PositionCategory::Outfield
            }
            Position::Bench => PositionCategory::Bench,
        }
    }
}

/// Active field positions in the order they are filled each inning.
/// Pitcher and catcher come first when enabled, then the four bases, then the outfield.
pub fn field_positions(settings: &RotationSettings) -> Vec<Position> {
    let mut positions = Vec::with_capacity(BASES.len() + OUTFIELD.len() + 2);
    if settings.use_pitcher {
        positions.push(Position::Pitcher);
    }
    if settings.use_catcher {
        positions.push(Position::Catcher);
    }
    positions.extend_from_slice(&BASES);
    positions.extend_from_slice(&OUTFIELD);
    positions
}

/// Positions selectable for these settings, bench last
pub fn available_positions(settings: &RotationSettings) -> Vec<Position> {
    let mut positions = field_positions(settings);
    positions.push(Position::Bench);
    positions
}
