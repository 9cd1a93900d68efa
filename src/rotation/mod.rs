pub mod types;
pub mod positions;
pub mod planner;
pub mod stats;

pub use types::{
    InningAssignment, Player, Position, PositionCategory, Rotation, RotationPlan,
    RotationSettings, UnfilledPosition,
};
pub use positions::{available_positions, field_positions};
pub use planner::{generate_rotation, plan_rotation};
pub use stats::{category_stats, player_stats, validate_batting_orders};
