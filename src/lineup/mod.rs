pub mod submission;
pub mod store;

pub use submission::{validate_lineup, validate_roster, LineupRequest, Sport};
pub use store::{Lineup, LineupData, LineupStore};
