//! Fair fielding-position rotations for baseball and softball lineups.
//!
//! The [`rotation`] module holds the planner itself; everything else is the
//! application around it: roster CSV import, lineup validation and storage,
//! and the JSON web API.

pub mod config;
pub mod error;
pub mod lineup;
pub mod logging;
pub mod roster;
pub mod rotation;
pub mod web;
