//! Fixture scheduling and standings for a small double round-robin league.
//!
//! [`FixtureScheduler`] and [`StandingsCalculator`] are pure functions over
//! team and fixture snapshots. [`League`] composes them with the admin
//! operations of the league shell.

pub mod league;
pub mod utils;

pub use league::*;
pub use utils::*;
