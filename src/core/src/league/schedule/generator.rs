use crate::league::{Fixture, Team, ValidationError};

/// Builds a complete fixture batch for a set of teams.
///
/// Returned fixtures carry no storage id; the caller assigns ids when it
/// replaces its previous batch with the new one.
pub trait ScheduleGenerator {
    fn generate(&self, teams: &[Team]) -> Result<Vec<Fixture>, ValidationError>;
}
