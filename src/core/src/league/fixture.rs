use crate::league::TeamId;
use serde::{Deserialize, Serialize};

pub type FixtureId = u32;

/// Id carried by fixtures that have not been stored yet
pub const UNASSIGNED_FIXTURE_ID: FixtureId = 0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: FixtureId,
    pub round: u32,
    pub match_number: u32,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub home_goals: Option<u16>,
    pub away_goals: Option<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreSide {
    Home,
    Away,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FixtureStatus {
    Pending,
    Done,
}

impl Fixture {
    pub fn new(round: u32, home_team_id: TeamId, away_team_id: TeamId) -> Self {
        Fixture {
            id: UNASSIGNED_FIXTURE_ID,
            round,
            match_number: 0,
            home_team_id,
            away_team_id,
            home_goals: None,
            away_goals: None,
        }
    }

    /// Final score as (home, away), only when both sides are set
    pub fn result(&self) -> Option<(u16, u16)> {
        match (self.home_goals, self.away_goals) {
            (Some(home), Some(away)) => Some((home, away)),
            _ => None,
        }
    }

    pub fn is_played(&self) -> bool {
        self.result().is_some()
    }

    pub fn status(&self) -> FixtureStatus {
        if self.is_played() {
            FixtureStatus::Done
        } else {
            FixtureStatus::Pending
        }
    }

    pub fn involves(&self, team_id: TeamId) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }

    pub fn set_goals(&mut self, side: ScoreSide, goals: Option<u16>) {
        match side {
            ScoreSide::Home => self.home_goals = goals,
            ScoreSide::Away => self.away_goals = goals,
        }
    }

    pub fn set_result(&mut self, home_goals: u16, away_goals: u16) {
        self.home_goals = Some(home_goals);
        self.away_goals = Some(away_goals);
    }

    pub fn clear_result(&mut self) {
        self.home_goals = None;
        self.away_goals = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_is_pending_until_both_sides_set() {
        let mut fixture = Fixture::new(1, 1, 2);
        assert_eq!(fixture.status(), FixtureStatus::Pending);

        fixture.set_goals(ScoreSide::Home, Some(3));
        assert_eq!(fixture.status(), FixtureStatus::Pending);
        assert_eq!(fixture.result(), None);

        fixture.set_goals(ScoreSide::Away, Some(0));
        assert_eq!(fixture.status(), FixtureStatus::Done);
        assert_eq!(fixture.result(), Some((3, 0)));
    }

    #[test]
    fn test_clear_result() {
        let mut fixture = Fixture::new(2, 4, 5);
        fixture.set_result(1, 1);
        assert!(fixture.is_played());

        fixture.clear_result();
        assert!(!fixture.is_played());
        assert_eq!(fixture.home_goals, None);
        assert_eq!(fixture.away_goals, None);
    }

    #[test]
    fn test_involves() {
        let fixture = Fixture::new(1, 7, 9);

        assert!(fixture.involves(7));
        assert!(fixture.involves(9));
        assert!(!fixture.involves(8));
    }
}
