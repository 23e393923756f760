use crate::loaders::{FixtureEntity, LeagueEntity, TeamEntity};
use chrono::NaiveDateTime;
use league_core::league::{Fixture, League, LeagueResult, Team};

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    pub fn generate(data: &LeagueEntity) -> LeagueResult<League> {
        let teams = data
            .teams
            .iter()
            .map(|team| Team::new(team.id, team.name.clone()))
            .collect();

        let fixtures = data
            .fixtures
            .iter()
            .map(|fixture| Fixture {
                id: fixture.id,
                round: fixture.round,
                match_number: fixture.match_number,
                home_team_id: fixture.home_id,
                away_team_id: fixture.away_id,
                home_goals: fixture.gh,
                away_goals: fixture.ga,
            })
            .collect();

        League::restore(data.league_name.clone(), teams, fixtures)
    }

    pub fn entity(league: &League, exported_at: Option<NaiveDateTime>) -> LeagueEntity {
        LeagueEntity {
            league_name: league.name().to_string(),
            exported_at,
            teams: league
                .teams()
                .iter()
                .map(|team| TeamEntity {
                    id: team.id,
                    name: team.name.clone(),
                })
                .collect(),
            fixtures: league
                .fixtures()
                .iter()
                .map(|fixture| FixtureEntity {
                    id: fixture.id,
                    round: fixture.round,
                    match_number: fixture.match_number,
                    home_id: fixture.home_team_id,
                    away_id: fixture.away_team_id,
                    gh: fixture.home_goals,
                    ga: fixture.away_goals,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use league_core::league::{FixtureScheduler, LeagueError};

    #[test]
    fn test_generate_from_entity_drops_dangling_fixtures() {
        let data = LeagueEntity {
            league_name: String::from("Liga"),
            exported_at: None,
            teams: vec![
                TeamEntity { id: 1, name: String::from("A") },
                TeamEntity { id: 2, name: String::from("B") },
            ],
            fixtures: vec![
                FixtureEntity { id: 1, round: 1, match_number: 1, home_id: 1, away_id: 2, gh: Some(2), ga: Some(0) },
                FixtureEntity { id: 2, round: 2, match_number: 2, home_id: 2, away_id: 3, gh: None, ga: None },
            ],
        };

        let league = DatabaseGenerator::generate(&data).unwrap();

        assert_eq!(league.name(), "Liga");
        assert_eq!(league.teams().len(), 2);
        assert_eq!(league.fixtures().len(), 1);
        assert_eq!(league.standings().rows[0].team_id, 1);
    }

    #[test]
    fn test_entity_round_trip_keeps_standings() {
        let mut league = League::new(String::from("Liga"));
        for name in ["A", "B", "C"] {
            league.add_team(name).unwrap();
        }
        league.generate_fixtures(&FixtureScheduler::new()).unwrap();

        let first = league.fixtures()[0].id;
        league.record_result(first, 3, 1).unwrap();

        let restored = DatabaseGenerator::generate(&DatabaseGenerator::entity(&league, None)).unwrap();

        assert_eq!(restored.teams(), league.teams());
        assert_eq!(restored.fixtures(), league.fixtures());
        assert_eq!(restored.standings(), league.standings());
    }

    #[test]
    fn test_generate_rejects_duplicate_team_ids() {
        let data = LeagueEntity {
            league_name: String::from("Liga"),
            exported_at: None,
            teams: vec![
                TeamEntity { id: 1, name: String::from("Alpha") },
                TeamEntity { id: 1, name: String::from("Beta") },
            ],
            fixtures: Vec::new(),
        };

        assert_eq!(DatabaseGenerator::generate(&data).unwrap_err(), LeagueError::DuplicateTeamId(1));
    }
}
