use crate::league::{Fixture, ScheduleGenerator, Team, TeamId, ValidationError};
use log::{debug, info};
use std::collections::HashSet;

const MIN_TEAMS: usize = 2;

/// Double round-robin generator using the circle (Berger) method.
///
/// Position 0 stays fixed while the rest rotate one step per round. Odd
/// team counts get a bye slot, and pairings against it are skipped. The
/// second leg replays the first with home and away swapped.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureScheduler;

impl FixtureScheduler {
    pub fn new() -> Self {
        FixtureScheduler
    }

    fn validate(teams: &[Team]) -> Result<(), ValidationError> {
        if teams.len() < MIN_TEAMS {
            return Err(ValidationError::InsufficientTeams { found: teams.len() });
        }

        let mut seen = HashSet::with_capacity(teams.len());
        for team in teams {
            if !seen.insert(team.id) {
                return Err(ValidationError::DuplicateTeam(team.id));
            }
        }

        Ok(())
    }

    /// Pairings of a single leg as (round index, first-listed, second-listed)
    fn leg_pairings(participants: &[Option<TeamId>]) -> Vec<(u32, TeamId, TeamId)> {
        let size = participants.len();
        let rounds = size - 1;
        let matches_per_round = size / 2;

        let mut positions = participants.to_vec();
        let mut pairings = Vec::with_capacity(rounds * matches_per_round);

        for round in 0..rounds {
            for i in 0..matches_per_round {
                match (positions[i], positions[size - 1 - i]) {
                    (Some(first), Some(second)) => pairings.push((round as u32, first, second)),
                    (Some(idle), None) | (None, Some(idle)) => {
                        debug!("round {}: team {} has a bye", round + 1, idle);
                    }
                    (None, None) => {}
                }
            }

            positions[1..].rotate_right(1);
        }

        pairings
    }
}

impl ScheduleGenerator for FixtureScheduler {
    fn generate(&self, teams: &[Team]) -> Result<Vec<Fixture>, ValidationError> {
        Self::validate(teams)?;

        let mut participants: Vec<Option<TeamId>> = teams.iter().map(|t| Some(t.id)).collect();
        if participants.len() % 2 != 0 {
            participants.push(None);
        }

        let rounds_per_leg = (participants.len() - 1) as u32;
        let pairings = Self::leg_pairings(&participants);

        let first_leg = pairings.iter().map(|&(round, first, second)| {
            let (home, away) = if round % 2 == 0 {
                (first, second)
            } else {
                (second, first)
            };

            Fixture::new(round + 1, home, away)
        });

        let second_leg = pairings.iter().map(|&(round, first, second)| {
            let (home, away) = if round % 2 == 0 {
                (second, first)
            } else {
                (first, second)
            };

            Fixture::new(round + 1 + rounds_per_leg, home, away)
        });

        // Both legs are produced in round order, so generation order already
        // sorts by (round, order within round).
        let fixtures: Vec<Fixture> = first_leg
            .chain(second_leg)
            .filter(|f| f.home_team_id != f.away_team_id)
            .zip(1..)
            .map(|(fixture, match_number)| Fixture {
                match_number,
                ..fixture
            })
            .collect();

        info!(
            "generated {} fixtures over {} rounds for {} teams",
            fixtures.len(),
            rounds_per_leg * 2,
            teams.len()
        );

        Ok(fixtures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn teams(count: u32) -> Vec<Team> {
        (1..=count)
            .map(|id| Team::new(id, format!("Team {}", id)))
            .collect()
    }

    fn generate(count: u32) -> Vec<Fixture> {
        FixtureScheduler::new().generate(&teams(count)).unwrap()
    }

    #[test]
    fn test_rejects_fewer_than_two_teams() {
        let scheduler = FixtureScheduler::new();

        assert_eq!(
            scheduler.generate(&[]),
            Err(ValidationError::InsufficientTeams { found: 0 })
        );
        assert_eq!(
            scheduler.generate(&teams(1)),
            Err(ValidationError::InsufficientTeams { found: 1 })
        );
    }

    #[test]
    fn test_rejects_duplicate_team_ids() {
        let list = vec![
            Team::new(1, String::from("A")),
            Team::new(2, String::from("B")),
            Team::new(1, String::from("C")),
        ];

        assert_eq!(
            FixtureScheduler::new().generate(&list),
            Err(ValidationError::DuplicateTeam(1))
        );
    }

    #[test]
    fn test_two_teams_play_once_per_leg() {
        let fixtures = generate(2);

        assert_eq!(fixtures.len(), 2);

        assert_eq!(fixtures[0].round, 1);
        assert_eq!((fixtures[0].home_team_id, fixtures[0].away_team_id), (1, 2));

        assert_eq!(fixtures[1].round, 2);
        assert_eq!((fixtures[1].home_team_id, fixtures[1].away_team_id), (2, 1));
    }

    #[test]
    fn test_fixture_count_and_ordered_pairs() {
        for n in 2..=9u32 {
            let fixtures = generate(n);
            assert_eq!(fixtures.len(), (n * (n - 1)) as usize, "n = {}", n);

            let mut ordered_pairs = HashSet::new();
            for fixture in &fixtures {
                assert_ne!(fixture.home_team_id, fixture.away_team_id);
                assert!(
                    ordered_pairs.insert((fixture.home_team_id, fixture.away_team_id)),
                    "n = {}: pair repeated",
                    n
                );
            }
        }
    }

    #[test]
    fn test_match_numbers_are_contiguous() {
        for n in 2..=8u32 {
            let fixtures = generate(n);
            let numbers: Vec<u32> = fixtures.iter().map(|f| f.match_number).collect();
            let expected: Vec<u32> = (1..=fixtures.len() as u32).collect();

            assert_eq!(numbers, expected);
        }
    }

    #[test]
    fn test_round_layout() {
        for n in 2..=8u32 {
            let fixtures = generate(n);
            let padded = if n % 2 == 0 { n } else { n + 1 };
            let rounds_per_leg = padded - 1;

            let first_leg_max = fixtures
                .iter()
                .filter(|f| f.round <= rounds_per_leg)
                .map(|f| f.round)
                .max()
                .unwrap();
            let second_leg_min = fixtures
                .iter()
                .filter(|f| f.round > rounds_per_leg)
                .map(|f| f.round)
                .min()
                .unwrap();
            let max_round = fixtures.iter().map(|f| f.round).max().unwrap();

            assert_eq!(first_leg_max, second_leg_min - 1);
            assert_eq!(max_round, 2 * rounds_per_leg);
        }
    }

    #[test]
    fn test_each_team_plays_at_most_once_per_round() {
        for n in 2..=9u32 {
            let fixtures = generate(n);
            let mut seen: HashMap<u32, HashSet<TeamId>> = HashMap::new();

            for fixture in &fixtures {
                let round = seen.entry(fixture.round).or_default();
                assert!(round.insert(fixture.home_team_id));
                assert!(round.insert(fixture.away_team_id));
            }
        }
    }

    #[test]
    fn test_odd_count_leaves_one_team_idle_per_round() {
        let fixtures = generate(3);

        assert_eq!(fixtures.len(), 6);

        let rounds: HashSet<u32> = fixtures.iter().map(|f| f.round).collect();
        assert_eq!(rounds, (1..=6).collect::<HashSet<u32>>());

        for round in 1..=6 {
            let in_round: Vec<&Fixture> = fixtures.iter().filter(|f| f.round == round).collect();
            assert_eq!(in_round.len(), 1, "round {}", round);
        }
    }

    #[test]
    fn test_second_leg_mirrors_first_leg() {
        let fixtures = generate(6);
        let rounds_per_leg = 5;

        for fixture in fixtures.iter().filter(|f| f.round <= rounds_per_leg) {
            let mirrored = fixtures.iter().find(|f| {
                f.round == fixture.round + rounds_per_leg
                    && f.home_team_id == fixture.away_team_id
                    && f.away_team_id == fixture.home_team_id
            });

            assert!(mirrored.is_some(), "no mirror for {:?}", fixture);
        }
    }

    #[test]
    fn test_anchor_alternates_home_and_away() {
        let fixtures = generate(4);

        let anchor_home: Vec<bool> = fixtures
            .iter()
            .filter(|f| f.round <= 3 && f.involves(1))
            .map(|f| f.home_team_id == 1)
            .collect();

        assert_eq!(anchor_home, vec![true, false, true]);
    }

    #[test]
    fn test_fixtures_have_no_storage_id_and_no_score() {
        for fixture in generate(5) {
            assert_eq!(fixture.id, crate::league::UNASSIGNED_FIXTURE_ID);
            assert!(!fixture.is_played());
        }
    }
}
