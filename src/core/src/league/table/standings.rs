use crate::league::{Fixture, FormLog, MatchOutcome, Team, TeamId};
use log::warn;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingsRow {
    pub team_id: TeamId,
    pub name: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: u32,
    /// Most recent first, at most five entries
    pub form: Vec<MatchOutcome>,
}

impl StandingsRow {
    fn new(team: &Team) -> Self {
        StandingsRow {
            team_id: team.id,
            name: team.name.clone(),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
            form: Vec::new(),
        }
    }

    fn add_match(&mut self, scored: u16, conceded: u16) -> MatchOutcome {
        let outcome = MatchOutcome::from_goals(scored, conceded);

        self.played += 1;
        self.goals_for += scored as u32;
        self.goals_against += conceded as u32;
        self.points += outcome.points();

        match outcome {
            MatchOutcome::Win => self.won += 1,
            MatchOutcome::Draw => self.drawn += 1,
            MatchOutcome::Loss => self.lost += 1,
        }

        outcome
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeagueTable {
    pub rows: Vec<StandingsRow>,
}

impl LeagueTable {
    /// 1-based rank of a team
    pub fn position(&self, team_id: TeamId) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.team_id == team_id)
            .map(|idx| idx + 1)
    }

    pub fn leader(&self) -> Option<&StandingsRow> {
        self.rows.first()
    }
}

pub struct StandingsCalculator;

impl StandingsCalculator {
    /// Folds played fixtures, in the order given, into a ranked table.
    ///
    /// Fixtures without both scores are ignored. A fixture that names a team
    /// missing from `teams` is dropped as a whole.
    pub fn compute(teams: &[Team], fixtures: &[Fixture]) -> LeagueTable {
        let mut rows: HashMap<TeamId, (StandingsRow, FormLog)> = teams
            .iter()
            .map(|team| (team.id, (StandingsRow::new(team), FormLog::new())))
            .collect();

        for fixture in fixtures {
            let Some((home_goals, away_goals)) = fixture.result() else {
                continue;
            };

            if fixture.home_team_id == fixture.away_team_id
                || !rows.contains_key(&fixture.home_team_id)
                || !rows.contains_key(&fixture.away_team_id)
            {
                warn!(
                    "skipping fixture {} (round {}): unknown pairing {} vs {}",
                    fixture.id, fixture.round, fixture.home_team_id, fixture.away_team_id
                );
                continue;
            }

            if let Some((row, form)) = rows.get_mut(&fixture.home_team_id) {
                form.push(row.add_match(home_goals, away_goals));
            }

            if let Some((row, form)) = rows.get_mut(&fixture.away_team_id) {
                form.push(row.add_match(away_goals, home_goals));
            }
        }

        let mut rows: Vec<StandingsRow> = rows
            .into_values()
            .map(|(mut row, form)| {
                row.goal_difference = row.goals_for as i32 - row.goals_against as i32;
                row.form = form.recent();
                row
            })
            .collect();

        rows.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then_with(|| b.goal_difference.cmp(&a.goal_difference))
                .then_with(|| b.goals_for.cmp(&a.goals_for))
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.team_id.cmp(&b.team_id))
        });

        LeagueTable { rows }
    }
}
