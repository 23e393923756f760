use crate::league::{
    Fixture, FixtureId, FixtureStatus, LeagueError, LeagueResult, LeagueTable, ScheduleGenerator,
    ScoreSide, StandingsCalculator, Team, TeamId,
};
use crate::utils::Logging;
use itertools::Itertools;
use log::{debug, info, warn};
use std::collections::HashSet;

/// League name, teams and fixtures, kept consistent with each other.
///
/// Teams are kept ordered by name and fixtures by round then match number,
/// which is also the chronological order standings are folded in.
#[derive(Debug, Clone)]
pub struct League {
    name: String,
    teams: Vec<Team>,
    fixtures: Vec<Fixture>,
    next_team_id: TeamId,
    next_fixture_id: FixtureId,
}

impl League {
    pub fn new(name: String) -> Self {
        League {
            name: name.trim().to_string(),
            teams: Vec::new(),
            fixtures: Vec::new(),
            next_team_id: 1,
            next_fixture_id: 1,
        }
    }

    /// Rebuilds a league from stored data.
    ///
    /// Names are trimmed and held to the same rules as `add_team`, team and
    /// fixture ids must be unique. Fixtures that reference unknown teams or
    /// pair a team with itself are dropped.
    pub fn restore(name: String, teams: Vec<Team>, fixtures: Vec<Fixture>) -> LeagueResult<Self> {
        let name = Self::clean_name(&name)?;

        let teams = teams
            .into_iter()
            .map(|team| -> LeagueResult<Team> {
                let name = Self::clean_name(&team.name)?;
                Ok(Team::new(team.id, name))
            })
            .collect::<LeagueResult<Vec<Team>>>()?;

        if let Some(team) = teams.iter().duplicates_by(|t| t.id).next() {
            return Err(LeagueError::DuplicateTeamId(team.id));
        }

        if let Some(team) = teams.iter().duplicates_by(|t| t.name.to_lowercase()).next() {
            return Err(LeagueError::DuplicateTeamName(team.name.clone()));
        }

        if let Some(fixture) = fixtures.iter().duplicates_by(|f| f.id).next() {
            return Err(LeagueError::DuplicateFixtureId(fixture.id));
        }

        let team_ids: HashSet<TeamId> = teams.iter().map(|t| t.id).collect();
        let total = fixtures.len();

        let fixtures: Vec<Fixture> = fixtures
            .into_iter()
            .filter(|f| {
                f.home_team_id != f.away_team_id
                    && team_ids.contains(&f.home_team_id)
                    && team_ids.contains(&f.away_team_id)
            })
            .collect();

        if fixtures.len() < total {
            warn!("dropped {} fixtures with dangling team references", total - fixtures.len());
        }

        let next_team_id = Self::id_after(teams.iter().map(|t| t.id))?;
        let next_fixture_id = Self::id_after(fixtures.iter().map(|f| f.id))?;

        let mut league = League {
            name,
            teams,
            fixtures,
            next_team_id,
            next_fixture_id,
        };

        league.sort_teams();
        league.sort_fixtures();

        debug!(
            "restored league '{}': {} teams, {} fixtures",
            league.name,
            league.teams.len(),
            league.fixtures.len()
        );

        Ok(league)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn fixture(&self, id: FixtureId) -> Option<&Fixture> {
        self.fixtures.iter().find(|f| f.id == id)
    }

    pub fn played_fixtures(&self) -> usize {
        self.fixtures.iter().filter(|f| f.is_played()).count()
    }

    pub fn standings(&self) -> LeagueTable {
        StandingsCalculator::compute(&self.teams, &self.fixtures)
    }

    // ========== LEAGUE ==========

    pub fn rename(&mut self, name: &str) -> LeagueResult<()> {
        self.name = Self::clean_name(name)?;

        info!("league renamed to '{}'", self.name);

        Ok(())
    }

    /// Removes every team and fixture; the league name stays
    pub fn reset(&mut self) {
        info!(
            "resetting league '{}': {} teams, {} fixtures removed",
            self.name,
            self.teams.len(),
            self.fixtures.len()
        );

        self.teams.clear();
        self.fixtures.clear();
    }

    // ========== TEAMS ==========

    pub fn add_team(&mut self, name: &str) -> LeagueResult<TeamId> {
        let name = Self::clean_name(name)?;
        self.ensure_unique_name(&name, None)?;

        let id = self.next_team_id;
        self.next_team_id = id.checked_add(1).ok_or(LeagueError::IdsExhausted)?;

        info!("team added: {} ({})", name, id);

        self.teams.push(Team::new(id, name));
        self.sort_teams();

        Ok(id)
    }

    pub fn rename_team(&mut self, id: TeamId, name: &str) -> LeagueResult<()> {
        let name = Self::clean_name(name)?;
        self.ensure_unique_name(&name, Some(id))?;

        let team = self
            .teams
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(LeagueError::TeamNotFound(id))?;

        debug!("team {} renamed: '{}' -> '{}'", id, team.name, name);

        team.name = name;
        self.sort_teams();

        Ok(())
    }

    /// Deletes a team together with every fixture it takes part in.
    /// Returns the number of fixtures removed.
    pub fn remove_team(&mut self, id: TeamId) -> LeagueResult<usize> {
        let index = self
            .teams
            .iter()
            .position(|t| t.id == id)
            .ok_or(LeagueError::TeamNotFound(id))?;

        let team = self.teams.remove(index);

        let before = self.fixtures.len();
        self.fixtures.retain(|f| !f.involves(id));
        let removed = before - self.fixtures.len();

        info!("team removed: {} ({}), {} fixtures cascaded", team.name, id, removed);

        Ok(removed)
    }

    // ========== FIXTURES ==========

    /// Replaces the whole fixture list with a freshly generated one.
    /// On a generator error the current fixtures are left untouched.
    pub fn generate_fixtures<G: ScheduleGenerator>(&mut self, generator: &G) -> LeagueResult<usize> {
        let message = format!("generate fixtures for '{}' ({} teams)", self.name, self.teams.len());
        let generated = Logging::estimate_result(|| generator.generate(&self.teams), &message)?;

        let mut next_id = self.next_fixture_id;
        let fixtures = generated
            .into_iter()
            .map(|fixture| -> LeagueResult<Fixture> {
                let id = next_id;
                next_id = id.checked_add(1).ok_or(LeagueError::IdsExhausted)?;
                Ok(Fixture { id, ..fixture })
            })
            .collect::<LeagueResult<Vec<Fixture>>>()?;

        let replaced = std::mem::replace(&mut self.fixtures, fixtures);
        self.next_fixture_id = next_id;
        self.sort_fixtures();

        info!(
            "fixtures replaced for '{}': {} old, {} new",
            self.name,
            replaced.len(),
            self.fixtures.len()
        );

        Ok(self.fixtures.len())
    }

    /// Sets or clears one side of a score
    pub fn update_score(
        &mut self,
        id: FixtureId,
        side: ScoreSide,
        goals: Option<u16>,
    ) -> LeagueResult<FixtureStatus> {
        let fixture = self.fixture_mut(id)?;
        fixture.set_goals(side, goals);

        debug!(
            "fixture {} score: {:?} - {:?} ({:?})",
            id,
            fixture.home_goals,
            fixture.away_goals,
            fixture.status()
        );

        Ok(fixture.status())
    }

    pub fn record_result(&mut self, id: FixtureId, home_goals: u16, away_goals: u16) -> LeagueResult<()> {
        let fixture = self.fixture_mut(id)?;
        fixture.set_result(home_goals, away_goals);

        debug!("fixture {} result: {} - {}", id, home_goals, away_goals);

        Ok(())
    }

    pub fn clear_result(&mut self, id: FixtureId) -> LeagueResult<()> {
        self.fixture_mut(id)?.clear_result();

        debug!("fixture {} result cleared", id);

        Ok(())
    }

    // ========== HELPERS ==========

    fn fixture_mut(&mut self, id: FixtureId) -> LeagueResult<&mut Fixture> {
        self.fixtures
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or(LeagueError::FixtureNotFound(id))
    }

    /// First id past the largest one in use
    fn id_after(ids: impl Iterator<Item = u32>) -> LeagueResult<u32> {
        ids.max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or(LeagueError::IdsExhausted)
    }

    fn clean_name(name: &str) -> LeagueResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LeagueError::EmptyName);
        }

        Ok(name.to_string())
    }

    fn ensure_unique_name(&self, name: &str, except: Option<TeamId>) -> LeagueResult<()> {
        let taken = self
            .teams
            .iter()
            .any(|t| Some(t.id) != except && t.has_name(name));

        if taken {
            return Err(LeagueError::DuplicateTeamName(name.to_string()));
        }

        Ok(())
    }

    fn sort_teams(&mut self) {
        self.teams.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.id.cmp(&b.id))
        });
    }

    fn sort_fixtures(&mut self) {
        self.fixtures.sort_by_key(|f| (f.round, f.match_number, f.id));
    }
}
