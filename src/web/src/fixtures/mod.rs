pub mod generate;
pub mod list;
pub mod score;

use crate::LeagueAppData;
use axum::Router;
use league_core::league::{Fixture, FixtureId, FixtureStatus, League, TeamId};
use serde::Serialize;

pub fn fixture_routes() -> Router<LeagueAppData> {
    Router::new()
        .merge(list::routes::routes())
        .merge(generate::routes::routes())
        .merge(score::routes::routes())
}

#[derive(Serialize)]
pub struct FixtureItem {
    pub id: FixtureId,
    pub round: u32,
    pub match_number: u32,
    pub home_team_id: TeamId,
    pub home_team_name: String,
    pub away_team_id: TeamId,
    pub away_team_name: String,
    pub home_goals: Option<u16>,
    pub away_goals: Option<u16>,
    pub status: FixtureStatus,
}

impl FixtureItem {
    pub fn new(fixture: &Fixture, league: &League) -> Self {
        FixtureItem {
            id: fixture.id,
            round: fixture.round,
            match_number: fixture.match_number,
            home_team_id: fixture.home_team_id,
            home_team_name: team_name(league, fixture.home_team_id),
            away_team_id: fixture.away_team_id,
            away_team_name: team_name(league, fixture.away_team_id),
            home_goals: fixture.home_goals,
            away_goals: fixture.away_goals,
            status: fixture.status(),
        }
    }
}

fn team_name(league: &League, id: TeamId) -> String {
    league
        .team(id)
        .map(|t| t.name.clone())
        .unwrap_or_else(|| String::from("-"))
}
