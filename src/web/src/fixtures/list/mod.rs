pub mod routes;

use crate::fixtures::FixtureItem;
use crate::{ApiResult, LeagueAppData};
use axum::Json;
use axum::extract::State;
use itertools::Itertools;
use serde::Serialize;

#[derive(Serialize)]
pub struct RoundSchedule {
    pub round: u32,
    pub matches: Vec<FixtureItem>,
}

pub async fn fixture_list_action(State(state): State<LeagueAppData>) -> ApiResult<Json<Vec<RoundSchedule>>> {
    let league = state.league.read().await;

    let mut rounds = Vec::new();

    for (round, group) in &league.fixtures().iter().chunk_by(|f| f.round) {
        rounds.push(RoundSchedule {
            round,
            matches: group.map(|fixture| FixtureItem::new(fixture, &league)).collect(),
        });
    }

    Ok(Json(rounds))
}
