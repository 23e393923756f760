pub mod routes;

use crate::{ApiResult, LeagueAppData};
use axum::Json;
use axum::extract::State;
use league_core::league::FixtureScheduler;
use serde::Serialize;

#[derive(Serialize)]
pub struct FixtureGenerateResponse {
    pub fixtures: usize,
    pub rounds: u32,
}

pub async fn fixture_generate_action(
    State(state): State<LeagueAppData>,
) -> ApiResult<Json<FixtureGenerateResponse>> {
    let response = state
        .mutate(|league| {
            let fixtures = league.generate_fixtures(&FixtureScheduler::new())?;
            let rounds = league.fixtures().iter().map(|f| f.round).max().unwrap_or(0);

            Ok(FixtureGenerateResponse { fixtures, rounds })
        })
        .await?;

    Ok(Json(response))
}
