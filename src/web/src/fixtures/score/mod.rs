pub mod routes;

use crate::common::json::ApiJson;
use crate::fixtures::FixtureItem;
use crate::{ApiError, ApiResult, LeagueAppData};
use axum::Json;
use axum::extract::{Path, State};
use league_core::league::{FixtureId, League, LeagueError, ScoreSide};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct FixtureScoreRequest {
    pub side: ScoreSide,
    pub goals: Option<u16>,
}

#[derive(Deserialize)]
pub struct FixtureResultRequest {
    pub home_goals: Option<u16>,
    pub away_goals: Option<u16>,
}

/// Edits one side of the score, the way a single score input does
pub async fn fixture_score_action(
    State(state): State<LeagueAppData>,
    Path(fixture_id): Path<FixtureId>,
    ApiJson(request): ApiJson<FixtureScoreRequest>,
) -> ApiResult<Json<FixtureItem>> {
    let item = state
        .mutate(|league| {
            league.update_score(fixture_id, request.side, request.goals)?;
            fixture_item(league, fixture_id)
        })
        .await?;

    Ok(Json(item))
}

pub async fn fixture_result_action(
    State(state): State<LeagueAppData>,
    Path(fixture_id): Path<FixtureId>,
    ApiJson(request): ApiJson<FixtureResultRequest>,
) -> ApiResult<Json<FixtureItem>> {
    let result = match (request.home_goals, request.away_goals) {
        (Some(home), Some(away)) => Some((home, away)),
        (None, None) => None,
        _ => {
            return Err(ApiError::BadRequest(String::from(
                "home_goals and away_goals must be set or cleared together",
            )));
        }
    };

    let item = state
        .mutate(|league| {
            match result {
                Some((home, away)) => league.record_result(fixture_id, home, away)?,
                None => league.clear_result(fixture_id)?,
            }
            fixture_item(league, fixture_id)
        })
        .await?;

    Ok(Json(item))
}

fn fixture_item(league: &League, id: FixtureId) -> Result<FixtureItem, LeagueError> {
    league
        .fixture(id)
        .map(|fixture| FixtureItem::new(fixture, league))
        .ok_or(LeagueError::FixtureNotFound(id))
}
