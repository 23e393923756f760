pub mod routes;

use crate::common::json::ApiJson;
use crate::{ApiResult, LeagueAppData};
use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct LeagueRenameRequest {
    pub name: String,
}

#[derive(Serialize)]
pub struct LeagueNameResponse {
    pub name: String,
}

pub async fn league_rename_action(
    State(state): State<LeagueAppData>,
    ApiJson(request): ApiJson<LeagueRenameRequest>,
) -> ApiResult<Json<LeagueNameResponse>> {
    let name = state
        .mutate(|league| {
            league.rename(&request.name)?;
            Ok(league.name().to_string())
        })
        .await?;

    Ok(Json(LeagueNameResponse { name }))
}

pub async fn league_reset_action(State(state): State<LeagueAppData>) -> ApiResult<Json<LeagueNameResponse>> {
    let name = state
        .mutate(|league| {
            league.reset();
            Ok(league.name().to_string())
        })
        .await?;

    Ok(Json(LeagueNameResponse { name }))
}
