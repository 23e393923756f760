pub mod routes;

use crate::common::json::ApiJson;
use crate::{ApiResult, LeagueAppData};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use league_core::league::{LeagueError, Team, TeamId};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct TeamNameRequest {
    pub name: String,
}

#[derive(Serialize)]
pub struct TeamDeleteResponse {
    pub id: TeamId,
    pub removed_fixtures: usize,
}

pub async fn team_create_action(
    State(state): State<LeagueAppData>,
    ApiJson(request): ApiJson<TeamNameRequest>,
) -> ApiResult<impl IntoResponse> {
    let team = state
        .mutate(|league| {
            let id = league.add_team(&request.name)?;
            league.team(id).cloned().ok_or(LeagueError::TeamNotFound(id))
        })
        .await?;

    Ok((StatusCode::CREATED, Json(team)))
}

pub async fn team_rename_action(
    State(state): State<LeagueAppData>,
    Path(team_id): Path<TeamId>,
    ApiJson(request): ApiJson<TeamNameRequest>,
) -> ApiResult<Json<Team>> {
    let team = state
        .mutate(|league| {
            league.rename_team(team_id, &request.name)?;
            league.team(team_id).cloned().ok_or(LeagueError::TeamNotFound(team_id))
        })
        .await?;

    Ok(Json(team))
}

pub async fn team_delete_action(
    State(state): State<LeagueAppData>,
    Path(team_id): Path<TeamId>,
) -> ApiResult<Json<TeamDeleteResponse>> {
    let removed_fixtures = state.mutate(|league| league.remove_team(team_id)).await?;

    Ok(Json(TeamDeleteResponse {
        id: team_id,
        removed_fixtures,
    }))
}
