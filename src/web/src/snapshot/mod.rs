pub mod routes;

use crate::common::json::ApiJson;
use crate::{ApiResult, LeagueAppData};
use axum::Json;
use axum::Router;
use axum::extract::State;
use chrono::Local;
use database::{DatabaseGenerator, LeagueEntity};
use log::info;
use serde::Serialize;

pub fn snapshot_routes() -> Router<LeagueAppData> {
    routes::routes()
}

#[derive(Serialize)]
pub struct SnapshotImportResponse {
    pub name: String,
    pub teams: usize,
    pub fixtures: usize,
    pub dropped_fixtures: usize,
}

pub async fn snapshot_export_action(State(state): State<LeagueAppData>) -> ApiResult<Json<LeagueEntity>> {
    let league = state.league.read().await;

    Ok(Json(DatabaseGenerator::entity(&league, Some(Local::now().naive_local()))))
}

pub async fn snapshot_import_action(
    State(state): State<LeagueAppData>,
    ApiJson(entity): ApiJson<LeagueEntity>,
) -> ApiResult<Json<SnapshotImportResponse>> {
    let league = DatabaseGenerator::generate(&entity)?;

    let response = SnapshotImportResponse {
        name: league.name().to_string(),
        teams: league.teams().len(),
        fixtures: league.fixtures().len(),
        dropped_fixtures: entity.fixtures.len() - league.fixtures().len(),
    };

    state.replace(league).await?;

    info!(
        "snapshot imported: '{}' with {} teams and {} fixtures",
        response.name, response.teams, response.fixtures
    );

    Ok(Json(response))
}
