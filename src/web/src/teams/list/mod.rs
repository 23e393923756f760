pub mod routes;

use crate::{ApiResult, LeagueAppData};
use axum::Json;
use axum::extract::State;
use league_core::league::TeamId;
use serde::Serialize;

#[derive(Serialize)]
pub struct TeamListItem {
    pub id: TeamId,
    pub name: String,
    pub fixtures: usize,
}

pub async fn team_list_action(State(state): State<LeagueAppData>) -> ApiResult<Json<Vec<TeamListItem>>> {
    let league = state.league.read().await;

    let items = league
        .teams()
        .iter()
        .map(|team| TeamListItem {
            id: team.id,
            name: team.name.clone(),
            fixtures: league.fixtures().iter().filter(|f| f.involves(team.id)).count(),
        })
        .collect();

    Ok(Json(items))
}
