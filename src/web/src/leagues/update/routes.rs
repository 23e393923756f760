use crate::LeagueAppData;
use axum::Router;
use axum::routing::{post, put};

pub fn routes() -> Router<LeagueAppData> {
    Router::new()
        .route("/api/league", put(super::league_rename_action))
        .route("/api/league/reset", post(super::league_reset_action))
}
