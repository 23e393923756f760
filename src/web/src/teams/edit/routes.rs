use crate::LeagueAppData;
use axum::Router;
use axum::routing::{post, put};

pub fn routes() -> Router<LeagueAppData> {
    Router::new()
        .route("/api/teams", post(super::team_create_action))
        .route(
            "/api/teams/{team_id}",
            put(super::team_rename_action).delete(super::team_delete_action),
        )
}
