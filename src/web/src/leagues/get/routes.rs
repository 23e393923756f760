use crate::LeagueAppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<LeagueAppData> {
    Router::new()
        .route("/api/league", get(super::league_get_action))
        .route("/api/league/table", get(super::league_table_action))
}
