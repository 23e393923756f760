use crate::LeagueAppData;
use axum::Router;
use axum::routing::put;

pub fn routes() -> Router<LeagueAppData> {
    Router::new()
        .route("/api/fixtures/{fixture_id}/score", put(super::fixture_score_action))
        .route("/api/fixtures/{fixture_id}/result", put(super::fixture_result_action))
}
