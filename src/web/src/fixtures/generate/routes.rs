use crate::LeagueAppData;
use axum::Router;
use axum::routing::post;

pub fn routes() -> Router<LeagueAppData> {
    Router::new().route("/api/fixtures/generate", post(super::fixture_generate_action))
}
