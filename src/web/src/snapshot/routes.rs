use crate::LeagueAppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<LeagueAppData> {
    Router::new().route(
        "/api/snapshot",
        get(super::snapshot_export_action).post(super::snapshot_import_action),
    )
}
