pub mod get;
pub mod update;

use crate::LeagueAppData;
use axum::Router;

pub fn league_routes() -> Router<LeagueAppData> {
    Router::new()
        .merge(get::routes::routes())
        .merge(update::routes::routes())
}
