pub mod edit;
pub mod list;

use crate::LeagueAppData;
use axum::Router;

pub fn team_routes() -> Router<LeagueAppData> {
    Router::new()
        .merge(list::routes::routes())
        .merge(edit::routes::routes())
}
