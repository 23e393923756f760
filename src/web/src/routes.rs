use crate::LeagueAppData;
use crate::common::default_handler::default_handler;
use crate::fixtures::fixture_routes;
use crate::leagues::league_routes;
use crate::snapshot::snapshot_routes;
use crate::teams::team_routes;
use axum::Router;

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<LeagueAppData> {
        Router::<LeagueAppData>::new()
            .merge(league_routes())
            .merge(team_routes())
            .merge(fixture_routes())
            .merge(snapshot_routes())
            .fallback(default_handler)
    }
}
