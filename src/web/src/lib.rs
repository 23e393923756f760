mod common;
mod error;
mod fixtures;
mod leagues;
mod routes;
mod snapshot;
mod teams;

pub use error::{ApiError, ApiResult};

use crate::routes::ServerRoutes;
use axum::response::IntoResponse;
use database::SnapshotWriter;
use league_core::league::{League, LeagueError, ZoneThresholds};
use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub struct LeagueAdminServer {
    data: LeagueAppData,
}

impl LeagueAdminServer {
    pub fn new(data: LeagueAppData) -> Self {
        LeagueAdminServer { data }
    }

    pub fn router(&self) -> axum::Router {
        ServerRoutes::create()
            .layer(
                ServiceBuilder::new()
                    // Catch panics in handlers and convert them to 500 errors
                    .layer(CatchPanicLayer::custom(|_err| {
                        (
                            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                            "Internal server error - handler panicked".to_string(),
                        )
                            .into_response()
                    })),
            )
            .with_state(self.data.clone())
    }

    pub async fn run(&self, port: u16) -> std::io::Result<()> {
        let app = self.router();

        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        let listener = TcpListener::bind(addr).await?;

        info!("listen at: http://localhost:{}", port);

        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
        }

        Ok(())
    }
}

pub struct LeagueAppData {
    pub league: Arc<RwLock<League>>,
    pub snapshot: Option<SnapshotWriter>,
    pub zones: ZoneThresholds,
}

impl LeagueAppData {
    pub fn new(league: League, snapshot: Option<SnapshotWriter>, zones: ZoneThresholds) -> Self {
        LeagueAppData {
            league: Arc::new(RwLock::new(league)),
            snapshot,
            zones,
        }
    }

    /// Applies `action` to a copy of the league, persists the copy and only
    /// then swaps it in, so a failed action or write leaves the state as it was.
    pub async fn mutate<T, F>(&self, action: F) -> ApiResult<T>
    where
        F: FnOnce(&mut League) -> Result<T, LeagueError>,
    {
        let mut guard = self.league.write().await;

        let mut draft = guard.clone();
        let result = action(&mut draft)?;

        *guard = self.persist(draft).await?;

        Ok(result)
    }

    /// Replaces the whole league, e.g. on import
    pub async fn replace(&self, league: League) -> ApiResult<()> {
        let mut guard = self.league.write().await;

        *guard = self.persist(league).await?;

        Ok(())
    }

    /// Writes the snapshot off the async runtime; the write lock stays held
    /// so snapshots land in the same order as mutations.
    async fn persist(&self, league: League) -> ApiResult<League> {
        let Some(writer) = self.snapshot.clone() else {
            return Ok(league);
        };

        tokio::task::spawn_blocking(move || match writer.save(&league) {
            Ok(()) => Ok(league),
            Err(err) => {
                error!("snapshot write to {} failed: {}", writer.path().display(), err);
                Err(ApiError::from(err))
            }
        })
        .await
        .map_err(|err| ApiError::InternalError(format!("snapshot task failed: {}", err)))?
    }
}

impl Clone for LeagueAppData {
    fn clone(&self) -> Self {
        LeagueAppData {
            league: Arc::clone(&self.league),
            snapshot: self.snapshot.clone(),
            zones: self.zones,
        }
    }
}
