mod config;

use crate::config::AppConfig;
use color_eyre::eyre::{Result, WrapErr};
use database::{DatabaseGenerator, DatabaseLoader, SnapshotWriter};
use env_logger::Env;
use league_core::league::ZoneThresholds;
use league_core::utils::TimeEstimation;
use log::info;
use web::{LeagueAdminServer, LeagueAppData};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = AppConfig::from_env()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or(config.log_filter.as_str())
    ).init();

    let (entity, estimated) = TimeEstimation::estimate(|| DatabaseLoader::load(config.data_path.as_deref()));
    let entity = entity.wrap_err("failed to load league data")?;

    info!("league data loaded: {} ms", estimated);

    let league = DatabaseGenerator::generate(&entity).wrap_err("league data is inconsistent")?;

    info!(
        "league '{}': {} teams, {} fixtures ({} played)",
        league.name(),
        league.teams().len(),
        league.fixtures().len(),
        league.played_fixtures()
    );

    let snapshot = config.data_path.clone().map(SnapshotWriter::new);
    if let Some(writer) = &snapshot {
        info!("snapshots will be written to {}", writer.path().display());
    }

    let data = LeagueAppData::new(league, snapshot, ZoneThresholds::default());

    LeagueAdminServer::new(data)
        .run(config.port)
        .await
        .wrap_err_with(|| format!("cannot start server on port {}", config.port))?;

    Ok(())
}
