mod error;
mod generators;
mod loaders;
mod snapshot;

pub use error::*;
pub use generators::*;
pub use loaders::*;
pub use snapshot::*;

use log::info;
use std::path::Path;

pub struct DatabaseLoader;

impl DatabaseLoader {
    /// Loads the snapshot at `path` when it exists, otherwise the embedded seed league
    pub fn load(path: Option<&Path>) -> DatabaseResult<LeagueEntity> {
        match path {
            Some(path) if path.exists() => {
                info!("loading league snapshot: {}", path.display());
                LeagueLoader::load_file(path)
            }
            _ => {
                info!("loading embedded seed league");
                LeagueLoader::load_embedded()
            }
        }
    }
}
