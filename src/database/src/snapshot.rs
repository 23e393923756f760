use crate::{DatabaseGenerator, DatabaseResult};
use chrono::Local;
use flate2::Compression;
use flate2::write::GzEncoder;
use league_core::league::League;
use log::debug;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Persists league snapshots to a single file.
///
/// Paths ending in `.gz` are gzip-compressed. Each save goes through a
/// temporary sibling file that is renamed over the target.
#[derive(Debug, Clone)]
pub struct SnapshotWriter {
    path: PathBuf,
}

impl SnapshotWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SnapshotWriter { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn to_json(league: &League) -> DatabaseResult<String> {
        let entity = DatabaseGenerator::entity(league, Some(Local::now().naive_local()));

        Ok(serde_json::to_string_pretty(&entity)?)
    }

    pub fn save(&self, league: &League) -> DatabaseResult<()> {
        let json = Self::to_json(league)?;

        let bytes = if self.is_compressed() {
            let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(json.as_bytes())?;
            encoder.finish()?
        } else {
            json.into_bytes()
        };

        let tmp_path = self.path.with_extension("tmp");

        fs::write(&tmp_path, &bytes)?;
        fs::rename(&tmp_path, &self.path)?;

        debug!("snapshot saved: {} ({} bytes)", self.path.display(), bytes.len());

        Ok(())
    }

    fn is_compressed(&self) -> bool {
        self.path.extension().is_some_and(|ext| ext == "gz")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LeagueLoader;
    use league_core::league::FixtureScheduler;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(file_name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();

        std::env::temp_dir().join(format!("ksf-{}-{}-{}", std::process::id(), nanos, file_name))
    }

    fn sample_league() -> League {
        let mut league = League::new(String::from("Snapshot Liga"));
        for name in ["Alpha", "Beta", "Gamma", "Delta"] {
            league.add_team(name).unwrap();
        }
        league.generate_fixtures(&FixtureScheduler::new()).unwrap();

        let ids: Vec<u32> = league.fixtures().iter().take(3).map(|f| f.id).collect();
        league.record_result(ids[0], 2, 2).unwrap();
        league.record_result(ids[1], 0, 1).unwrap();
        league.record_result(ids[2], 4, 3).unwrap();

        league
    }

    fn assert_round_trip(path: PathBuf) {
        let league = sample_league();
        let writer = SnapshotWriter::new(&path);

        writer.save(&league).unwrap();

        let entity = LeagueLoader::load_file(writer.path()).unwrap();
        assert!(entity.exported_at.is_some());

        let restored = DatabaseGenerator::generate(&entity).unwrap();
        assert_eq!(restored.name(), league.name());
        assert_eq!(restored.teams(), league.teams());
        assert_eq!(restored.fixtures(), league.fixtures());
        assert_eq!(restored.standings(), league.standings());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_plain_snapshot_round_trip() {
        assert_round_trip(temp_path("league.json"));
    }

    #[test]
    fn test_gzip_snapshot_round_trip() {
        let path = temp_path("league.json.gz");
        assert!(SnapshotWriter::new(&path).is_compressed());

        assert_round_trip(path);
    }
}
