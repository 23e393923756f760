use crate::DatabaseResult;
use chrono::NaiveDateTime;
use flate2::read::GzDecoder;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::Path;

const STATIC_LEAGUE_JSON: &str = include_str!("../data/league.json");

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Stored form of a league, shared by the seed file, snapshot files and
/// the export endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueEntity {
    pub league_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub teams: Vec<TeamEntity>,
    #[serde(default)]
    pub fixtures: Vec<FixtureEntity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamEntity {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureEntity {
    pub id: u32,
    pub round: u32,
    #[serde(default)]
    pub match_number: u32,
    pub home_id: u32,
    pub away_id: u32,
    #[serde(default)]
    pub gh: Option<u16>,
    #[serde(default)]
    pub ga: Option<u16>,
}

pub struct LeagueLoader;

impl LeagueLoader {
    pub fn load_embedded() -> DatabaseResult<LeagueEntity> {
        Ok(serde_json::from_str(STATIC_LEAGUE_JSON)?)
    }

    pub fn load_file(path: &Path) -> DatabaseResult<LeagueEntity> {
        Self::from_bytes(&fs::read(path)?)
    }

    /// Parses plain or gzip-compressed snapshot bytes
    pub fn from_bytes(bytes: &[u8]) -> DatabaseResult<LeagueEntity> {
        if bytes.starts_with(&GZIP_MAGIC) {
            let mut json = Vec::new();
            GzDecoder::new(bytes).read_to_end(&mut json)?;

            return Ok(serde_json::from_slice(&json)?);
        }

        Ok(serde_json::from_slice(bytes)?)
    }
}
