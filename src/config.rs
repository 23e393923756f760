use color_eyre::eyre::{Result, WrapErr};
use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 18000;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: u16,
    pub data_path: Option<PathBuf>,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match var("LEAGUE_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .wrap_err_with(|| format!("LEAGUE_PORT is not a valid port: '{}'", raw))?,
            None => DEFAULT_PORT,
        };

        let data_path = var("LEAGUE_DATA")
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        let log_filter = var("LEAGUE_LOG").unwrap_or_else(|| String::from(DEFAULT_LOG_FILTER));

        Ok(AppConfig {
            port,
            data_path,
            log_filter,
        })
    }
}
