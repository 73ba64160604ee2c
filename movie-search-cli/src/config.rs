//! Database locations.
//!
//! Resolution order per field: environment variable, then the TOML
//! config file, then a default under the user data directory.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::CliError;

const CATALOG_DB_ENV: &str = "MOVIE_SEARCH_CATALOG_DB";
const LOG_DB_ENV: &str = "MOVIE_SEARCH_LOG_DB";

/// Resolved database locations.
#[derive(Debug, Clone)]
pub(crate) struct AppConfig {
    pub(crate) catalog_db: PathBuf,
    pub(crate) log_db: PathBuf,
}

/// TOML config file format.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    databases: Option<DatabasesConfig>,
}

#[derive(Debug, Deserialize)]
struct DatabasesConfig {
    catalog: Option<PathBuf>,
    log: Option<PathBuf>,
}

impl AppConfig {
    pub(crate) fn load() -> Result<Self, CliError> {
        let file = load_config_file();

        let catalog_db = match std::env::var_os(CATALOG_DB_ENV) {
            Some(path) => PathBuf::from(path),
            None => match file.as_ref().and_then(|f| f.catalog.clone()) {
                Some(path) => path,
                None => default_db_path("catalog.db")?,
            },
        };

        let log_db = match std::env::var_os(LOG_DB_ENV) {
            Some(path) => PathBuf::from(path),
            None => match file.as_ref().and_then(|f| f.log.clone()) {
                Some(path) => path,
                None => default_db_path("events.db")?,
            },
        };

        Ok(Self { catalog_db, log_db })
    }
}

/// Return the path to the optional config file.
fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("movie-search").join("config.toml"))
}

fn load_config_file() -> Option<DatabasesConfig> {
    let path = config_path()?;
    let content = std::fs::read_to_string(&path).ok()?;
    match toml::from_str::<ConfigFile>(&content) {
        Ok(config) => config.databases,
        Err(e) => {
            log::warn!("Ignoring malformed config file {}: {}", path.display(), e);
            None
        }
    }
}

fn default_db_path(file_name: &str) -> Result<PathBuf, CliError> {
    let dir = dirs::data_dir()
        .ok_or_else(|| CliError::config("Could not determine data directory"))?;
    Ok(dir.join("movie-search").join(file_name))
}
