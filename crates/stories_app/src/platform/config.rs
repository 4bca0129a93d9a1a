//! Startup configuration, read from a RON file.
//!
//! `STORIES_CONFIG` names the file; otherwise `./stories.ron` is used. A
//! missing file means defaults. Every field is optional.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use engine_logging::LogDestination;
use log::LevelFilter;
use serde::Deserialize;
use stories_core::{SearchEndpoint, DEFAULT_API_BASE, DEFAULT_SEARCH_TERM, SEARCH_TERM_KEY};
use stories_engine::FetchSettings;
use thiserror::Error;

const CONFIG_ENV: &str = "STORIES_CONFIG";
const CONFIG_FILENAME: &str = "stories.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("invalid config value for `{field}`: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base: String,
    pub default_term: String,
    pub term_key: String,
    pub state_dir: PathBuf,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_body_bytes: u64,
    pub log_destination: String,
    pub log_level: String,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            default_term: DEFAULT_SEARCH_TERM.to_string(),
            term_key: SEARCH_TERM_KEY.to_string(),
            state_dir: PathBuf::from("."),
            connect_timeout_secs: fetch.connect_timeout.as_secs(),
            request_timeout_secs: fetch.request_timeout.as_secs(),
            max_body_bytes: fetch.max_bytes,
            log_destination: "file".to_string(),
            log_level: "info".to_string(),
            log_file: PathBuf::from("./stories.log"),
        }
    }
}

impl AppConfig {
    pub fn endpoint(&self) -> Result<SearchEndpoint, ConfigError> {
        SearchEndpoint::new(&self.api_base).map_err(|err| ConfigError::Invalid {
            field: "api_base",
            message: err.to_string(),
        })
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_body_bytes,
        }
    }

    pub fn log_destination(&self) -> Result<LogDestination, ConfigError> {
        self.log_destination
            .parse()
            .map_err(|message| ConfigError::Invalid {
                field: "log_destination",
                message,
            })
    }

    pub fn log_level(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level.parse().map_err(|_| ConfigError::Invalid {
            field: "log_level",
            message: format!("unknown level `{}`", self.log_level),
        })
    }
}

pub fn load() -> Result<AppConfig, ConfigError> {
    let path = std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}
