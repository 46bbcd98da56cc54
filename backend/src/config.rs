//! Server configuration file and environment variable handling.
//!
//! Settings are resolved in three layers, lowest precedence first:
//! built-in defaults, an optional TOML file, then environment variables.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//! body_limit_bytes = 2097152
//!
//! [forecast]
//! max_points = 100000   # 0 disables the cap
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::services::ForecastOptions;

/// Explicit path to the TOML config file.
pub const CONFIG_PATH_VAR: &str = "FORECAST_CONFIG";
pub const HOST_VAR: &str = "HOST";
pub const PORT_VAR: &str = "PORT";
pub const BODY_LIMIT_VAR: &str = "FORECAST_BODY_LIMIT";
pub const MAX_POINTS_VAR: &str = "FORECAST_MAX_POINTS";

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{key} has invalid value '{value}': {reason}")]
    InvalidVar {
        key: String,
        value: String,
        reason: String,
    },
}

/// Complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub forecast: ForecastSettings,
}

/// Listener and request settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Maximum accepted request body size
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            body_limit_bytes: default_body_limit_bytes(),
        }
    }
}

/// Forecast computation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastSettings {
    /// Maximum number of projected points per response; 0 disables the cap
    #[serde(default = "default_max_points")]
    pub max_points: usize,
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self {
            max_points: default_max_points(),
        }
    }
}

impl ForecastSettings {
    pub fn options(&self) -> ForecastOptions {
        ForecastOptions {
            max_points: (self.max_points > 0).then_some(self.max_points),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_body_limit_bytes() -> usize {
    2 * 1024 * 1024
}

fn default_max_points() -> usize {
    100_000
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// Uses the file named by `FORECAST_CONFIG` when set, otherwise the first
    /// `forecast.toml` found in a standard location, otherwise defaults. Environment
    /// variables are applied last.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read or parsed, or if an
    /// environment variable holds an unparseable value.
    pub fn load() -> Result<Self, ConfigError> {
        let base = match env::var(CONFIG_PATH_VAR) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::from_default_location()?.unwrap_or_default(),
        };
        base.with_overrides(|key| env::var(key).ok())
    }

    /// Load configuration from a TOML file. Missing keys take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Search for `forecast.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    ///
    /// Returns `Ok(None)` when no file exists.
    pub fn from_default_location() -> Result<Option<Self>, ConfigError> {
        let search_paths = [
            PathBuf::from("forecast.toml"),
            PathBuf::from("backend/forecast.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path).map(Some);
            }
        }

        Ok(None)
    }

    /// Apply environment overrides read through `lookup`.
    ///
    /// # Environment Variables
    /// - `HOST`: Server host
    /// - `PORT`: Server port
    /// - `FORECAST_BODY_LIMIT`: Maximum request body size in bytes
    /// - `FORECAST_MAX_POINTS`: Output cap per response (0 = unlimited)
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(HOST_VAR) {
            self.server.host = host;
        }
        if let Some(port) = parse_var(&lookup, PORT_VAR)? {
            self.server.port = port;
        }
        if let Some(limit) = parse_var(&lookup, BODY_LIMIT_VAR)? {
            self.server.body_limit_bytes = limit;
        }
        if let Some(max_points) = parse_var(&lookup, MAX_POINTS_VAR)? {
            self.forecast.max_points = max_points;
        }
        Ok(self)
    }

    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::InvalidVar {
                key: key.to_string(),
                value: raw.clone(),
                reason: e.to_string(),
            }),
    }
}
