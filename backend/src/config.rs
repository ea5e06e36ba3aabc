//! Server configuration file support.
//!
//! Settings are read from an optional TOML file and then overridden by
//! environment variables:
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//! session_idle_secs = 1800
//!
//! [data]
//! source = "data/flights.csv"     # file path or http(s) URL
//! fetch_timeout_secs = 60
//!
//! [data.airline_names]
//! XE = "ExpressJet Airlines Inc."
//!
//! [aggregation]
//! histogram_bins = 40
//! heatmap_distance_bins = 30
//! default_airline_count = 5
//! distance_step = 50
//! ```

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::models::AirlineDirectory;
use crate::services::AggregationSettings;
use crate::store::{DataSource, LoadError, LoadResult, DEFAULT_DATA_URL};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "FLIGHT_DELAYS_CONFIG";
pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const DATA_SOURCE_ENV: &str = "FLIGHT_DATA_SOURCE";

/// Sessions untouched for longer than this are dropped.
pub const DEFAULT_SESSION_IDLE_TTL: Duration = Duration::from_secs(30 * 60);

/// Full application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub aggregation: AggregationSettings,
}

/// Bind address settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Sessions unused for this long are dropped.
    #[serde(default = "default_session_idle_secs")]
    pub session_idle_secs: u64,
}

/// Where the flight table comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
    /// Extra or corrected carrier names on top of the built-in directory.
    #[serde(default)]
    pub airline_names: BTreeMap<String, String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_session_idle_secs() -> u64 {
    DEFAULT_SESSION_IDLE_TTL.as_secs()
}

fn default_source() -> String {
    DEFAULT_DATA_URL.to_string()
}

fn default_fetch_timeout_secs() -> u64 {
    60
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            session_idle_secs: default_session_idle_secs(),
        }
    }
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            source: default_source(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            airline_names: BTreeMap::new(),
        }
    }
}

impl ServerSettings {
    pub fn session_idle_ttl(&self) -> Duration {
        Duration::from_secs(self.session_idle_secs)
    }
}

impl DataSettings {
    pub fn data_source(&self) -> LoadResult<DataSource> {
        DataSource::parse(&self.source)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn airline_directory(&self) -> AirlineDirectory {
        AirlineDirectory::standard().with_overrides(self.airline_names.clone())
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> LoadResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LoadError::configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> LoadResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| LoadError::configuration(format!("Failed to parse config file: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no request could succeed with.
    pub fn validate(&self) -> LoadResult<()> {
        let aggregation = &self.aggregation;
        if aggregation.histogram_bins == 0 {
            return Err(LoadError::configuration(
                "aggregation.histogram_bins must be at least 1",
            ));
        }
        if aggregation.heatmap_distance_bins == 0 {
            return Err(LoadError::configuration(
                "aggregation.heatmap_distance_bins must be at least 1",
            ));
        }
        if !(aggregation.distance_step.is_finite() && aggregation.distance_step > 0.0) {
            return Err(LoadError::configuration(format!(
                "aggregation.distance_step must be positive, got {}",
                aggregation.distance_step
            )));
        }
        if self.data.fetch_timeout_secs == 0 {
            return Err(LoadError::configuration(
                "data.fetch_timeout_secs must be at least 1",
            ));
        }
        if self.server.session_idle_secs == 0 {
            return Err(LoadError::configuration(
                "server.session_idle_secs must be at least 1",
            ));
        }
        Ok(())
    }

    /// Resolve the configuration the server starts with.
    ///
    /// Uses `$FLIGHT_DELAYS_CONFIG` if set (the file must exist), otherwise
    /// the first of `flight-delays.toml` / `backend/flight-delays.toml` that
    /// exists, otherwise the defaults. Environment overrides apply last.
    pub fn load() -> LoadResult<Self> {
        let mut config = match env::var(CONFIG_PATH_ENV) {
            Ok(path) => {
                info!("Loading configuration from {}", path);
                Self::from_file(&path)?
            }
            Err(_) => match Self::default_location() {
                Some(path) => {
                    info!("Loading configuration from {}", path.display());
                    Self::from_file(&path)?
                }
                None => {
                    debug!("No configuration file found, using defaults");
                    Self::default()
                }
            },
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    fn default_location() -> Option<PathBuf> {
        [
            PathBuf::from("flight-delays.toml"),
            PathBuf::from("backend/flight-delays.toml"),
        ]
        .into_iter()
        .find(|path| path.exists())
    }

    /// Apply `HOST`, `PORT` and `FLIGHT_DATA_SOURCE` when set.
    pub fn apply_env_overrides(&mut self) -> LoadResult<()> {
        if let Ok(host) = env::var(HOST_ENV) {
            self.server.host = host;
        }
        if let Ok(port) = env::var(PORT_ENV) {
            self.server.port = port.parse().map_err(|_| {
                LoadError::configuration(format!("{} is not a valid port: {}", PORT_ENV, port))
            })?;
        }
        if let Ok(source) = env::var(DATA_SOURCE_ENV) {
            self.data.source = source;
        }
        Ok(())
    }

    /// `host:port` for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
