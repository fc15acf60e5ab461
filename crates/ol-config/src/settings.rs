//! Settings and configuration structures.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use ol_calendar::{InMemoryStore, SeedData};
use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

/// Main application settings.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Seed data for the calendar store
    #[serde(default)]
    pub store: StoreConfig,
}

impl Settings {
    /// Load settings from configuration files and environment variables.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. `config/default.toml`
    /// 2. `config/{environment}.toml` (based on `ONLEAVE_ENV`)
    /// 3. Environment variables prefixed with `ONLEAVE_` (e.g. `ONLEAVE_STORE__SEED_FILE`)
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("ONLEAVE_ENV").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("ONLEAVE").separator("__"))
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        Ok(settings)
    }

    /// Parse settings from a TOML document.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}

/// Where calendar and holiday records come from.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// TOML or JSON seed document; an empty store when unset
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
}

impl StoreConfig {
    /// Build the in-memory store described by this configuration.
    pub fn open_store(&self) -> Result<InMemoryStore, ConfigError> {
        match &self.seed_file {
            None => Ok(InMemoryStore::new()),
            Some(path) => {
                let seed = load_seed(path)?;
                debug!(
                    path = %path.display(),
                    calendars = seed.calendars.len(),
                    holidays = seed.holidays.len(),
                    "loaded seed data"
                );
                Ok(InMemoryStore::from_seed(seed))
            }
        }
    }
}

/// Read a seed document, picking the format from the file extension.
fn load_seed(path: &Path) -> Result<SeedData, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }
    let format = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => FileFormat::Toml,
        Some("json") => FileFormat::Json,
        other => {
            return Err(ConfigError::InvalidValue {
                key: "store.seed_file".into(),
                message: format!("unsupported seed format {:?}", other.unwrap_or("")),
            })
        }
    };
    let config = Config::builder()
        .add_source(File::from(path).format(format))
        .build()?;
    Ok(config.try_deserialize()?)
}
