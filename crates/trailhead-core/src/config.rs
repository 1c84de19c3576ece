//! Configuration for trailhead
//!
//! Configuration is read from a TOML file passed with `--config`.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{Result, TrailheadError};

pub use types::{
    SearchConfig, TrailheadConfig, CONFIG_FORMAT_VERSION, DEFAULT_FROM, DEFAULT_TO,
};

impl TrailheadConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: TrailheadConfig = toml::from_str(&content)?;
        config.validate()?;

        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Load configuration if a path was given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.version > CONFIG_FORMAT_VERSION {
            return Err(TrailheadError::invalid_value(
                "config version",
                format!(
                    "{} (newest supported is {})",
                    self.version, CONFIG_FORMAT_VERSION
                ),
            ));
        }
        if self.search.strategies.is_empty() {
            crate::bail_invalid!("search.strategies", "empty list");
        }
        Ok(())
    }
}
