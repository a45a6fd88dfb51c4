//! Configuration management

use crate::domain::EventCategory;
use crate::error::{EventifyError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub default_category: EventCategory,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new(default_category: EventCategory) -> Self {
        Config {
            default_category,
            created: Utc::now(),
        }
    }

    /// Load config from .eventify/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".eventify").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                EventifyError::NotEventifyDirectory(path.to_path_buf())
            } else {
                EventifyError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| EventifyError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .eventify/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let eventify_dir = path.join(".eventify");
        let config_path = eventify_dir.join("config.toml");

        // Ensure .eventify directory exists
        if !eventify_dir.exists() {
            fs::create_dir(&eventify_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| EventifyError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}
