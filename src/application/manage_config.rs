//! Config management use case

use crate::domain::EventCategory;
use crate::error::{EventifyError, Result};
use crate::infrastructure::{Config, FileSystemRepository};
use std::str::FromStr;

/// Service for managing calendar configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "category" => Ok(config.default_category.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(EventifyError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: category, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "category" => {
                let category = EventCategory::from_str(value).map_err(EventifyError::Config)?;
                config.default_category = category;
            }
            "created" => {
                return Err(EventifyError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(EventifyError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: category",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
