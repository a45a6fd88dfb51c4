//! Initialize calendar use case

use crate::domain::EventCategory;
use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository};
use std::fs;
use std::path::Path;

/// Initialize a new calendar at the specified path.
pub fn init(path: &Path, default_category: EventCategory) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    // Initialize .eventify directory
    repo.initialize()?;

    // Create and save default config
    let config = Config::new(default_category);
    repo.save_config(&config)?;

    println!("Initialized eventify calendar at {}", path.display());
    println!("Default category: {}", default_category);

    Ok(())
}
