//! File system repository for the event collection

use crate::domain::Event;
use crate::error::{EventifyError, Result};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract storage for the persisted event collection.
///
/// The collection is one durable unit: `load_events` always returns the
/// whole collection and `save_events` always replaces it.
pub trait EventStorage {
    /// Load the full event collection
    fn load_events(&self) -> Result<Vec<Event>>;

    /// Replace the full event collection
    fn save_events(&self, events: &[Event]) -> Result<()>;
}

/// File system implementation backed by .eventify/events.json
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the calendar root by walking up from the current directory
    /// First checks EVENTIFY_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        // 1. Check EVENTIFY_ROOT environment variable first
        if let Ok(root_path) = std::env::var("EVENTIFY_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_eventify_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(EventifyError::Config(format!(
                    "EVENTIFY_ROOT is set to '{}' but no .eventify directory found. \
                    Run 'eventify init' in that directory or unset EVENTIFY_ROOT.",
                    path.display()
                )));
            }
        }

        // 2. Fall back to walking up from current directory
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the calendar root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_eventify_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    // Reached filesystem root without finding .eventify
                    return Err(EventifyError::NotEventifyDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .eventify directory
    fn has_eventify_dir(path: &Path) -> bool {
        path.join(".eventify").is_dir()
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_eventify_dir(&self.root)
    }

    /// Create the .eventify directory
    pub fn initialize(&self) -> Result<()> {
        let eventify_dir = self.root.join(".eventify");

        if eventify_dir.exists() {
            return Err(EventifyError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&eventify_dir)?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn events_path(&self) -> PathBuf {
        self.root.join(".eventify").join("events.json")
    }

    /// Write the serialized collection using a best-effort atomic
    /// replace: write to a temp file in the same directory, then rename
    /// into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we
    /// remove the destination first.
    fn write_events_atomic(&self, contents: &str) -> Result<()> {
        let path = self.events_path();

        let tmp_name = format!("events.json.eventify-tmp-{}", std::process::id());
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, contents)
            .map_err(|e| EventifyError::Storage(format!("failed to write events: {}", e)))?;

        if path.exists() {
            fs::remove_file(&path)
                .map_err(|e| EventifyError::Storage(format!("failed to replace events: {}", e)))?;
        }

        fs::rename(&tmp_path, &path)
            .map_err(|e| EventifyError::Storage(format!("failed to replace events: {}", e)))?;

        Ok(())
    }
}

impl EventStorage for FileSystemRepository {
    fn load_events(&self) -> Result<Vec<Event>> {
        let path = self.events_path();

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(EventifyError::Io(e)),
        };

        match serde_json::from_str(&contents) {
            Ok(events) => Ok(events),
            Err(e) => {
                // Recoverable default: an unreadable collection behaves
                // as an empty one. The next successful mutation rewrites
                // the file.
                eprintln!(
                    "Warning: could not parse {} ({}); treating the collection as empty",
                    path.display(),
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    fn save_events(&self, events: &[Event]) -> Result<()> {
        if !self.is_initialized() {
            return Err(EventifyError::NotEventifyDirectory(self.root.clone()));
        }

        let contents = serde_json::to_string_pretty(events)
            .map_err(|e| EventifyError::Storage(format!("failed to serialize events: {}", e)))?;

        self.write_events_atomic(&contents)
    }
}
