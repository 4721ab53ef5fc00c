//! Key-value capability backing the session marker.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::{debug, warn};

use crate::errors::AppError;

/// Minimal string key-value store, in the shape of browser local storage.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str) -> Result<(), AppError>;
}

/// Process-local store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
        Ok(())
    }
}

/// Store persisted as a flat JSON object, so the marker survives restarts.
///
/// A missing file reads as empty. An unreadable or corrupt file also reads as
/// empty (logged), which means "not logged in".
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: RwLock<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<HashMap<String, String>, AppError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let contents = fs::read_to_string(&self.path).map_err(|e| AppError::io(&self.path, e))?;
        if contents.trim().is_empty() {
            return Ok(HashMap::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_entries(&self, entries: &HashMap<String, String>) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
        }
        let contents = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, contents).map_err(|e| AppError::io(&self.path, e))?;
        debug!(path = %self.path.display(), "Session store written");
        Ok(())
    }

    fn update(&self, apply: impl FnOnce(&mut HashMap<String, String>)) -> Result<(), AppError> {
        let _guard = self.lock.write().unwrap_or_else(|e| e.into_inner());
        let mut entries = self.read_entries().unwrap_or_else(|e| {
            warn!(error = %e, "Session store unreadable; starting from empty");
            HashMap::new()
        });
        apply(&mut entries);
        self.write_entries(&entries).map_err(|e| {
            AppError::Session(format!("Failed to write {}: {e}", self.path.display()))
        })
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        let _guard = self.lock.read().unwrap_or_else(|e| e.into_inner());
        match self.read_entries() {
            Ok(mut entries) => entries.remove(key),
            Err(e) => {
                warn!(error = %e, "Session store unreadable");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.update(|entries| {
            entries.remove(key);
        })
    }
}
