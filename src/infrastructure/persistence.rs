//! Snapshot storage backends.
//!
//! The file backend keeps the whole workout list as one pretty-printed
//! JSON document; the in-memory backend backs tests and sessions where
//! no writable data directory could be found.

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use crate::domain::{SnapshotStorage, Workout};

/// File-backed snapshot storage under one fixed path.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotStorage for JsonFileStorage {
    fn read_snapshot(&self) -> Result<Option<Vec<Workout>>, String> {
        if !self.path.exists() {
            return Ok(None);
        }

        match fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str::<Vec<Workout>>(&content) {
                Ok(workouts) => Ok(Some(workouts)),
                Err(e) => Err(format!("Invalid snapshot format - {}", e)),
            },
            Err(e) => Err(e.to_string()),
        }
    }

    fn write_snapshot(&mut self, workouts: &[Workout]) -> Result<(), String> {
        match serde_json::to_string_pretty(workouts) {
            Ok(json) => fs::write(&self.path, json).map_err(|e| e.to_string()),
            Err(e) => Err(format!("Serialization failed: {}", e)),
        }
    }

    fn clear_snapshot(&mut self) -> Result<(), String> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| e.to_string())
        } else {
            Ok(())
        }
    }
}

/// In-memory snapshot storage.
///
/// Clones share the same underlying snapshot, so a fresh store built
/// over a clone sees what an earlier store persisted - which is exactly
/// what the round-trip tests need. Data still goes through JSON, so the
/// serialization path matches the file backend.
#[derive(Default, Clone)]
pub struct MemoryStorage {
    snapshot: Rc<RefCell<Option<String>>>,
}

impl MemoryStorage {
    /// A storage whose snapshot exists but cannot be parsed.
    pub fn corrupt() -> Self {
        Self {
            snapshot: Rc::new(RefCell::new(Some("not json".to_string()))),
        }
    }
}

impl SnapshotStorage for MemoryStorage {
    fn read_snapshot(&self) -> Result<Option<Vec<Workout>>, String> {
        match self.snapshot.borrow().as_deref() {
            Some(content) => serde_json::from_str::<Vec<Workout>>(content)
                .map(Some)
                .map_err(|e| format!("Invalid snapshot format - {}", e)),
            None => Ok(None),
        }
    }

    fn write_snapshot(&mut self, workouts: &[Workout]) -> Result<(), String> {
        let json = serde_json::to_string(workouts).map_err(|e| e.to_string())?;
        *self.snapshot.borrow_mut() = Some(json);
        Ok(())
    }

    fn clear_snapshot(&mut self) -> Result<(), String> {
        *self.snapshot.borrow_mut() = None;
        Ok(())
    }
}
