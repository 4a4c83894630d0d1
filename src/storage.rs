// storage.rs

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::{self, create_dir_all, remove_file};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::Result;
use crate::state::TrackerState;

pub const DEFAULT_STORAGE_KEY: &str = "attribute_tracker_data";

/// Where the whole tracker state lives between runs, under a single key.
pub trait StateStore {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<TrackerState>>;
    fn save(&mut self, state: &TrackerState) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
}

// Stores the state as a pretty-printed JSON file named after the storage key.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", key)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> Result<Option<TrackerState>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let state = serde_json::from_str(&data)?;
        Ok(Some(state))
    }

    fn save(&mut self, state: &TrackerState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            create_dir_all(parent)?; // Create the directory if it doesn't exist.
        }
        let serialized = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, serialized)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        match remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process key/value store holding serialized records. Clones share the
/// same map, so a caller can keep a handle and inspect what was written.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    key: String,
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            entries: Rc::default(),
        }
    }

    // The raw record under this store's key.
    pub fn raw(&self) -> Option<String> {
        self.entries.borrow().get(&self.key).cloned()
    }

    pub fn set_raw(&self, value: impl Into<String>) {
        self.entries.borrow_mut().insert(self.key.clone(), value.into());
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<Option<TrackerState>> {
        match self.raw() {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, state: &TrackerState) -> Result<()> {
        self.set_raw(serde_json::to_string(state)?);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.entries.borrow_mut().remove(&self.key);
        Ok(())
    }
}
