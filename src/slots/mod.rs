//! Durable named slots holding string values.
//!
//! A slot is the server-side equivalent of a browser storage key: one name, one
//! string, overwritten as a whole.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::errors::AppError;

/// Named key-value storage the local store and identity provider persist into.
pub trait DurableSlots: Send + Sync {
    /// Read a slot. `None` when it was never written or does not hold text.
    fn read(&self, name: &str) -> Result<Option<String>, AppError>;

    /// Replace the slot's value.
    fn write(&self, name: &str, value: &str) -> Result<(), AppError>;
}

/// Directory-backed slots, one file per slot name.
#[derive(Debug, Clone)]
pub struct FileSlots {
    dir: PathBuf,
}

impl FileSlots {
    /// Open (and create if needed) a slot directory.
    pub fn open(dir: &Path) -> Result<Self, AppError> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn slot_path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl DurableSlots for FileSlots {
    fn read(&self, name: &str) -> Result<Option<String>, AppError> {
        let bytes = match fs::read(self.slot_path(name)) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        // Slots only ever hold text; anything else reads as unset and is replaced on write
        match String::from_utf8(bytes) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!("Discarding slot {} with non-UTF-8 contents: {}", name, e);
                Ok(None)
            }
        }
    }

    fn write(&self, name: &str, value: &str) -> Result<(), AppError> {
        // Write beside the target and rename so readers never see a torn file
        let tmp = self.dir.join(format!(".{}.tmp", name));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, self.slot_path(name))?;
        Ok(())
    }
}

/// In-memory slots for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySlots {
    slots: std::sync::Mutex<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl DurableSlots for MemorySlots {
    fn read(&self, name: &str) -> Result<Option<String>, AppError> {
        let slots = self
            .slots
            .lock()
            .map_err(|_| AppError::Storage("slot map poisoned".to_string()))?;
        Ok(slots.get(name).cloned())
    }

    fn write(&self, name: &str, value: &str) -> Result<(), AppError> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| AppError::Storage("slot map poisoned".to_string()))?;
        slots.insert(name.to_string(), value.to_string());
        Ok(())
    }
}
