use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::constants::STORAGE_KEY;

use super::session::SaveState;

#[derive(Debug)]
pub enum StorageError {
    /// The backing store could not be reached at all.
    Unavailable(String),
    Malformed(serde_json::Error),
    /// Parsed fine but holds a state no game could produce.
    Invalid,
    Write(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable(reason) => write!(f, "storage unavailable: {}", reason),
            StorageError::Malformed(err) => write!(f, "malformed save data: {}", err),
            StorageError::Invalid => f.write_str("save data holds an invalid board"),
            StorageError::Write(reason) => write!(f, "failed to write save data: {}", reason),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Malformed(err) => Some(err),
            _ => None,
        }
    }
}

/// String key-value store shaped like the browser's `localStorage`.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Rc<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub fn encode(state: &SaveState) -> Result<String, StorageError> {
    serde_json::to_string(state).map_err(StorageError::Malformed)
}

pub fn decode(raw: &str) -> Result<SaveState, StorageError> {
    let state: SaveState = serde_json::from_str(raw).map_err(StorageError::Malformed)?;
    if !state.is_consistent() {
        return Err(StorageError::Invalid);
    }
    Ok(state)
}

/// Reads and writes the single save record.
///
/// `load` and `save` never fail from the caller's point of view: a broken or
/// missing record reads as `None` and a failed write is logged and dropped,
/// leaving the in-memory state in charge. `try_load`/`try_save` expose the
/// underlying errors.
pub struct Persistence<S> {
    storage: S,
    key: &'static str,
}

impl<S: KeyValueStorage> Persistence<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: &'static str) -> Self {
        Self { storage, key }
    }

    pub fn try_load(&self) -> Result<Option<SaveState>, StorageError> {
        match self.storage.get_item(self.key)? {
            Some(raw) => decode(&raw).map(Some),
            None => Ok(None),
        }
    }

    pub fn load(&self) -> Option<SaveState> {
        match self.try_load() {
            Ok(state) => state,
            Err(err) => {
                log::warn!("Discarding saved game under {:?}: {}", self.key, err);
                None
            }
        }
    }

    pub fn try_save(&self, state: &SaveState) -> Result<(), StorageError> {
        let raw = encode(state)?;
        self.storage.set_item(self.key, &raw)
    }

    pub fn save(&self, state: &SaveState) {
        if let Err(err) = self.try_save(state) {
            log::warn!("Could not save game under {:?}: {}", self.key, err);
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
