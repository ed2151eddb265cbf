use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Errors raised by a key-value storage backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage refused write for key `{key}`: {reason}")]
    WriteRefused { key: String, reason: String },
}

/// Abstraction over the browser's durable string storage.
///
/// The browser front-end implements this over `localStorage`; tests and host
/// tools use [`MemoryStorage`].
pub trait PreferenceStorage {
    type Error: std::error::Error + 'static;

    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Overwrite the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend refuses the write (quota, disabled storage).
    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Remove the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be modified.
    fn remove_item(&self, key: &str) -> Result<(), Self::Error>;
}

/// In-memory storage with shared handles, so a clone observes the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
    refuse_writes: Rc<Cell<bool>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing serialization.
    #[must_use]
    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Simulate a full or disabled backend: every write fails from now on.
    pub fn refuse_writes(&self, refuse: bool) {
        self.refuse_writes.set(refuse);
    }

    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl PreferenceStorage for MemoryStorage {
    type Error = StorageError;

    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        if self.refuse_writes.get() {
            return Err(StorageError::WriteRefused {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            });
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), Self::Error> {
        if self.refuse_writes.get() {
            return Err(StorageError::WriteRefused {
                key: key.to_string(),
                reason: "storage disabled".to_string(),
            });
        }
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_same_backing_map() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.set_item("k", "v").unwrap();
        assert_eq!(other.get_item("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn refused_writes_leave_previous_value() {
        let storage = MemoryStorage::new().with_item("k", "old");
        storage.refuse_writes(true);
        let err = storage.set_item("k", "new").unwrap_err();
        assert!(matches!(err, StorageError::WriteRefused { .. }));
        assert_eq!(storage.raw("k").as_deref(), Some("old"));
    }
}
