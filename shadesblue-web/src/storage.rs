use crate::dom;
use shadesblue_core::{PreferenceStorage, PreferenceStore, StorageError};

/// `localStorage`-backed preference storage. Every call re-acquires the
/// handle so a storage that becomes unavailable mid-session fails soft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStorage;

impl PreferenceStorage for BrowserStorage {
    type Error = StorageError;

    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error> {
        let storage = dom::local_storage()
            .map_err(|e| StorageError::Unavailable(dom::js_error_message(&e)))?;
        storage
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(dom::js_error_message(&e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        let storage = dom::local_storage()
            .map_err(|e| StorageError::Unavailable(dom::js_error_message(&e)))?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::WriteRefused {
                key: key.to_string(),
                reason: dom::js_error_message(&e),
            })
    }

    fn remove_item(&self, key: &str) -> Result<(), Self::Error> {
        let storage = dom::local_storage()
            .map_err(|e| StorageError::Unavailable(dom::js_error_message(&e)))?;
        storage
            .remove_item(key)
            .map_err(|e| StorageError::WriteRefused {
                key: key.to_string(),
                reason: dom::js_error_message(&e),
            })
    }
}

/// The preference store the site runs against.
#[must_use]
pub const fn preference_store() -> PreferenceStore<BrowserStorage> {
    PreferenceStore::new(BrowserStorage)
}
