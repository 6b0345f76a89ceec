use gloo_storage::{LocalStorage, Storage};
use log::error;
use shared::{ClientStorage, StorageError, StorageKey};
use wasm_bindgen::JsValue;

/// `localStorage`-backed client storage.
///
/// Values are stored as raw strings so the theme stays a bare `"dark"` rather
/// than a JSON string literal.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl ClientStorage for BrowserStorage {
    fn get_item(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        LocalStorage::raw()
            .get_item(key.as_str())
            .map_err(|e| StorageError::NotAvailable(describe(e)))
    }

    fn set_item(&self, key: StorageKey, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key.as_str(), value)
            .map_err(|e| {
                error!("Failed to write {} to local storage: {}", key.as_str(), describe(e));
                StorageError::QuotaExceeded
            })
    }

    fn remove_item(&self, key: StorageKey) -> Result<(), StorageError> {
        LocalStorage::delete(key.as_str());
        Ok(())
    }
}
