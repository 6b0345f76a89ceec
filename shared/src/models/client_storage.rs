use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;

/// Keys under which the dashboard persists client state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// JSON-serialized `User`
    User,
    /// `"light"` or `"dark"`
    Theme,
    /// Opaque session token issued at login/signup
    Token,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::User => "user",
            StorageKey::Theme => "theme",
            StorageKey::Token => "token",
        }
    }

    /// Keys that belong to the signed-in session and are cleared on logout.
    pub fn session_keys() -> [StorageKey; 2] {
        [StorageKey::User, StorageKey::Token]
    }
}

/// Storage error types
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage not available: {0}")]
    NotAvailable(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Storage quota exceeded")]
    QuotaExceeded,
}

/// Synchronous key/value store for persisted client state.
///
/// Browser builds back this with `localStorage`; tests and native builds use
/// [`MemoryStorage`]. Values are raw strings, typed access goes through
/// [`load`] and [`save`].
pub trait ClientStorage {
    fn get_item(&self, key: StorageKey) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: StorageKey, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: StorageKey) -> Result<(), StorageError>;
}

/// Reads and deserializes a JSON value.
pub fn load<T: DeserializeOwned>(
    storage: &dyn ClientStorage,
    key: StorageKey,
) -> Result<Option<T>, StorageError> {
    match storage.get_item(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::Deserialization(e.to_string())),
        None => Ok(None),
    }
}

/// Serializes a value to JSON and stores it.
pub fn save<T: Serialize + ?Sized>(
    storage: &dyn ClientStorage,
    key: StorageKey,
    value: &T,
) -> Result<(), StorageError> {
    let data =
        serde_json::to_string(value).map_err(|e| StorageError::Serialization(e.to_string()))?;
    storage.set_item(key, &data)
}

/// In-memory storage used by tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<&'static str, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl ClientStorage for MemoryStorage {
    fn get_item(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key.as_str()).cloned())
    }

    fn set_item(&self, key: StorageKey, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.as_str(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: StorageKey) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key.as_str());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key_names() {
        assert_eq!(StorageKey::User.as_str(), "user");
        assert_eq!(StorageKey::Theme.as_str(), "theme");
        assert_eq!(StorageKey::Token.as_str(), "token");
    }

    #[test]
    fn test_typed_round_trip_through_memory_storage() {
        let storage = MemoryStorage::new();
        save(&storage, StorageKey::Token, "abc").unwrap();

        let token: Option<String> = load(&storage, StorageKey::Token).unwrap();
        assert_eq!(token.as_deref(), Some("abc"));

        storage.remove_item(StorageKey::Token).unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_corrupted_value_reports_deserialization_error() {
        let storage = MemoryStorage::new();
        storage.set_item(StorageKey::User, "{not json").unwrap();

        let result: Result<Option<u32>, _> = load(&storage, StorageKey::User);
        assert!(matches!(result, Err(StorageError::Deserialization(_))));
    }
}
