use crate::models::client_storage::{ClientStorage, StorageError, StorageKey};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

/// Persisted light/dark preference.
///
/// Stored as the bare string `"light"` or `"dark"` under the `theme` key.
pub struct ThemeState {
    storage: Rc<dyn ClientStorage>,
    preference: ThemePreference,
}

impl ThemeState {
    /// Reads the stored preference; missing or unknown values fall back to light.
    pub fn hydrate(storage: Rc<dyn ClientStorage>) -> Self {
        let preference = match storage.get_item(StorageKey::Theme) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
                warn!("{}, falling back to light", e);
                ThemePreference::default()
            }),
            Ok(None) => ThemePreference::default(),
            Err(e) => {
                warn!("Could not read theme preference: {}", e);
                ThemePreference::default()
            }
        };
        Self {
            storage,
            preference,
        }
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn set(&mut self, preference: ThemePreference) -> Result<(), StorageError> {
        self.storage
            .set_item(StorageKey::Theme, preference.as_str())?;
        self.preference = preference;
        Ok(())
    }

    pub fn toggle(&mut self) -> Result<ThemePreference, StorageError> {
        let next = self.preference.toggled();
        self.set(next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::client_storage::MemoryStorage;

    #[test]
    fn test_defaults_to_light() {
        let state = ThemeState::hydrate(Rc::new(MemoryStorage::new()));
        assert_eq!(state.preference(), ThemePreference::Light);
    }

    #[test]
    fn test_toggle_persists_bare_string() {
        let storage = Rc::new(MemoryStorage::new());
        let mut state = ThemeState::hydrate(storage.clone());

        assert_eq!(state.toggle().unwrap(), ThemePreference::Dark);
        assert_eq!(
            storage.get_item(StorageKey::Theme).unwrap().as_deref(),
            Some("dark")
        );
        assert_eq!(
            ThemeState::hydrate(storage).preference(),
            ThemePreference::Dark
        );
    }

    #[test]
    fn test_unknown_value_falls_back() {
        let storage = Rc::new(MemoryStorage::new());
        storage.set_item(StorageKey::Theme, "sepia").unwrap();
        assert_eq!(
            ThemeState::hydrate(storage).preference(),
            ThemePreference::Light
        );
    }
}
