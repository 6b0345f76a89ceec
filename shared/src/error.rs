use crate::models::client_storage::StorageError;
use serde_json::Error as JsonError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum SharedError {
    /// Lookup miss. Displays as "<entity> not found", e.g. "Video not found".
    #[error("{entity} not found")]
    NotFound { entity: String },

    #[error("Validation error: {0}")]
    Validation(String),

    /// Failure a real backend could retry (timeouts, dropped connections).
    #[error("Temporary failure: {0}")]
    Transient(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl SharedError {
    pub fn not_found(entity: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether retrying the same call could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transient(_))
    }

    /// Short message suitable for a toast or an inline banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound { .. } | Self::Validation(_) | Self::Unauthorized(_) => self.to_string(),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn not_found_message_names_the_entity() {
        let err = SharedError::not_found("Video");
        assert_eq!(err.to_string(), "Video not found");
        assert!(err.is_not_found());
        assert!(!err.is_transient());
    }

    #[test]
    fn json_errors_become_conversion_errors() {
        let err: SharedError = serde_json::from_str::<u32>("\"nope\"").unwrap_err().into();
        assert!(matches!(err, SharedError::Conversion(_)));
        assert_eq!(err.user_message(), "Something went wrong. Please try again.");
    }

    #[test]
    fn storage_errors_convert() {
        let err: SharedError = StorageError::NotAvailable("localStorage".to_string()).into();
        assert_eq!(err.to_string(), "Storage error: Storage not available: localStorage");
    }
}
