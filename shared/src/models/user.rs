use crate::error::{Result, SharedError};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Social accounts a creator has linked to the dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectedAccounts {
    pub youtube: bool,
    pub instagram: bool,
    pub tiktok: bool,
}

/// The signed-in creator
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,

    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,

    #[validate(regex(path = "crate::validation::EMAIL_REGEX", message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 100, message = "Channel name is required"))]
    pub channel_name: String,

    pub subscriber_count: u64,

    pub profile_picture: Option<String>,

    #[serde(default)]
    pub connected_accounts: ConnectedAccounts,
}

impl User {
    /// Validates the user's data
    pub fn validate_fields(&self) -> Result<()> {
        self.validate()
            .map_err(|e| SharedError::Validation(e.to_string()))
    }

    /// Shallow merge: every field present in `update` replaces the current one.
    pub fn apply(&mut self, update: UserUpdate) {
        let UserUpdate {
            name,
            email,
            channel_name,
            subscriber_count,
            profile_picture,
            connected_accounts,
        } = update;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(channel_name) = channel_name {
            self.channel_name = channel_name;
        }
        if let Some(subscriber_count) = subscriber_count {
            self.subscriber_count = subscriber_count;
        }
        if let Some(profile_picture) = profile_picture {
            self.profile_picture = profile_picture;
        }
        if let Some(connected_accounts) = connected_accounts {
            self.connected_accounts = connected_accounts;
        }
    }

    /// Up to two uppercase initials for avatar placeholders.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Partial update for [`User::apply`]. `id` is immutable.
///
/// `profile_picture` is doubly optional so callers can clear the picture
/// (`Some(None)`) as well as leave it untouched (`None`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscriber_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connected_accounts: Option<ConnectedAccounts>,
}

impl UserUpdate {
    pub fn channel_name(channel_name: impl Into<String>) -> Self {
        Self {
            channel_name: Some(channel_name.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn creator() -> User {
        User {
            id: "user-1".to_string(),
            name: "Alex Rivera".to_string(),
            email: "alex@example.com".to_string(),
            channel_name: "Alex Creates".to_string(),
            subscriber_count: 125_000,
            profile_picture: Some("/avatars/alex.png".to_string()),
            connected_accounts: ConnectedAccounts {
                youtube: true,
                instagram: true,
                tiktok: false,
            },
        }
    }

    #[test]
    fn test_apply_only_touches_present_fields() {
        let mut user = creator();
        let before = user.clone();

        user.apply(UserUpdate::channel_name("X"));

        assert_eq!(user.channel_name, "X");
        assert_eq!(
            User {
                channel_name: before.channel_name.clone(),
                ..user.clone()
            },
            before
        );
    }

    #[test]
    fn test_apply_can_clear_profile_picture() {
        let mut user = creator();
        user.apply(UserUpdate {
            profile_picture: Some(None),
            ..Default::default()
        });
        assert_eq!(user.profile_picture, None);
    }

    #[test]
    fn test_camel_case_field_names() {
        let json = serde_json::to_value(creator()).unwrap();
        assert_eq!(json["channelName"], "Alex Creates");
        assert_eq!(json["subscriberCount"], 125_000);
        assert_eq!(json["connectedAccounts"]["youtube"], true);
    }

    #[test]
    fn test_invalid_email_fails_validation() {
        let user = User {
            email: "not-an-email".to_string(),
            ..creator()
        };
        assert!(matches!(user.validate_fields(), Err(SharedError::Validation(_))));
    }

    #[test]
    fn test_initials() {
        assert_eq!(creator().initials(), "AR");
    }

    #[test]
    fn test_empty_update() {
        assert!(UserUpdate::default().is_empty());
        assert!(!UserUpdate::channel_name("X").is_empty());
    }
}
