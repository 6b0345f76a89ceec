//! Field-level checks for the auth forms.
//!
//! Every validator returns `None` when the value is acceptable and a message
//! suitable for inline display otherwise.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

lazy_static! {
    /// Shared by the form validators and the request/entity derives.
    pub(crate) static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MIN_NAME_LEN: usize = 2;
pub const MAX_NAME_LEN: usize = 50;

pub fn validate_email(email: &str) -> Option<String> {
    if email.is_empty() {
        return Some("Email is required".to_string());
    }
    if !EMAIL_REGEX.is_match(email) {
        return Some("Please enter a valid email address".to_string());
    }
    None
}

pub fn validate_password(password: &str) -> Option<String> {
    if password.is_empty() {
        return Some("Password is required".to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Some(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }
    if !password.chars().any(char::is_uppercase) {
        return Some("Password must contain at least one uppercase letter".to_string());
    }
    if !password.chars().any(char::is_lowercase) {
        return Some("Password must contain at least one lowercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some("Password must contain at least one number".to_string());
    }
    None
}

pub fn validate_name(name: &str) -> Option<String> {
    let name = name.trim();
    let len = name.chars().count();
    if len == 0 {
        Some("Name is required".to_string())
    } else if len < MIN_NAME_LEN {
        Some(format!("Name must be at least {} characters", MIN_NAME_LEN))
    } else if len > MAX_NAME_LEN {
        Some(format!("Name must be less than {} characters", MAX_NAME_LEN))
    } else {
        None
    }
}

pub fn validate_confirm_password(password: &str, confirm: &str) -> Option<String> {
    if confirm.is_empty() {
        Some("Please confirm your password".to_string())
    } else if password != confirm {
        Some("Passwords do not match".to_string())
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "weak",
            PasswordStrength::Medium => "medium",
            PasswordStrength::Strong => "strong",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The individual requirements shown under the password field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordChecklist {
    pub min_length: bool,
    pub uppercase: bool,
    pub lowercase_or_number: bool,
    pub special: bool,
}

impl PasswordChecklist {
    pub fn evaluate(password: &str) -> Self {
        Self {
            min_length: password.chars().count() >= MIN_PASSWORD_LEN,
            uppercase: password.chars().any(char::is_uppercase),
            lowercase_or_number: password
                .chars()
                .any(|c| c.is_lowercase() || c.is_ascii_digit()),
            special: password
                .chars()
                .any(|c| !c.is_alphanumeric() && !c.is_whitespace()),
        }
    }

    pub fn score(&self) -> u8 {
        [
            self.min_length,
            self.uppercase,
            self.lowercase_or_number,
            self.special,
        ]
        .iter()
        .filter(|met| **met)
        .count() as u8
    }

    pub fn strength(&self) -> PasswordStrength {
        match self.score() {
            0 | 1 => PasswordStrength::Weak,
            2 | 3 => PasswordStrength::Medium,
            _ => PasswordStrength::Strong,
        }
    }
}

pub fn password_strength(password: &str) -> PasswordStrength {
    PasswordChecklist::evaluate(password).strength()
}

/// Per-field messages collected by a form. Submission is blocked while any
/// entry is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` for `field` when the check failed.
    pub fn check(&mut self, field: &'static str, message: Option<String>) -> &mut Self {
        if let Some(message) = message {
            self.0.insert(field, message);
        }
        self
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Login only requires a password to be present; the policy applies at signup.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check("email", validate_email(&self.email)).check(
            "password",
            self.password
                .is_empty()
                .then(|| "Password is required".to_string()),
        );
        errors
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors
            .check("name", validate_name(&self.name))
            .check("email", validate_email(&self.email))
            .check("password", validate_password(&self.password))
            .check(
                "confirmPassword",
                validate_confirm_password(&self.password, &self.confirm_password),
            );
        errors
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check("email", validate_email(&self.email));
        errors
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetPasswordForm {
    pub password: String,
    pub confirm_password: String,
}

impl ResetPasswordForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors
            .check("password", validate_password(&self.password))
            .check(
                "confirmPassword",
                validate_confirm_password(&self.password, &self.confirm_password),
            );
        errors
    }
}
