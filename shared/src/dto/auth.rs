use crate::models::user::User;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request for creator login
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Creator's email address
    #[validate(regex(path = "crate::validation::EMAIL_REGEX", message = "Invalid email format"))]
    pub email: String,

    /// Creator's password
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Request for creator registration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Display name; the channel name is derived from it
    #[validate(length(min = 2, max = 50))]
    pub name: String,

    #[validate(regex(path = "crate::validation::EMAIL_REGEX", message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[validate(regex(path = "crate::validation::EMAIL_REGEX", message = "Invalid email format"))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(length(min = 1, message = "Reset token is required"))]
    pub token: String,

    #[validate(length(min = 8))]
    pub password: String,
}

/// Response for successful login or signup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub user: User,
    /// Session token persisted alongside the user
    pub token: String,
}
