use crate::config::{LatencyProfile, ServiceConfig};
use crate::dto::auth::{
    AuthResponse, ForgotPasswordRequest, LoginRequest, ResetPasswordRequest, SignupRequest,
};
use crate::dto::common::ActionResponse;
use crate::error::{Result, SharedError};
use crate::mock_data::MockDataStore;
use crate::models::client_storage::{self, ClientStorage, StorageKey};
use crate::models::user::{ConnectedAccounts, User, UserUpdate};
use crate::services::latency::Latency;
use log::{debug, info, warn};
use std::rc::Rc;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

pub const LOGIN_PATH: &str = "/auth/login";
pub const SIGNUP_PATH: &str = "/auth/signup";
pub const LOGOUT_PATH: &str = "/auth/logout";
pub const FORGOT_PASSWORD_PATH: &str = "/auth/forgot-password";
pub const RESET_PASSWORD_PATH: &str = "/auth/reset-password";

/// Mock authentication.
///
/// There is no credential check: well-formed requests always succeed and the
/// resulting user is persisted to client storage.
pub struct AuthService {
    store: Arc<MockDataStore>,
    storage: Rc<dyn ClientStorage>,
    latency: Rc<dyn Latency>,
    config: ServiceConfig,
}

impl AuthService {
    pub fn new(
        store: Arc<MockDataStore>,
        storage: Rc<dyn ClientStorage>,
        latency: Rc<dyn Latency>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            store,
            storage,
            latency,
            config,
        }
    }

    pub fn embedded(
        storage: Rc<dyn ClientStorage>,
        latency: Rc<dyn Latency>,
        config: ServiceConfig,
    ) -> Result<Self> {
        Ok(Self::new(MockDataStore::embedded()?, storage, latency, config))
    }

    async fn delay(&self, ms: u64) {
        self.latency.sleep(LatencyProfile::duration(ms)).await;
    }

    /// Signs in as the demo creator, echoing the given email.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        request.validate()?;

        debug!("Attempting login for {} ({})", request.email, self.config.api_url(LOGIN_PATH));
        self.delay(self.config.latency.login_ms).await;

        let user = User {
            email: request.email,
            ..self.store.user().clone()
        };
        let response = self.start_session(user)?;
        info!("Login successful for {}", response.user.email);
        Ok(response)
    }

    /// Creates a brand-new creator account with no subscribers.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<AuthResponse> {
        let request = SignupRequest {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        request.validate()?;

        debug!("Registering {} ({})", request.email, self.config.api_url(SIGNUP_PATH));
        self.delay(self.config.latency.signup_ms).await;

        let user = User {
            id: Uuid::new_v4().to_string(),
            channel_name: format!("{}'s Channel", request.name),
            name: request.name,
            email: request.email,
            subscriber_count: 0,
            profile_picture: None,
            connected_accounts: ConnectedAccounts::default(),
        };
        let response = self.start_session(user)?;
        info!("Registered {}", response.user.email);
        Ok(response)
    }

    fn start_session(&self, user: User) -> Result<AuthResponse> {
        let token = format!("mock-token-{}", Uuid::new_v4());
        client_storage::save(self.storage.as_ref(), StorageKey::User, &user)?;
        client_storage::save(self.storage.as_ref(), StorageKey::Token, &token)?;
        Ok(AuthResponse { user, token })
    }

    /// Clears the persisted session.
    pub async fn logout(&self) -> Result<()> {
        debug!("Logging out ({})", self.config.api_url(LOGOUT_PATH));
        self.delay(self.config.latency.logout_ms).await;
        self.clear_session()
    }

    /// Removes the session keys without any delay.
    pub fn clear_session(&self) -> Result<()> {
        for key in StorageKey::session_keys() {
            self.storage.remove_item(key)?;
        }
        Ok(())
    }

    pub async fn forgot_password(&self, email: &str) -> Result<ActionResponse> {
        let request = ForgotPasswordRequest {
            email: email.trim().to_string(),
        };
        request.validate()?;

        debug!(
            "Requesting password reset for {} ({})",
            request.email,
            self.config.api_url(FORGOT_PASSWORD_PATH)
        );
        self.delay(self.config.latency.password_ms).await;
        Ok(ActionResponse::ok(format!(
            "Password reset link sent to {}",
            request.email
        )))
    }

    pub async fn reset_password(&self, token: &str, password: &str) -> Result<ActionResponse> {
        let request = ResetPasswordRequest {
            token: token.to_string(),
            password: password.to_string(),
        };
        request.validate()?;

        debug!("Resetting password ({})", self.config.api_url(RESET_PASSWORD_PATH));
        self.delay(self.config.latency.password_ms).await;
        Ok(ActionResponse::ok("Password has been reset successfully"))
    }

    /// Synchronous read of the persisted user. `None` when signed out.
    ///
    /// A corrupted record is treated as signed out and cleared.
    pub fn verify_token(&self) -> Result<Option<User>> {
        match client_storage::load::<User>(self.storage.as_ref(), StorageKey::User) {
            Ok(user) => Ok(user),
            Err(e) => {
                warn!("Discarding unreadable stored user: {}", e);
                self.clear_session()?;
                Ok(None)
            }
        }
    }

    pub fn token(&self) -> Result<Option<String>> {
        Ok(client_storage::load(self.storage.as_ref(), StorageKey::Token)?)
    }

    /// Shallow-merges `update` into the persisted user.
    pub fn update_user(&self, update: UserUpdate) -> Result<User> {
        let mut user = self
            .verify_token()?
            .ok_or_else(|| SharedError::Unauthorized("No user is signed in".to_string()))?;

        user.apply(update);
        user.validate_fields()?;
        client_storage::save(self.storage.as_ref(), StorageKey::User, &user)?;
        debug!("Updated user {}", user.id);
        Ok(user)
    }
}
