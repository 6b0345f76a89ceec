use crate::dto::auth::AuthResponse;
use crate::error::Result;
use crate::models::user::{User, UserUpdate};
use crate::services::auth::AuthService;
use log::info;
use std::rc::Rc;

/// The signed-in creator, hydrated from client storage at start-up.
///
/// Owns no storage itself: every transition goes through [`AuthService`],
/// which persists the change before the in-memory user is replaced.
pub struct Session {
    auth: Rc<AuthService>,
    user: Option<User>,
}

impl Session {
    /// Reads the persisted user, if any.
    pub fn hydrate(auth: Rc<AuthService>) -> Result<Self> {
        let user = auth.verify_token()?;
        if let Some(user) = &user {
            info!("Restored session for {}", user.email);
        }
        Ok(Self { auth, user })
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<&User> {
        let AuthResponse { user, .. } = self.auth.login(email, password).await?;
        Ok(&*self.user.insert(user))
    }

    pub async fn signup(&mut self, name: &str, email: &str, password: &str) -> Result<&User> {
        let AuthResponse { user, .. } = self.auth.signup(name, email, password).await?;
        Ok(&*self.user.insert(user))
    }

    /// Clears storage and forgets the user.
    pub async fn logout(&mut self) -> Result<()> {
        self.auth.logout().await?;
        self.user = None;
        Ok(())
    }

    pub fn update_user(&mut self, update: UserUpdate) -> Result<&User> {
        let user = self.auth.update_user(update)?;
        Ok(&*self.user.insert(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceConfig;
    use crate::models::client_storage::MemoryStorage;
    use crate::services::latency::NoLatency;
    use pretty_assertions::assert_eq;

    fn auth(storage: Rc<MemoryStorage>) -> Rc<AuthService> {
        Rc::new(
            AuthService::embedded(storage, Rc::new(NoLatency), ServiceConfig::instant()).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_session_survives_reload() {
        let storage = Rc::new(MemoryStorage::new());

        let mut session = Session::hydrate(auth(storage.clone())).unwrap();
        assert!(!session.is_authenticated());
        session.login("creator@example.com", "pw").await.unwrap();
        session.update_user(UserUpdate::channel_name("X")).unwrap();

        let reloaded = Session::hydrate(auth(storage.clone())).unwrap();
        assert_eq!(reloaded.user(), session.user());
        assert_eq!(reloaded.user().unwrap().channel_name, "X");
    }

    #[tokio::test]
    async fn test_logout_tears_down() {
        let storage = Rc::new(MemoryStorage::new());
        let mut session = Session::hydrate(auth(storage.clone())).unwrap();
        session.signup("Sam", "sam@example.com", "Sup3r$ecret").await.unwrap();

        session.logout().await.unwrap();
        assert!(!session.is_authenticated());
        assert!(!Session::hydrate(auth(storage)).unwrap().is_authenticated());
    }
}
