pub mod storage;

use crate::auth::login_user::LoginUser;
use crate::auth::logout_user::LogoutUser;
use crate::auth::refresh_token::RefreshToken;
use crate::auth::register_user::RegisterUser;
use crate::client::AuthClient;
use crate::error::ClientError;
use crate::models::token::AuthToken;
use crate::models::user_claims::UserClaims;
use crate::session::storage::{PersistedSession, TokenStorage};
use crate::stores::alert::{Alert, AlertChannel};
use crate::stores::store::LoadingGuard;
use chrono::{DateTime, Duration, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Sessions closer than this many hours to their expiry are refreshed
/// proactively.
const REFRESH_THRESHOLD_HOURS: i64 = 12;

/// The authenticated user's token, expiry, and derived identity. The
/// identity is present iff the token is present and well-formed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: String,
    pub expiry: Option<DateTime<Utc>>,
    pub identity: Option<UserClaims>,
}

impl Session {
    fn from_token(token: &AuthToken) -> Self {
        Session {
            token: token.token.clone(),
            expiry: Some(token.token_expiry),
            identity: UserClaims::from_token(&token.token),
        }
    }
}

/// `SessionManager` owns the authentication lifecycle: it drives the
/// auth gateway, persists the token across restarts, derives the user's
/// identity from it, and keeps the transport's bearer credential in sync.
/// It is the only writer of that credential.
///
/// Concurrent auth calls are not coordinated; the last settling call
/// wins.
pub struct SessionManager {
    gateway: Arc<dyn AuthClient + Send + Sync>,
    storage: Arc<dyn TokenStorage>,
    alerts: AlertChannel,
    session: RwLock<Session>,
    loading: AtomicBool,
}

impl SessionManager {
    pub fn new(
        gateway: Arc<dyn AuthClient + Send + Sync>,
        storage: Arc<dyn TokenStorage>,
        alerts: AlertChannel,
    ) -> Self {
        Self {
            gateway,
            storage,
            alerts,
            session: RwLock::new(Session::default()),
            loading: AtomicBool::new(false),
        }
    }

    /// Rehydrates a previously persisted session, if any, and re-attaches
    /// the bearer credential.
    pub async fn restore(&self) -> Result<(), ClientError> {
        let Some(persisted) = self.storage.load()? else {
            return Ok(());
        };
        let token = AuthToken {
            token: persisted.token,
            token_expiry: persisted.token_expiry,
        };
        self.install(&token).await;
        info!("Restored persisted session");
        Ok(())
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<Session, ClientError> {
        let _loading = LoadingGuard::hold(&self.loading);
        let command = LoginUser {
            username: username.to_string(),
            password: password.to_string(),
        };
        let result = match self.gateway.login_user(&command).await {
            Ok(token) => self.establish(&token).await,
            Err(err) => Err(err),
        };
        match result {
            Ok(session) => {
                info!("User {username} logged in");
                Ok(session)
            }
            Err(err) => {
                error!("Login failed for {username}: {err}");
                self.teardown().await;
                self.alerts.publish(Alert::from_error(&err));
                Err(err)
            }
        }
    }

    /// Exchanges the currently held token for a fresh one. Same contract
    /// as [`login`](Self::login), including full teardown on failure.
    pub async fn refresh(&self) -> Result<Session, ClientError> {
        let _loading = LoadingGuard::hold(&self.loading);
        let command = RefreshToken {
            token: self.session.read().await.token.clone(),
        };
        let result = match self.gateway.refresh_token(&command).await {
            Ok(token) => self.establish(&token).await,
            Err(err) => Err(err),
        };
        match result {
            Ok(session) => Ok(session),
            Err(err) => {
                error!("Session refresh failed: {err}");
                self.teardown().await;
                self.alerts.publish(Alert::from_error(&err));
                Err(err)
            }
        }
    }

    /// Invalidates the token server-side, best-effort: the client-side
    /// teardown runs regardless of the outcome.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let _loading = LoadingGuard::hold(&self.loading);
        let command = LogoutUser {
            token: self.session.read().await.token.clone(),
        };
        let result = self.gateway.logout_user(&command).await;
        if let Err(err) = &result {
            warn!("Server-side logout failed: {err}");
            self.alerts.publish(Alert::from_error(err));
        }
        self.teardown().await;
        info!("User logged out");
        result
    }

    /// Creates a new account. No session is established; the caller logs
    /// in afterwards.
    pub async fn register(&self, command: &RegisterUser) -> Result<(), ClientError> {
        let _loading = LoadingGuard::hold(&self.loading);
        match self.gateway.register_user(command).await {
            Ok(()) => {
                info!("Registered account {}", command.email);
                Ok(())
            }
            Err(err) => {
                error!("Registration failed for {}: {err}", command.email);
                self.alerts.publish(Alert::from_error(&err));
                Err(err)
            }
        }
    }

    pub fn loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    pub async fn session(&self) -> Session {
        self.session.read().await.clone()
    }

    pub async fn is_logged_in(&self) -> bool {
        let session = self.session.read().await;
        !session.token.is_empty() && session.expiry.is_some()
    }

    pub async fn token_expiry(&self) -> Option<DateTime<Utc>> {
        self.session.read().await.expiry
    }

    pub async fn identity(&self) -> Option<UserClaims> {
        self.session.read().await.identity.clone()
    }

    pub async fn user_id(&self) -> Option<Uuid> {
        self.session.read().await.identity.as_ref().map(|user| user.id)
    }

    /// The logged-in user's email address, or the empty string.
    pub async fn email(&self) -> String {
        self.session
            .read()
            .await
            .identity
            .as_ref()
            .map(|user| user.email.clone())
            .unwrap_or_default()
    }

    /// The logged-in user's display name, or the empty string.
    pub async fn display_name(&self) -> String {
        self.session
            .read()
            .await
            .identity
            .as_ref()
            .map(|user| user.name.clone())
            .unwrap_or_default()
    }

    /// Whether the session expires within the proactive-refresh
    /// threshold.
    pub async fn needs_refresh(&self) -> bool {
        self.needs_refresh_at(Utc::now()).await
    }

    pub async fn needs_refresh_at(&self, now: DateTime<Utc>) -> bool {
        match self.session.read().await.expiry {
            Some(expiry) => expiry - now < Duration::hours(REFRESH_THRESHOLD_HOURS),
            None => false,
        }
    }

    /// Proactively refreshes the session when it is close to expiry, the
    /// check a route guard runs before every protected transition.
    pub async fn ensure_fresh(&self) -> Result<(), ClientError> {
        if self.is_logged_in().await && self.needs_refresh().await {
            self.refresh().await?;
        }
        Ok(())
    }

    async fn establish(&self, token: &AuthToken) -> Result<Session, ClientError> {
        self.storage.store(&PersistedSession {
            token: token.token.clone(),
            token_expiry: token.token_expiry,
        })?;
        self.install(token).await;
        Ok(self.session.read().await.clone())
    }

    async fn install(&self, token: &AuthToken) {
        let session = Session::from_token(token);
        self.gateway
            .set_access_token(Some(token.token.clone()))
            .await;
        *self.session.write().await = session;
    }

    /// Tears down every piece of session state, durable and in-memory, so
    /// no half logged-in condition survives.
    async fn teardown(&self) {
        if let Err(err) = self.storage.clear() {
            warn!("Failed to clear the persisted session: {err}");
        }
        self.gateway.set_access_token(None).await;
        *self.session.write().await = Session::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::storage::MemoryTokenStorage;
    use async_trait::async_trait;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use serde_json::json;
    use std::sync::Mutex;

    fn token_for(id: Uuid, email: &str, name: &str) -> String {
        let payload = URL_SAFE_NO_PAD.encode(
            json!({"user": {"id": id, "email": email, "name": name}}).to_string(),
        );
        format!("header.{payload}.signature")
    }

    struct FakeAuthGateway {
        token: Option<AuthToken>,
        logout_fails: bool,
        attached: Mutex<Option<String>>,
    }

    impl FakeAuthGateway {
        fn succeeding(token: AuthToken) -> Self {
            Self {
                token: Some(token),
                logout_fails: false,
                attached: Mutex::new(None),
            }
        }

        fn failing() -> Self {
            Self {
                token: None,
                logout_fails: true,
                attached: Mutex::new(None),
            }
        }

        fn denied() -> ClientError {
            ClientError::HttpResponseError(401, "{\"error\": \"invalid credentials\"}".to_string())
        }

        fn attached(&self) -> Option<String> {
            self.attached.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AuthClient for FakeAuthGateway {
        async fn login_user(&self, _command: &LoginUser) -> Result<AuthToken, ClientError> {
            self.token.clone().ok_or_else(Self::denied)
        }

        async fn refresh_token(&self, _command: &RefreshToken) -> Result<AuthToken, ClientError> {
            self.token.clone().ok_or_else(Self::denied)
        }

        async fn logout_user(&self, _command: &LogoutUser) -> Result<(), ClientError> {
            if self.logout_fails {
                Err(Self::denied())
            } else {
                Ok(())
            }
        }

        async fn register_user(&self, _command: &RegisterUser) -> Result<(), ClientError> {
            self.token
                .as_ref()
                .map(|_| ())
                .ok_or_else(Self::denied)
        }

        async fn set_access_token(&self, token: Option<String>) {
            *self.attached.lock().unwrap() = token;
        }
    }

    fn manager(gateway: Arc<FakeAuthGateway>, storage: Arc<MemoryTokenStorage>) -> SessionManager {
        SessionManager::new(gateway, storage, AlertChannel::new())
    }

    #[tokio::test]
    async fn should_establish_a_session_on_login() {
        let id = Uuid::new_v4();
        let token = AuthToken {
            token: token_for(id, "jane@example.com", "Jane"),
            token_expiry: Utc::now() + Duration::hours(24),
        };
        let gateway = Arc::new(FakeAuthGateway::succeeding(token.clone()));
        let storage = Arc::new(MemoryTokenStorage::new());
        let manager = manager(gateway.clone(), storage.clone());

        let session = manager.login("jane@example.com", "secret").await.unwrap();

        assert!(manager.is_logged_in().await);
        assert_eq!(session.identity.unwrap().id, id);
        assert_eq!(manager.email().await, "jane@example.com");
        assert_eq!(manager.display_name().await, "Jane");
        assert_eq!(manager.user_id().await, Some(id));
        assert_eq!(gateway.attached(), Some(token.token.clone()));
        assert_eq!(storage.load().unwrap().unwrap().token, token.token);
        assert!(!manager.loading());
    }

    #[tokio::test]
    async fn should_tear_down_everything_on_login_failure() {
        let gateway = Arc::new(FakeAuthGateway::failing());
        let storage = Arc::new(MemoryTokenStorage::new());
        storage
            .store(&PersistedSession {
                token: "stale.token.value".to_string(),
                token_expiry: Utc::now() + Duration::hours(1),
            })
            .unwrap();
        let manager = manager(gateway.clone(), storage.clone());

        let result = manager.login("jane@example.com", "wrong").await;

        assert!(result.is_err());
        assert!(!manager.is_logged_in().await);
        assert_eq!(manager.identity().await, None);
        assert_eq!(storage.load().unwrap(), None);
        assert_eq!(gateway.attached(), None);
        assert!(!manager.loading());
    }

    #[tokio::test]
    async fn should_publish_the_backend_message_on_login_failure() {
        let gateway = Arc::new(FakeAuthGateway::failing());
        let storage = Arc::new(MemoryTokenStorage::new());
        let alerts = AlertChannel::new();
        let manager = SessionManager::new(gateway, storage, alerts.clone());

        let _ = manager.login("jane@example.com", "wrong").await;

        assert_eq!(alerts.last().unwrap().message, "invalid credentials");
    }

    #[tokio::test]
    async fn should_tear_down_even_when_server_side_logout_fails() {
        let id = Uuid::new_v4();
        let token = AuthToken {
            token: token_for(id, "jane@example.com", "Jane"),
            token_expiry: Utc::now() + Duration::hours(24),
        };
        let gateway = Arc::new(FakeAuthGateway {
            token: Some(token),
            logout_fails: true,
            attached: Mutex::new(None),
        });
        let storage = Arc::new(MemoryTokenStorage::new());
        let manager = manager(gateway.clone(), storage.clone());
        manager.login("jane@example.com", "secret").await.unwrap();

        let result = manager.logout().await;

        assert!(result.is_err());
        assert!(!manager.is_logged_in().await);
        assert_eq!(storage.load().unwrap(), None);
        assert_eq!(gateway.attached(), None);
    }

    #[tokio::test]
    async fn should_restore_a_persisted_session() {
        let id = Uuid::new_v4();
        let token = token_for(id, "jane@example.com", "Jane");
        let gateway = Arc::new(FakeAuthGateway::failing());
        let storage = Arc::new(MemoryTokenStorage::new());
        storage
            .store(&PersistedSession {
                token: token.clone(),
                token_expiry: Utc::now() + Duration::hours(24),
            })
            .unwrap();
        let manager = manager(gateway.clone(), storage.clone());

        manager.restore().await.unwrap();

        assert!(manager.is_logged_in().await);
        assert_eq!(manager.user_id().await, Some(id));
        assert_eq!(gateway.attached(), Some(token));
    }

    #[tokio::test]
    async fn should_stay_logged_out_when_nothing_is_persisted() {
        let gateway = Arc::new(FakeAuthGateway::failing());
        let storage = Arc::new(MemoryTokenStorage::new());
        let manager = manager(gateway.clone(), storage);

        manager.restore().await.unwrap();

        assert!(!manager.is_logged_in().await);
        assert_eq!(gateway.attached(), None);
    }

    #[tokio::test]
    async fn should_want_a_refresh_close_to_expiry() {
        let id = Uuid::new_v4();
        let token = AuthToken {
            token: token_for(id, "jane@example.com", "Jane"),
            token_expiry: Utc::now() + Duration::hours(24),
        };
        let gateway = Arc::new(FakeAuthGateway::succeeding(token.clone()));
        let storage = Arc::new(MemoryTokenStorage::new());
        let manager = manager(gateway, storage);
        manager.login("jane@example.com", "secret").await.unwrap();

        let expiry = manager.token_expiry().await.unwrap();
        assert!(!manager.needs_refresh_at(expiry - Duration::hours(13)).await);
        assert!(manager.needs_refresh_at(expiry - Duration::hours(11)).await);
    }

    #[tokio::test]
    async fn should_not_want_a_refresh_without_a_session() {
        let gateway = Arc::new(FakeAuthGateway::failing());
        let manager = manager(gateway, Arc::new(MemoryTokenStorage::new()));

        assert!(!manager.needs_refresh().await);
    }

    #[tokio::test]
    async fn should_not_establish_a_session_on_registration() {
        let id = Uuid::new_v4();
        let token = AuthToken {
            token: token_for(id, "jane@example.com", "Jane"),
            token_expiry: Utc::now() + Duration::hours(24),
        };
        let gateway = Arc::new(FakeAuthGateway::succeeding(token));
        let storage = Arc::new(MemoryTokenStorage::new());
        let manager = manager(gateway.clone(), storage.clone());

        let command = RegisterUser {
            email: "jane@example.com".to_string(),
            password: "secret".to_string(),
            display_name: "Jane".to_string(),
            birthday: Utc::now(),
            avatar: "".to_string(),
        };
        manager.register(&command).await.unwrap();

        assert!(!manager.is_logged_in().await);
        assert_eq!(storage.load().unwrap(), None);
        assert_eq!(gateway.attached(), None);
    }
}
