//! Session store: single source of truth for authentication state.
//!
//! Bridges the in-memory [`Session`] mirror and the durable
//! [`SessionRepository`]. All session mutation goes through this store;
//! other components only read snapshots.

use std::sync::{Arc, RwLock};

use anyhow::Result;
use sentiscope_core::auth::AuthGateway;
use sentiscope_core::repository::SessionRepository;
use sentiscope_core::session::{Session, StoredSession};

/// Owns the process-wide session state.
pub struct SessionStore {
    /// Durable storage port for the persisted {username, token} record.
    repository: Arc<dyn SessionRepository>,
    /// Used only for the status check during restoration.
    auth_gateway: Arc<dyn AuthGateway>,
    /// In-memory mirror of the persisted state.
    session: RwLock<Session>,
}

impl SessionStore {
    /// Creates a store starting in the unauthenticated state. Call
    /// [`SessionStore::restore`] to attempt silent restoration.
    pub fn new(repository: Arc<dyn SessionRepository>, auth_gateway: Arc<dyn AuthGateway>) -> Self {
        Self {
            repository,
            auth_gateway,
            session: RwLock::new(Session::unauthenticated()),
        }
    }

    /// Attempts to restore a previously persisted session.
    ///
    /// If nothing is persisted, returns unauthenticated without a network
    /// call. If a record exists, its token is validated against the server;
    /// only a truthful positive answer restores the session. Any other
    /// outcome (invalid token, transport failure, unreadable store) clears
    /// the persisted record and returns unauthenticated — restoration is
    /// fail-closed.
    pub async fn restore(&self) -> Session {
        let stored = match self.repository.load().await {
            Ok(Some(stored)) => stored,
            Ok(None) => {
                self.set_session(Session::unauthenticated());
                return self.current();
            }
            Err(err) => {
                tracing::warn!("[SessionStore] failed to read persisted session: {err:#}");
                self.clear_quietly().await;
                return self.current();
            }
        };

        match self.auth_gateway.check_status(&stored.token).await {
            Ok(true) => {
                let session = Session::authenticated(stored.username, stored.token);
                tracing::info!("[SessionStore] session restored for '{}'", session.username);
                self.set_session(session);
            }
            Ok(false) => {
                tracing::info!("[SessionStore] persisted token is no longer valid, clearing");
                self.clear_quietly().await;
            }
            Err(err) => {
                tracing::info!("[SessionStore] status check failed ({err}), clearing");
                self.clear_quietly().await;
            }
        }
        self.current()
    }

    /// Persists `session` and updates the in-memory mirror. The mirror is
    /// only updated once the durable write succeeded.
    pub async fn commit(&self, session: Session) -> Result<()> {
        let stored = StoredSession::new(session.username.as_str(), session.token.as_str());
        self.repository.save(&stored).await?;
        self.set_session(session);
        Ok(())
    }

    /// Resets to the unauthenticated state and removes the persisted
    /// record. Idempotent. The in-memory reset happens even when the
    /// durable remove fails.
    pub async fn clear(&self) -> Result<()> {
        self.set_session(Session::unauthenticated());
        self.repository.clear().await
    }

    /// Returns a snapshot of the current session.
    pub fn current(&self) -> Session {
        self.session.read().unwrap().clone()
    }

    /// Returns the bearer token of the current session, if authenticated.
    pub fn token(&self) -> Option<String> {
        let session = self.session.read().unwrap();
        session.authenticated.then(|| session.token.clone())
    }

    async fn clear_quietly(&self) {
        if let Err(err) = self.clear().await {
            tracing::warn!("[SessionStore] failed to clear persisted session: {err:#}");
        }
    }

    fn set_session(&self, session: Session) {
        *self.session.write().unwrap() = session;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockAuthGateway, MockSessionRepository};
    use sentiscope_core::WorkflowError;

    fn store_with(
        repository: Arc<MockSessionRepository>,
        auth_gateway: Arc<MockAuthGateway>,
    ) -> SessionStore {
        SessionStore::new(repository, auth_gateway)
    }

    #[tokio::test]
    async fn test_restore_without_persisted_record_skips_network() {
        let repository = Arc::new(MockSessionRepository::empty());
        let auth_gateway = Arc::new(MockAuthGateway::new());
        let store = store_with(repository, auth_gateway.clone());

        let session = store.restore().await;

        assert!(!session.authenticated);
        assert_eq!(auth_gateway.check_status_calls(), 0);
    }

    #[tokio::test]
    async fn test_restore_with_valid_token() {
        let repository = Arc::new(MockSessionRepository::with_session("alice", "T1"));
        let auth_gateway = Arc::new(MockAuthGateway::new().with_status(Ok(true)));
        let store = store_with(repository.clone(), auth_gateway.clone());

        let session = store.restore().await;

        assert!(session.authenticated);
        assert_eq!(session.username, "alice");
        assert_eq!(session.token, "T1");
        assert_eq!(auth_gateway.check_status_calls(), 1);
        assert!(repository.stored().is_some());
    }

    #[tokio::test]
    async fn test_restore_with_rejected_token_clears_storage() {
        let repository = Arc::new(MockSessionRepository::with_session("alice", "stale"));
        let auth_gateway = Arc::new(MockAuthGateway::new().with_status(Ok(false)));
        let store = store_with(repository.clone(), auth_gateway);

        let session = store.restore().await;

        assert!(!session.authenticated);
        assert!(repository.stored().is_none());
    }

    #[tokio::test]
    async fn test_restore_fails_closed_on_transport_failure() {
        let repository = Arc::new(MockSessionRepository::with_session("alice", "T1"));
        let auth_gateway =
            Arc::new(MockAuthGateway::new().with_status(Err(WorkflowError::Network)));
        let store = store_with(repository.clone(), auth_gateway);

        let session = store.restore().await;

        assert!(!session.authenticated);
        assert!(repository.stored().is_none());
    }

    #[tokio::test]
    async fn test_commit_persists_both_fields() {
        let repository = Arc::new(MockSessionRepository::empty());
        let store = store_with(repository.clone(), Arc::new(MockAuthGateway::new()));

        store
            .commit(Session::authenticated("alice", "T1"))
            .await
            .unwrap();

        let stored = repository.stored().unwrap();
        assert_eq!(stored.username, "alice");
        assert_eq!(stored.token, "T1");
        assert!(store.current().authenticated);
        assert_eq!(store.token().as_deref(), Some("T1"));
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let repository = Arc::new(MockSessionRepository::with_session("alice", "T1"));
        let store = store_with(repository.clone(), Arc::new(MockAuthGateway::new()));

        store.clear().await.unwrap();
        let once = store.current();

        store.clear().await.unwrap();
        let twice = store.current();

        assert_eq!(once, twice);
        assert!(!twice.authenticated);
        assert!(repository.stored().is_none());
    }
}
