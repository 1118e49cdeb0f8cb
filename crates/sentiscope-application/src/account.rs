//! Account use cases: login, register, logout.
//!
//! Orchestrates the auth gateway and the session store. Remote failures
//! arrive already classified as [`WorkflowError`]; callers can downcast the
//! returned `anyhow::Error` when they need the typed variant.

use std::sync::Arc;

use anyhow::Result;
use sentiscope_core::WorkflowError;
use sentiscope_core::auth::{AuthGateway, Credentials, RegisterForm};
use sentiscope_core::session::Session;

use crate::session_store::SessionStore;

/// Surfaced when a registration form's passwords differ.
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

/// Login/register/logout orchestration over the auth gateway.
pub struct AccountService {
    auth_gateway: Arc<dyn AuthGateway>,
    session_store: Arc<SessionStore>,
}

impl AccountService {
    pub fn new(auth_gateway: Arc<dyn AuthGateway>, session_store: Arc<SessionStore>) -> Self {
        Self {
            auth_gateway,
            session_store,
        }
    }

    /// Exchanges credentials for a session and commits it to the store.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session> {
        let outcome = self
            .auth_gateway
            .login(&credentials.username, &credentials.password)
            .await?;
        let session = Session::authenticated(outcome.username, outcome.token);
        self.session_store.commit(session.clone()).await?;
        tracing::info!("[AccountService] '{}' logged in", session.username);
        Ok(session)
    }

    /// Creates an account. Does not establish a session.
    ///
    /// The password/confirmation equality check happens here, before any
    /// network call.
    pub async fn register(&self, form: &RegisterForm) -> Result<()> {
        if form.password != form.confirm_password {
            return Err(WorkflowError::client_validation(PASSWORDS_DO_NOT_MATCH).into());
        }
        self.auth_gateway
            .register(&form.username, &form.password)
            .await?;
        tracing::info!("[AccountService] '{}' registered", form.username);
        Ok(())
    }

    /// Logs out: invalidates the token server-side on a best-effort basis,
    /// then clears local state unconditionally. A remote failure is logged
    /// and never surfaces to the caller.
    pub async fn logout(&self) -> Result<()> {
        if let Some(token) = self.session_store.token() {
            if let Err(err) = self.auth_gateway.logout(&token).await {
                tracing::warn!("[AccountService] remote logout failed: {err}");
            }
        }
        self.session_store.clear().await
    }
}
