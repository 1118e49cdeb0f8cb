//! Auth gateway port.
//!
//! Typed contract over the four remote auth operations. Implementations
//! perform no retries and no caching; every failure is already classified
//! into a [`WorkflowError`] when it crosses this boundary.

use crate::error::WorkflowError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// What the server returns on a successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginOutcome {
    pub username: String,
    pub user_id: i64,
    pub token: String,
}

/// Transient login credentials. Never persisted, never logged.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Transient registration form. The password/confirmation equality check is
/// a client-side precondition enforced by the caller, not by the server.
#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

/// Typed contract over the remote auth endpoints.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchanges credentials for a bearer token.
    ///
    /// Invalid credentials surface as [`WorkflowError::Auth`] (the server
    /// signals them with 400/401 on this route), transport failures as
    /// [`WorkflowError::Network`], anything else as
    /// [`WorkflowError::Server`].
    async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, WorkflowError>;

    /// Creates an account. Pure create; does not establish a session.
    ///
    /// A 400-equivalent (e.g. duplicate username) surfaces as
    /// [`WorkflowError::Validation`] with the server's message.
    async fn register(&self, username: &str, password: &str) -> Result<(), WorkflowError>;

    /// Returns whether `token` is currently valid. Callers treat any error
    /// as "invalid".
    async fn check_status(&self, token: &str) -> Result<bool, WorkflowError>;

    /// Invalidates `token` server-side. Best effort: callers clear local
    /// state regardless of this call's outcome.
    async fn logout(&self, token: &str) -> Result<(), WorkflowError>;
}
