//! Session domain models.
//!
//! [`Session`] is the in-memory authentication state; [`StoredSession`] is
//! the durable record a [`crate::repository::SessionRepository`] persists
//! across process restarts.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// The authenticated identity held by the client for the duration of a
/// login.
///
/// Invariant: `authenticated == true` iff both `username` and `token` are
/// non-empty and were last validated (at login or status-check) without
/// failure. The constructors enforce the non-empty half of this; the
/// session store enforces the validation half.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// The logged-in user's name. Empty when unauthenticated.
    pub username: String,
    /// Opaque bearer token issued at login. Empty when unauthenticated.
    pub token: String,
    /// Whether the session is currently considered valid.
    pub authenticated: bool,
}

impl Session {
    /// Creates an authenticated session.
    ///
    /// Fail-closed: an empty username or token can never produce an
    /// authenticated session.
    pub fn authenticated(username: impl Into<String>, token: impl Into<String>) -> Self {
        let username = username.into();
        let token = token.into();
        if username.is_empty() || token.is_empty() {
            return Self::unauthenticated();
        }
        Self {
            username,
            token,
            authenticated: true,
        }
    }

    /// Creates an empty, unauthenticated session.
    pub fn unauthenticated() -> Self {
        Self {
            username: String::new(),
            token: String::new(),
            authenticated: false,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::unauthenticated()
    }
}

/// The durable session record: the two persisted fields plus a write
/// timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub username: String,
    pub token: String,
    /// RFC3339 timestamp of the last write.
    pub saved_at: String,
}

impl StoredSession {
    /// Creates a record stamped with the current time.
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
            saved_at: Utc::now().to_rfc3339(),
        }
    }
}
