//! Error types for the Sentiscope client.
//!
//! Every remote call site funnels its raw outcome through [`classify`] so
//! that exactly one typed [`WorkflowError`] reaches the workflow state, and
//! no raw transport error crosses a component boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for everything the presentation layer can render.
///
/// This provides typed, structured error variants so that callers can make
/// policy decisions (e.g. an `Auth` failure always forces a session clear)
/// without inspecting transport details.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkflowError {
    /// The server could not be reached (DNS, connection, timeout).
    /// Transient; the user may retry manually.
    #[error("Network error: could not reach the server")]
    Network,

    /// The server rejected the credentials or the bearer token.
    /// Always forces a local session clear.
    #[error("Authentication failed")]
    Auth,

    /// The server rejected the request as invalid (bad input).
    /// The session is untouched; the user must correct the input.
    #[error("{message}")]
    Validation { message: String },

    /// Unexpected server-side failure. The session is untouched.
    #[error("Server error: {message}")]
    Server { message: String },

    /// Rejected locally before any network call (empty URL, password
    /// mismatch, ...).
    #[error("{message}")]
    ClientValidation { message: String },
}

impl WorkflowError {
    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates a Server error
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    /// Creates a ClientValidation error
    pub fn client_validation(message: impl Into<String>) -> Self {
        Self::ClientValidation {
            message: message.into(),
        }
    }

    /// Check if this is an authentication failure
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth)
    }

    /// Check if this is a transport-level failure
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network)
    }
}

/// Raw outcome of a failed remote call, before classification.
///
/// Gateways build this from their transport library and hand it to
/// [`classify`]; the classifier itself never touches the transport.
#[derive(Debug, Clone, PartialEq)]
pub enum CallFailure {
    /// The request never reached the server.
    Transport(String),
    /// The server answered with a non-success status. `message` carries the
    /// server-supplied error text when the body had one.
    Status { code: u16, message: Option<String> },
}

/// Fallback text when a 400-class response carries no server message.
const GENERIC_INVALID_REQUEST: &str = "invalid request";

/// Maps a raw call outcome to a [`WorkflowError`].
///
/// Policy, checked in order:
/// 1. transport failure -> `Network`
/// 2. 401/403 -> `Auth`
/// 3. 400 -> `Validation` (server message preferred)
/// 4. any other non-success status -> `Server` (same message preference)
///
/// Pure and side-effect-free; reused identically by login, register,
/// status-check, logout and analyze call sites.
pub fn classify(failure: &CallFailure) -> WorkflowError {
    match failure {
        CallFailure::Transport(_) => WorkflowError::Network,
        CallFailure::Status { code, message } => match code {
            401 | 403 => WorkflowError::Auth,
            400 => WorkflowError::validation(
                message
                    .clone()
                    .unwrap_or_else(|| GENERIC_INVALID_REQUEST.to_string()),
            ),
            _ => WorkflowError::server(
                message
                    .clone()
                    .unwrap_or_else(|| format!("request failed with status {code}")),
            ),
        },
    }
}
