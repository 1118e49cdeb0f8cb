//! HTTP implementation of the auth and analysis gateway ports.
//!
//! One [`HttpGateway`] wraps the five remote endpoints with JSON bodies and
//! a bearer token on every authorized call. Every transport or status
//! failure is run through [`classify`] before it leaves this module;
//! tokens and passwords are never logged.

use async_trait::async_trait;
use reqwest::Client;
use sentiscope_core::analysis::{AnalysisGateway, AnalysisResult};
use sentiscope_core::auth::{AuthGateway, LoginOutcome};
use sentiscope_core::error::{CallFailure, WorkflowError, classify};
use serde::{Deserialize, Serialize};

const LOGIN_PATH: &str = "/api/login/";
const REGISTER_PATH: &str = "/api/register/";
const LOGOUT_PATH: &str = "/api/logout/";
const AUTH_STATUS_PATH: &str = "/api/auth-status/";
const ANALYZE_PATH: &str = "/api/fetch_comments/";

/// Gateway over the remote sentiment-analysis service.
#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct CredentialsBody<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct AnalyzeBody<'a> {
    url: &'a str,
}

#[derive(Deserialize)]
struct AuthStatusBody {
    authenticated: bool,
}

/// Failure bodies look like `{"error": "<text>"}`.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl HttpGateway {
    /// Creates a gateway against the given server base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Builds a [`CallFailure`] from a non-success response, preferring the
    /// server-supplied error text when the body carries one.
    async fn failure_of(response: reqwest::Response) -> CallFailure {
        let code = response.status().as_u16();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error);
        CallFailure::Status { code, message }
    }

    fn transport_failure(err: &reqwest::Error) -> WorkflowError {
        classify(&CallFailure::Transport(err.to_string()))
    }
}

#[async_trait]
impl AuthGateway for HttpGateway {
    async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, WorkflowError> {
        tracing::debug!("[HttpGateway] POST {}", LOGIN_PATH);
        let response = self
            .client
            .post(self.endpoint(LOGIN_PATH))
            .json(&CredentialsBody { username, password })
            .send()
            .await
            .map_err(|err| Self::transport_failure(&err))?;

        if !response.status().is_success() {
            let failure = Self::failure_of(response).await;
            // The server signals invalid credentials with 400 or 401 on
            // this route; both are auth failures here.
            return Err(match classify(&failure) {
                WorkflowError::Validation { .. } => WorkflowError::Auth,
                other => other,
            });
        }

        response
            .json()
            .await
            .map_err(|err| WorkflowError::server(format!("Failed to parse login response: {err}")))
    }

    async fn register(&self, username: &str, password: &str) -> Result<(), WorkflowError> {
        tracing::debug!("[HttpGateway] POST {}", REGISTER_PATH);
        let response = self
            .client
            .post(self.endpoint(REGISTER_PATH))
            .json(&CredentialsBody { username, password })
            .send()
            .await
            .map_err(|err| Self::transport_failure(&err))?;

        if !response.status().is_success() {
            return Err(classify(&Self::failure_of(response).await));
        }
        Ok(())
    }

    async fn check_status(&self, token: &str) -> Result<bool, WorkflowError> {
        tracing::debug!("[HttpGateway] GET {}", AUTH_STATUS_PATH);
        let response = self
            .client
            .get(self.endpoint(AUTH_STATUS_PATH))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|err| Self::transport_failure(&err))?;

        if !response.status().is_success() {
            return Err(classify(&Self::failure_of(response).await));
        }

        let parsed: AuthStatusBody = response.json().await.map_err(|err| {
            WorkflowError::server(format!("Failed to parse auth status response: {err}"))
        })?;
        Ok(parsed.authenticated)
    }

    async fn logout(&self, token: &str) -> Result<(), WorkflowError> {
        tracing::debug!("[HttpGateway] POST {}", LOGOUT_PATH);
        let response = self
            .client
            .post(self.endpoint(LOGOUT_PATH))
            .bearer_auth(token)
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(|err| Self::transport_failure(&err))?;

        if !response.status().is_success() {
            return Err(classify(&Self::failure_of(response).await));
        }
        Ok(())
    }
}

#[async_trait]
impl AnalysisGateway for HttpGateway {
    async fn analyze(&self, token: &str, url: &str) -> Result<AnalysisResult, WorkflowError> {
        tracing::debug!("[HttpGateway] POST {}", ANALYZE_PATH);
        let response = self
            .client
            .post(self.endpoint(ANALYZE_PATH))
            .bearer_auth(token)
            .json(&AnalyzeBody { url })
            .send()
            .await
            .map_err(|err| Self::transport_failure(&err))?;

        if !response.status().is_success() {
            return Err(classify(&Self::failure_of(response).await));
        }

        response.json().await.map_err(|err| {
            WorkflowError::server(format!("Failed to parse analysis response: {err}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let gateway = HttpGateway::new("http://127.0.0.1:8000/");
        assert_eq!(
            gateway.endpoint(LOGIN_PATH),
            "http://127.0.0.1:8000/api/login/"
        );

        let gateway = HttpGateway::new("http://127.0.0.1:8000");
        assert_eq!(
            gateway.endpoint(ANALYZE_PATH),
            "http://127.0.0.1:8000/api/fetch_comments/"
        );
    }

    #[test]
    fn test_error_body_shape() {
        let body: ErrorBody = serde_json::from_str(r#"{"error": "Invalid credentials"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("Invalid credentials"));

        let body: ErrorBody = serde_json::from_str(r#"{"message": "ok"}"#).unwrap();
        assert!(body.error.is_none());
    }
}
