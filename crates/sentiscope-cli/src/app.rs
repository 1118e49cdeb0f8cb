//! Component wiring for the CLI.

use std::sync::Arc;

use anyhow::Result;
use sentiscope_application::{AccountService, AnalysisWorkflow, SessionStore};
use sentiscope_gateway::{DEFAULT_API_URL, HttpGateway};
use sentiscope_infrastructure::{ClientConfig, JsonSessionRepository, SentiscopePaths};

/// The wired-up use cases a command runs against.
pub struct App {
    pub session_store: Arc<SessionStore>,
    pub account: AccountService,
    pub workflow: AnalysisWorkflow,
}

/// Builds the component graph: file-backed session repository, HTTP
/// gateway, session store and use cases on top.
pub fn bootstrap(api_url_flag: Option<String>) -> Result<App> {
    let paths = SentiscopePaths::default();
    let api_url = resolve_api_url(api_url_flag, &paths)?;
    tracing::debug!("[Bootstrap] using server at {}", api_url);

    let gateway = Arc::new(HttpGateway::new(api_url));
    let repository = Arc::new(JsonSessionRepository::default_location()?);
    let session_store = Arc::new(SessionStore::new(repository, gateway.clone()));
    let account = AccountService::new(gateway.clone(), session_store.clone());
    let workflow = AnalysisWorkflow::new(gateway, session_store.clone());

    Ok(App {
        session_store,
        account,
        workflow,
    })
}

/// Resolution priority: `--api-url` flag, then `SENTISCOPE_API_URL`, then
/// `config.toml`, then the built-in default.
fn resolve_api_url(flag: Option<String>, paths: &SentiscopePaths) -> Result<String> {
    if let Some(url) = flag {
        return Ok(url);
    }
    if let Ok(url) = std::env::var("SENTISCOPE_API_URL")
        && !url.is_empty()
    {
        return Ok(url);
    }
    let config = ClientConfig::load(paths)?;
    Ok(config.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()))
}
