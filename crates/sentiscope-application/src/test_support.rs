//! In-memory fakes for the core ports, shared by the use-case tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use anyhow::Result;
use async_trait::async_trait;
use sentiscope_core::WorkflowError;
use sentiscope_core::analysis::{AnalysisGateway, AnalysisResult};
use sentiscope_core::auth::{AuthGateway, LoginOutcome};
use sentiscope_core::repository::SessionRepository;
use sentiscope_core::session::StoredSession;
use tokio::sync::Semaphore;

/// The analysis result used by the workflow scenarios.
pub(crate) fn sample_result() -> AnalysisResult {
    AnalysisResult {
        positive_percent: 70.0,
        negative_percent: 30.0,
        neutral_percent: 0.0,
        purchase_intent_percent: 45.0,
        total_comments: 120,
        platform: "twitter".to_string(),
    }
}

/// Durable-storage fake: a single record behind a mutex.
pub(crate) struct MockSessionRepository {
    stored: Mutex<Option<StoredSession>>,
}

impl MockSessionRepository {
    pub fn empty() -> Self {
        Self {
            stored: Mutex::new(None),
        }
    }

    pub fn with_session(username: &str, token: &str) -> Self {
        Self {
            stored: Mutex::new(Some(StoredSession::new(username, token))),
        }
    }

    pub fn stored(&self) -> Option<StoredSession> {
        self.stored.lock().unwrap().clone()
    }
}

#[async_trait]
impl SessionRepository for MockSessionRepository {
    async fn load(&self) -> Result<Option<StoredSession>> {
        Ok(self.stored())
    }

    async fn save(&self, session: &StoredSession) -> Result<()> {
        *self.stored.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.stored.lock().unwrap() = None;
        Ok(())
    }
}

type LoginResult = std::result::Result<LoginOutcome, WorkflowError>;
type UnitResult = std::result::Result<(), WorkflowError>;
type StatusResult = std::result::Result<bool, WorkflowError>;

/// Auth gateway fake with configurable responses and call counters.
///
/// Unconfigured operations answer with a network failure, so a test that
/// forgot to stub a path it exercises fails loudly instead of panicking.
pub(crate) struct MockAuthGateway {
    login_result: Mutex<LoginResult>,
    register_result: Mutex<UnitResult>,
    status_result: Mutex<StatusResult>,
    logout_result: Mutex<UnitResult>,
    login_calls: AtomicUsize,
    register_calls: AtomicUsize,
    status_calls: AtomicUsize,
    logout_calls: AtomicUsize,
}

impl MockAuthGateway {
    pub fn new() -> Self {
        Self {
            login_result: Mutex::new(Err(WorkflowError::Network)),
            register_result: Mutex::new(Err(WorkflowError::Network)),
            status_result: Mutex::new(Err(WorkflowError::Network)),
            logout_result: Mutex::new(Ok(())),
            login_calls: AtomicUsize::new(0),
            register_calls: AtomicUsize::new(0),
            status_calls: AtomicUsize::new(0),
            logout_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_login(self, result: LoginResult) -> Self {
        *self.login_result.lock().unwrap() = result;
        self
    }

    pub fn with_register(self, result: UnitResult) -> Self {
        *self.register_result.lock().unwrap() = result;
        self
    }

    pub fn with_status(self, result: StatusResult) -> Self {
        *self.status_result.lock().unwrap() = result;
        self
    }

    pub fn with_logout(self, result: UnitResult) -> Self {
        *self.logout_result.lock().unwrap() = result;
        self
    }

    pub fn register_calls(&self) -> usize {
        self.register_calls.load(Ordering::SeqCst)
    }

    pub fn check_status_calls(&self) -> usize {
        self.status_calls.load(Ordering::SeqCst)
    }

    pub fn logout_calls(&self) -> usize {
        self.logout_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthGateway for MockAuthGateway {
    async fn login(&self, _username: &str, _password: &str) -> LoginResult {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        self.login_result.lock().unwrap().clone()
    }

    async fn register(&self, _username: &str, _password: &str) -> UnitResult {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        self.register_result.lock().unwrap().clone()
    }

    async fn check_status(&self, _token: &str) -> StatusResult {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        self.status_result.lock().unwrap().clone()
    }

    async fn logout(&self, _token: &str) -> UnitResult {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        self.logout_result.lock().unwrap().clone()
    }
}

/// Analysis gateway fake. When gated, `analyze` suspends until
/// [`MockAnalysisGateway::release`] is called, which lets tests hold a
/// request in flight deterministically.
pub(crate) struct MockAnalysisGateway {
    result: std::result::Result<AnalysisResult, WorkflowError>,
    calls: AtomicUsize,
    last_token: Mutex<Option<String>>,
    gated: AtomicBool,
    gate: Semaphore,
}

impl MockAnalysisGateway {
    pub fn new(result: std::result::Result<AnalysisResult, WorkflowError>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
            last_token: Mutex::new(None),
            gated: AtomicBool::new(false),
            gate: Semaphore::new(0),
        }
    }

    pub fn gated(self) -> Self {
        self.gated.store(true, Ordering::SeqCst);
        self
    }

    /// Opens the gate; in-flight and future calls complete immediately.
    pub fn release(&self) {
        self.gated.store(false, Ordering::SeqCst);
        self.gate.add_permits(Semaphore::MAX_PERMITS / 2);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_token(&self) -> Option<String> {
        self.last_token.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnalysisGateway for MockAnalysisGateway {
    async fn analyze(
        &self,
        token: &str,
        _url: &str,
    ) -> std::result::Result<AnalysisResult, WorkflowError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_token.lock().unwrap() = Some(token.to_string());
        if self.gated.load(Ordering::SeqCst) {
            let _permit = self.gate.acquire().await;
        }
        self.result.clone()
    }
}
