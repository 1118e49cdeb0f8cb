//! Analysis workflow controller.
//!
//! Owns the lifecycle of a single analysis request:
//! `Idle -> Requesting -> (Succeeded | Failed) -> ...`, re-enterable on the
//! next analyze action. At most one request is in flight at a time; the
//! guard lives here, not in the presentation layer, so concurrent
//! programmatic calls are serialized too.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use sentiscope_core::WorkflowError;
use sentiscope_core::analysis::{AnalysisGateway, AnalysisResult};

use crate::session_store::SessionStore;

/// Surfaced when the submitted URL is empty or whitespace-only.
pub const EMPTY_URL_MESSAGE: &str = "URL must not be empty";

/// Observable state of the analysis workflow.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WorkflowState {
    #[default]
    Idle,
    /// A request is outstanding. Always exits to exactly one of
    /// `Succeeded`/`Failed`.
    Requesting,
    Succeeded(AnalysisResult),
    Failed(WorkflowError),
}

/// What a single `analyze` call produced.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyzeOutcome {
    Completed(AnalysisResult),
    Failed(WorkflowError),
    /// Rejected by the in-flight guard; no network call was issued and the
    /// workflow state was left untouched.
    Ignored,
}

/// State machine driving analysis requests.
pub struct AnalysisWorkflow {
    analysis_gateway: Arc<dyn AnalysisGateway>,
    session_store: Arc<SessionStore>,
    state: RwLock<WorkflowState>,
    in_flight: AtomicBool,
}

impl AnalysisWorkflow {
    pub fn new(analysis_gateway: Arc<dyn AnalysisGateway>, session_store: Arc<SessionStore>) -> Self {
        Self {
            analysis_gateway,
            session_store,
            state: RwLock::new(WorkflowState::Idle),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Submits `raw_url` for analysis.
    ///
    /// Empty or whitespace-only input fails before any network call and
    /// without touching the in-flight guard. A classified `Auth` failure
    /// additionally clears the session store: an expired token
    /// deauthenticates the user immediately instead of merely reporting an
    /// error.
    pub async fn analyze(&self, raw_url: &str) -> AnalyzeOutcome {
        let url = raw_url.trim();
        if url.is_empty() {
            let err = WorkflowError::client_validation(EMPTY_URL_MESSAGE);
            self.set_state(WorkflowState::Failed(err.clone()));
            return AnalyzeOutcome::Failed(err);
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!("[AnalysisWorkflow] analyze ignored: a request is already in flight");
            return AnalyzeOutcome::Ignored;
        }

        // Entering Requesting drops any previous result or error.
        self.set_state(WorkflowState::Requesting);
        let token = self.session_store.token().unwrap_or_default();

        let outcome = self.analysis_gateway.analyze(&token, url).await;
        self.in_flight.store(false, Ordering::SeqCst);

        match outcome {
            Ok(result) => {
                tracing::info!(
                    "[AnalysisWorkflow] analysis completed: {} comments from {}",
                    result.total_comments,
                    result.platform
                );
                self.set_state(WorkflowState::Succeeded(result.clone()));
                AnalyzeOutcome::Completed(result)
            }
            Err(err) => {
                if err.is_auth() {
                    tracing::info!("[AnalysisWorkflow] auth failure, clearing session");
                    if let Err(clear_err) = self.session_store.clear().await {
                        tracing::warn!(
                            "[AnalysisWorkflow] failed to clear session: {clear_err:#}"
                        );
                    }
                }
                self.set_state(WorkflowState::Failed(err.clone()));
                AnalyzeOutcome::Failed(err)
            }
        }
    }

    /// Returns a snapshot of the workflow state for rendering.
    pub fn state(&self) -> WorkflowState {
        self.state.read().unwrap().clone()
    }

    fn set_state(&self, state: WorkflowState) {
        *self.state.write().unwrap() = state;
    }
}
