//! Use-case layer: the session store and the analysis workflow controller.
//!
//! This crate owns the client's state-machine behavior and failure-handling
//! policy. It talks to remote services and durable storage only through the
//! ports defined in `sentiscope-core`, so every use case is testable
//! against in-memory fakes.

pub mod account;
pub mod analysis_workflow;
pub mod session_store;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::account::AccountService;
pub use crate::analysis_workflow::{AnalysisWorkflow, AnalyzeOutcome, WorkflowState};
pub use crate::session_store::SessionStore;
