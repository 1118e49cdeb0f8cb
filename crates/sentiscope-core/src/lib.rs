pub mod analysis;
pub mod auth;
pub mod error;
pub mod repository;
pub mod session;

// Re-export common error type
pub use error::WorkflowError;
