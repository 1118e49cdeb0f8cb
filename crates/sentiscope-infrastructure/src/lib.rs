pub mod config;
pub mod paths;
pub mod session_repository;

pub use crate::config::ClientConfig;
pub use crate::paths::SentiscopePaths;
pub use crate::session_repository::JsonSessionRepository;
