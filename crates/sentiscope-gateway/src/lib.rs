pub mod http_gateway;

pub use crate::http_gateway::HttpGateway;

/// Default server base URL when no configuration is provided.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
