//! Analysis domain model and gateway port.

use crate::error::WorkflowError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Metrics returned by the remote sentiment-analysis service for one URL.
///
/// Immutable once received; the workflow replaces it wholesale on the next
/// successful request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub positive_percent: f64,
    pub negative_percent: f64,
    /// Omitted by some server versions; defaults to 0.
    #[serde(default)]
    pub neutral_percent: f64,
    pub purchase_intent_percent: f64,
    pub total_comments: u64,
    /// Platform the comments were scraped from (e.g. "twitter").
    pub platform: String,
}

/// Typed contract over the remote analysis endpoint.
#[async_trait]
pub trait AnalysisGateway: Send + Sync {
    /// Submits `url` for comment sentiment analysis, authorized by `token`.
    ///
    /// An expired or invalid token surfaces as [`WorkflowError::Auth`], a
    /// rejected URL as [`WorkflowError::Validation`].
    async fn analyze(&self, token: &str, url: &str) -> Result<AnalysisResult, WorkflowError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_percent_defaults_to_zero() {
        let body = r#"{
            "positive_percent": 70.0,
            "negative_percent": 30.0,
            "purchase_intent_percent": 45.0,
            "total_comments": 120,
            "platform": "twitter"
        }"#;
        let result: AnalysisResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.neutral_percent, 0.0);
        assert_eq!(result.total_comments, 120);
        assert_eq!(result.platform, "twitter");
    }
}
