//! Client seam to the platform integration layer
//!
//! The actual authenticated HTTP calls (including the OAuth2
//! client-credentials exchange) live in an external platform client; this
//! trait is the surface the grade submission core consumes.

use async_trait::async_trait;
use thiserror::Error;

use crate::launch::LaunchToken;

use super::types::{LineItem, LineItemQuery, Score};

/// Errors surfaced by the platform integration client.
///
/// `Display` is the raw downstream message. Callers that map these into
/// responses surface that text verbatim, which trades a cleaner envelope for
/// debuggability.
#[derive(Debug, Error)]
pub enum AgsError {
    /// Error reported by the LMS platform
    #[error("{0}")]
    Platform(String),

    /// Transport-level failure reaching the platform
    #[error("transport error: {0}")]
    Transport(String),

    /// The platform answered with something the protocol does not allow
    #[error("malformed platform response: {0}")]
    MalformedResponse(String),
}

/// Authenticated access to the platform's line-item and score endpoints.
///
/// One call maps to one request/response against the LMS; no retry or
/// timeout policy is applied here, callers wrap their own.
#[async_trait]
pub trait AgsClient: Send + Sync {
    /// List the line items visible to this launch.
    async fn list_line_items(
        &self,
        token: &LaunchToken,
        query: &LineItemQuery,
    ) -> Result<Vec<LineItem>, AgsError>;

    /// Create a line item; the platform assigns its `id`.
    async fn create_line_item(
        &self,
        token: &LaunchToken,
        line_item: &LineItem,
    ) -> Result<LineItem, AgsError>;

    /// Submit a score against a line item, returning the platform's response
    /// payload as-is.
    async fn submit_score(
        &self,
        token: &LaunchToken,
        line_item_id: &str,
        score: &Score,
    ) -> Result<serde_json::Value, AgsError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_error_displays_raw_message() {
        let error = AgsError::Platform("timeout".to_string());
        assert_eq!(error.to_string(), "timeout");
    }

    #[test]
    fn transport_error_names_the_failure_class() {
        let error = AgsError::Transport("connection refused".to_string());
        assert_eq!(error.to_string(), "transport error: connection refused");
    }
}
