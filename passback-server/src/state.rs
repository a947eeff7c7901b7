//! Shared application state for the passback server

use std::sync::Arc;

use chrono::{DateTime, Utc};
use passback_core::{AgsClient, GradeConfig, GradeService};

/// Shared application state accessible by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Grade submission service over the platform integration client
    pub grades: GradeService,
    /// When the server started
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create state over the given platform client
    pub fn new(client: Arc<dyn AgsClient>, config: GradeConfig) -> Self {
        Self {
            grades: GradeService::new(client, config),
            started_at: Utc::now(),
        }
    }

    /// Returns how long the server has been running
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use passback_core::MockAgsClient;

    #[test]
    fn test_app_state_new() {
        let state = AppState::new(Arc::new(MockAgsClient::new()), GradeConfig::default());
        assert!(state.uptime_seconds() >= 0);
        assert_eq!(state.grades.config().score_maximum, 10_000.0);
    }
}
