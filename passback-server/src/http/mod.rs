//! HTTP server module

mod api;
mod grade;

use std::sync::Arc;

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};

use crate::AppState;

pub use api::HealthResponse;
pub use grade::ErrorBody;
pub(crate) use grade::error_response as grade_error_response;

/// Create the HTTP router with all routes configured.
///
/// `/grade` requires a `LaunchToken` in the request extensions; every route
/// gets a per-request trace context.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/grade", post(grade::submit_grade))
        .route_layer(from_fn(crate::middleware::require_launch_token))
        .route("/health", get(api::health))
        .layer(from_fn(crate::middleware::trace_middleware))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use passback_core::{GradeConfig, MockAgsClient};

    #[tokio::test]
    async fn test_router_has_health_endpoint() {
        let state = Arc::new(AppState::new(
            Arc::new(MockAgsClient::new()),
            GradeConfig::default(),
        ));
        let server = TestServer::new(create_router(state)).unwrap();

        let response = server.get("/health").await;
        response.assert_status_ok();
    }

    #[tokio::test]
    async fn test_grade_route_rejects_requests_without_a_token() {
        let state = Arc::new(AppState::new(
            Arc::new(MockAgsClient::new()),
            GradeConfig::default(),
        ));
        let server = TestServer::new(create_router(state)).unwrap();

        let response = server
            .post("/grade")
            .json(&serde_json::json!({ "grade": 1 }))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }
}
