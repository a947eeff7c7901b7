//! Launch context middleware
//!
//! The external launch provider validates the inbound LTI launch and attaches
//! a `LaunchToken` to the request extensions before the request reaches this
//! router. Requests that arrive without one never get to the grading handler.

use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use passback_core::{LaunchToken, TraceContext};

use crate::http::grade_error_response;

/// Reject grading requests that carry no launch token
pub async fn require_launch_token(request: Request, next: Next) -> Response {
    if request.extensions().get::<LaunchToken>().is_none() {
        if let Some(ctx) = request.extensions().get::<TraceContext>() {
            tracing::warn!(
                request_id = %ctx.request_id,
                path = %request.uri().path(),
                "grading request without a launch token"
            );
        }
        return grade_error_response(StatusCode::UNAUTHORIZED, "missing launch context");
    }

    next.run(request).await
}
