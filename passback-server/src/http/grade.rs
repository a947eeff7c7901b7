//! Grade submission endpoint

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use passback_core::{GradeError, GradeRequest, LaunchToken, TraceContext};

use crate::AppState;

/// JSON error envelope returned for every failed grading request
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Failure message
    pub err: String,
}

/// POST /grade
///
/// Submits the caller's grade into the LMS gradebook for the launch behind
/// the attached `LaunchToken`. On success the platform's AGS response is
/// returned verbatim. Missing launch context and bad grades answer 400;
/// downstream failures answer 500 with the raw downstream message, which
/// knowingly exposes platform error text to the caller.
pub async fn submit_grade(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TraceContext>,
    Extension(token): Extension<LaunchToken>,
    Json(request): Json<GradeRequest>,
) -> Response {
    match state.grades.submit(&ctx, &token, &request).await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(err) => {
            let status = status_for(&err);
            tracing::error!(
                request_id = %ctx.request_id,
                error = %err,
                status = %status.as_u16(),
                "grade submission failed"
            );
            error_response(status, err.to_string())
        }
    }
}

fn status_for(err: &GradeError) -> StatusCode {
    if err.is_caller_fault() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorBody { err: message.into() })).into_response()
}
