//! Correlation middleware
//!
//! Assigns one `TraceContext` per request and passes it down through the
//! request extensions, so handlers log against an explicit context instead of
//! ambient logger state. The id is echoed back on the response.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use passback_core::TraceContext;

/// Response header carrying the correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Attach a fresh trace context and log the request
pub async fn trace_middleware(mut request: Request, next: Next) -> Response {
    let ctx = TraceContext::new();
    let request_id = ctx.request_id.clone();

    tracing::info!(
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
        "request received"
    );

    request.extensions_mut().insert(ctx);
    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
