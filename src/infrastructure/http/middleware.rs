//! HTTP Middleware
//!
//! 请求耗时与 HTTP 错误状态日志

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// 记录每个请求的耗时；4xx 记 warn，5xx 记 error
///
/// 业务错误（errno != 0）在 ApiError::into_response() 中记录
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(%method, %uri, status = status.as_u16(), elapsed_ms, "HTTP server error");
    } else if status.is_client_error() {
        tracing::warn!(%method, %uri, status = status.as_u16(), elapsed_ms, "HTTP client error");
    } else {
        tracing::debug!(%method, %uri, status = status.as_u16(), elapsed_ms, "Request rendered");
    }

    response
}
