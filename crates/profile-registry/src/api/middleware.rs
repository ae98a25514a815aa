//! Request logging middleware.

use super::CLIENT_ID_HEADER;
use axum::{extract::Request, middleware::Next, response::Response};
use tracing::debug;

/// Logs method, path, client id and outcome of every request.
///
/// Rejected requests are answered to the caller only, so they stay at debug.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let client_id = request
        .headers()
        .get(CLIENT_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let start = std::time::Instant::now();

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();

    if status.is_success() {
        debug!(%method, %uri, %client_id, %status, ?duration, "Request completed");
    } else {
        debug!(%method, %uri, %client_id, %status, ?duration, "Request rejected");
    }

    response
}
