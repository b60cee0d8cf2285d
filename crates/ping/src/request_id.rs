//! Per-request correlation id and access logging.
//!
//! Each request runs inside a span tagged with its id. The id comes from the
//! client's `x-request-id` header when present, otherwise a fresh UUIDv4, and
//! is echoed back on the response.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

fn request_id(request: &Request) -> String {
    request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let id = request_id(&request);
    let span = info_span!(
        "request",
        request_id = %id,
        method = %request.method(),
        uri = %request.uri(),
    );

    async move {
        let mut response = next.run(request).await;

        if let Ok(value) = HeaderValue::from_str(&id) {
            response.headers_mut().insert(REQUEST_ID_HEADER.clone(), value);
        }
        info!(status = response.status().as_u16(), "Request completed");

        response
    }
    .instrument(span)
    .await
}
