use axum::http::StatusCode;

/// Liveness probe.
pub async fn ping() -> (StatusCode, &'static str) {
    (StatusCode::OK, "Pong!")
}
