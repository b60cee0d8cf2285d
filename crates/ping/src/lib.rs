pub mod config;
pub mod handlers;
pub mod request_id;

use axum::{Router, middleware, routing::get};
use tokio::net::TcpListener;
use tracing::info;

use crate::{handlers::ping, request_id::request_id_middleware};

pub fn create_router() -> Router {
    Router::new()
        .route("/ping", get(ping))
        .layer(middleware::from_fn(request_id_middleware))
}

/// Serves the router on an already bound listener until the process is killed.
pub async fn serve(listener: TcpListener) -> anyhow::Result<()> {
    axum::serve(listener, create_router()).await?;

    Ok(())
}

pub async fn run_server(port: u16) -> anyhow::Result<()> {
    let listener = TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!("Server is listening on :{}...", port);

    serve(listener).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Method, Request, StatusCode, header},
    };
    use tower::ServiceExt;

    async fn send(method: Method, uri: &str) -> axum::response::Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        create_router().oneshot(request).await.unwrap()
    }

    #[tokio::test]
    async fn test_ping_returns_pong() {
        let response = send(Method::GET, "/ping").await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/plain"));

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Pong!");
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let response = send(Method::GET, "/health").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_other_method_not_allowed() {
        let response = send(Method::POST, "/ping").await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
