pub mod auth;
pub mod health;

use axum::http::{header, Method};
use axum::{routing::get, Router};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::middleware::{api_key_auth, request_logger};
use crate::api::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = build_cors(&state.config.config.cors.allowed_origins);

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", api_v1_routes())
        .layer(axum::middleware::from_fn(request_logger))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

fn build_cors(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        cors.allow_origin(origins)
    }
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route("/whoami", get(auth::whoami))
        .layer(axum::middleware::from_fn(api_key_auth))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::infrastructure::AppConfig;

    fn test_app() -> Router {
        create_router(AppState::new(AppConfig::default()))
    }

    #[tokio::test]
    async fn test_health_is_public() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_whoami_requires_api_key() {
        let request = Request::builder()
            .uri("/api/v1/whoami")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_whoami_rejects_bearer_scheme() {
        let request = Request::builder()
            .uri("/api/v1/whoami")
            .header(header::AUTHORIZATION, "Bearer test-key-123")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_whoami_returns_extracted_key() {
        let request = Request::builder()
            .uri("/api/v1/whoami")
            .header(header::AUTHORIZATION, "ApiKey test-key-123")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["api_key"], "test-key-123");
    }
}
