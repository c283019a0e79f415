#![allow(dead_code)]

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use temple_db::DbConfig;
use tower::ServiceExt;

use temple_api::config::ServerConfig;
use temple_api::router::build_app_router;
use temple_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Serves the repository's `public/` directory as static content.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../../public")),
        db: DbConfig::default(),
    }
}

/// Build the full application router around `pool`, using the same
/// middleware stack as production.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_config(pool, &test_config())
}

/// Like [`build_test_app`], with a caller-supplied configuration.
pub fn build_test_app_with_config(pool: PgPool, config: &ServerConfig) -> Router {
    build_app_router(AppState { pool }, config)
}

/// A pool pointed at a port nothing listens on. It never connects, so
/// requests that reach storage fail quickly with a driver error.
pub fn unreachable_pool() -> PgPool {
    let config = DbConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
        acquire_timeout_secs: 1,
        ..DbConfig::default()
    };
    temple_db::create_lazy_pool(&config).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw(app, uri, "application/json", body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: String) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
