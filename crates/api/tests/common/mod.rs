#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assetscope_core::observer::TracingObserver;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use assetscope_api::config::{LogConfig, LogFormat, ServerConfig};
use assetscope_api::router::build_app_router;
use assetscope_api::state::AppState;

/// Build a test `ServerConfig` pointing at `assets_dir`.
pub fn test_config(assets_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        assets_dir: assets_dir.to_path_buf(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        log: LogConfig {
            format: LogFormat::Pretty,
            dir: None,
        },
    }
}

/// Build the full application router over `assets_dir`, with the same
/// middleware stack production uses.
pub fn build_test_app(assets_dir: &Path) -> Router {
    build_test_app_with(&test_config(assets_dir))
}

/// Build the full application router from an explicit `config`.
pub fn build_test_app_with(config: &ServerConfig) -> Router {
    let state = AppState {
        service: assetscope_core::build_service(&config.assets_dir, TracingObserver::shared()),
    };
    build_app_router(state, config)
}

/// Write `contents` to `name` inside `dir`.
pub fn write_asset_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
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

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
