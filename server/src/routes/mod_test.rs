use axum::body::{Body, to_bytes};
use axum::http::Request;
use tower::ServiceExt as _;

use super::*;

fn test_app() -> Router {
    app(LeptosOptions::builder().output_name("login-form").build())
}

async fn get_path(path: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    let response = test_app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn router_serves_healthz() {
    let (status, _) = get_path("/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn router_renders_login_form_at_root() {
    let (status, body) = get_path("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<form"));
    assert!(body.contains("Username or Email"));
    assert!(body.contains("<!DOCTYPE html>") || body.contains("<!doctype html>"));
}

#[tokio::test]
async fn router_reports_missing_asset_under_pkg() {
    let (status, _) = get_path("/pkg/does-not-exist.wasm").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
