use super::*;

use axum::Json;
use axum::Router;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::any;
use serde_json::{Value, json};

fn config_for(backend_url: &str) -> ServerConfig {
    ServerConfig { port: 0, backend_url: backend_url.to_owned(), backend_timeout_secs: 5 }
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
    format!("http://{addr}")
}

async fn serve_proxy(backend_url: &str) -> String {
    let state = ProxyState::new(&config_for(backend_url)).unwrap();
    serve(Router::new().route("/api/{*path}", any(forward)).with_state(state)).await
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> impl IntoResponse {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    (
        StatusCode::CREATED,
        [("x-backend", "laps")],
        Json(json!({
            "method": method.as_str(),
            "uri": uri.to_string(),
            "authorization": authorization,
            "body": body,
        })),
    )
}

async fn unauthorized() -> impl IntoResponse {
    (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Unauthorized" })))
}

// =============================================================================
// Pure helpers
// =============================================================================

#[test]
fn upstream_url_keeps_path_and_query() {
    let uri: Uri = "/api/laps/7?sort=asc".parse().unwrap();
    assert_eq!(upstream_url("http://backend:5001", &uri), "http://backend:5001/api/laps/7?sort=asc");

    let uri: Uri = "/api/records".parse().unwrap();
    assert_eq!(upstream_url("http://backend:5001", &uri), "http://backend:5001/api/records");
}

#[test]
fn hop_by_hop_headers_are_not_forwarded() {
    for name in ["connection", "keep-alive", "transfer-encoding", "upgrade", "host", "content-length"] {
        assert!(!forwardable_header(&HeaderName::from_static(name)), "{name} should be dropped");
    }
    for name in ["authorization", "content-type", "set-cookie", "accept"] {
        assert!(forwardable_header(&HeaderName::from_static(name)), "{name} should be kept");
    }
}

#[test]
fn copy_headers_keeps_repeated_values() {
    let mut source = HeaderMap::new();
    source.append(header::SET_COOKIE, HeaderValue::from_static("a=1"));
    source.append(header::SET_COOKIE, HeaderValue::from_static("b=2"));
    source.insert(header::CONNECTION, HeaderValue::from_static("close"));

    let copied = copy_headers(&source);
    assert_eq!(copied.get_all(header::SET_COOKIE).iter().count(), 2);
    assert!(copied.get(header::CONNECTION).is_none());
}

#[test]
fn proxy_error_renders_bad_gateway_with_error_field() {
    let response = ProxyError::Timeout.into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

// =============================================================================
// Live forwarding against an in-process backend
// =============================================================================

#[tokio::test]
async fn forward_replays_method_query_headers_and_body() {
    let backend = serve(Router::new().route("/api/{*path}", any(echo))).await;
    let proxy = serve_proxy(&backend).await;

    let response = reqwest::Client::new()
        .put(format!("{proxy}/api/laps/7?sort=asc"))
        .header(header::AUTHORIZATION, "Bearer tok-1")
        .header(header::CONTENT_TYPE, "application/json")
        .body(r#"{"lap_time":"1:23.456"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    assert_eq!(response.headers().get("x-backend").unwrap(), "laps");
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["method"], "PUT");
    assert_eq!(body["uri"], "/api/laps/7?sort=asc");
    assert_eq!(body["authorization"], "Bearer tok-1");
    assert_eq!(body["body"], r#"{"lap_time":"1:23.456"}"#);
}

#[tokio::test]
async fn forward_passes_backend_rejections_through() {
    let backend = serve(Router::new().route("/api/{*path}", any(unauthorized))).await;
    let proxy = serve_proxy(&backend).await;

    let response = reqwest::get(format!("{proxy}/api/user")).await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Unauthorized" }));
}

#[tokio::test]
async fn forward_reports_unreachable_backend_as_bad_gateway() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let proxy = serve_proxy(&dead).await;

    let response = reqwest::get(format!("{proxy}/api/records")).await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::BAD_GATEWAY);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("backend unavailable"));
}
