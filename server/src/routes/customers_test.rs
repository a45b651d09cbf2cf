use axum::body::{Body, Bytes, to_bytes};
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::routes::api_routes;
use crate::state::test_helpers::test_app_state;

async fn send_raw(request: Request<Body>) -> (StatusCode, Option<String>, Bytes) {
    let response = api_routes(test_app_state()).oneshot(request).await.expect("router responds");
    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, content_type, bytes)
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let (status, _, bytes) = send_raw(request).await;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).expect("json body") };
    (status, value)
}

fn post(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/customers")
        .body(Body::from(body.to_owned()))
        .expect("request")
}

#[tokio::test]
async fn list_returns_fixtures() {
    let request = Request::builder().uri("/api/v1/customers").body(Body::empty()).expect("request");
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().expect("array");
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["id"], "cus_7f3a91c2");
    assert_eq!(items[0]["deferral_days"], 14);
}

#[tokio::test]
async fn list_serves_fixture_document_unchanged() {
    let request = Request::builder().uri("/api/v1/customers").body(Body::empty()).expect("request");
    let (status, content_type, bytes) = send_raw(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(bytes.as_ref(), crate::services::fixtures::EMBEDDED_FIXTURES.as_bytes());
    let body: Value = serde_json::from_slice(&bytes).expect("json");
    assert_eq!(body[1]["metadata"], json!({ "manager": "Иванова", "region": "СЗФО" }));
}

#[tokio::test]
async fn listed_records_decode_as_customers() {
    let request = Request::builder().uri("/api/v1/customers").body(Body::empty()).expect("request");
    let (_, body) = send(request).await;
    let customers = records::decode_customers(&body.to_string()).expect("decode");
    assert_eq!(customers[1].metadata.len(), 2);
}

#[tokio::test]
async fn create_echoes_body_without_content_type() {
    let payload = json!({
        "name": "Acme",
        "email": "a@acme.test",
        "deferral_days": 30,
        "balance": { "credit_limit": 1000.0 },
        "metadata": [{ "key": "k", "value": "v" }]
    });
    let (status, body) = send(post(&payload.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["err"], Value::Null);
    assert_eq!(body["body"], payload);
    assert!(body["body"].get("id").is_none());
}

#[tokio::test]
async fn create_with_json_content_type_is_echoed() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/customers")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"name":"Ромашка"}"#))
        .expect("request");
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["body"]["name"], "Ромашка");
}

#[tokio::test]
async fn create_invalid_json_is_bad_request() {
    let (status, body) = send(post("{not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["err"].as_str().is_some_and(|e| !e.is_empty()));
    assert_eq!(body["body"], Value::Null);
}

#[tokio::test]
async fn healthz_is_ok() {
    let request = Request::builder().uri("/healthz").body(Body::empty()).expect("request");
    let (status, _) = send(request).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn unknown_api_route_is_not_found() {
    let request = Request::builder().uri("/api/v1/orders").body(Body::empty()).expect("request");
    let (status, _) = send(request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
