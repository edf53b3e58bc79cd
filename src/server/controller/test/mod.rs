use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};

mod usuario;

/// Origin used for links when a request has no `Host` header.
const APP_URL: &str = "http://localhost:8080";

struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    /// Parsed JSON body, a JSON string for non-JSON bodies, or null when empty.
    body: Value,
}

fn app(db: &DatabaseConnection) -> Router {
    router().with_state(AppState::new(db.clone(), APP_URL.to_string()))
}

async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// `(rel, href)` pairs of a list response in order.
fn links(body: &Value) -> Vec<(String, String)> {
    body["links"]
        .as_array()
        .unwrap()
        .iter()
        .map(|link| {
            assert_eq!(link["method"], "GET");
            (
                link["rel"].as_str().unwrap().to_string(),
                link["href"].as_str().unwrap().to_string(),
            )
        })
        .collect()
}
