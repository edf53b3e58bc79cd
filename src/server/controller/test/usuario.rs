use super::*;
use entity::prelude::*;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory::usuario::UsuarioFactory};

async fn two_usuarios(db: &DatabaseConnection) {
    UsuarioFactory::new(db).id(1).build().await.unwrap();
    UsuarioFactory::new(db).id(2).build().await.unwrap();
}

/// Tests the second page of two usuarios with page size 1.
///
/// Expected: one item, a prev link and no next link
#[tokio::test]
async fn second_page_has_prev_but_no_next() {
    let test = TestBuilder::new().with_table(Usuario).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    two_usuarios(db).await;
    let app = app(db);

    let response = send(&app, get("/api/usuarios?page=2&pageSize=1")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["items"].as_array().unwrap().len(), 1);
    assert_eq!(response.body["items"][0]["id"], 2);
    assert_eq!(response.body["page"], 2);
    assert_eq!(response.body["pageSize"], 1);
    assert_eq!(response.body["totalCount"], 2);
    assert_eq!(response.body["totalPages"], 2);
    assert_eq!(
        links(&response.body),
        vec![
            (
                "self".to_string(),
                format!("{}/api/usuarios?page=2&pageSize=1", APP_URL)
            ),
            (
                "prev".to_string(),
                format!("{}/api/usuarios?page=1&pageSize=1", APP_URL)
            ),
        ]
    );
}

/// Tests that links follow the forwarded scheme and host.
///
/// Expected: links built from X-Forwarded-Proto and Host
#[tokio::test]
async fn links_use_request_origin() {
    let test = TestBuilder::new().with_table(Usuario).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    two_usuarios(db).await;
    let app = app(db);

    let request = Request::builder()
        .uri("/api/usuarios?pageSize=1")
        .header(header::HOST, "frota.example.com")
        .header("x-forwarded-proto", "https")
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(
        links(&response.body),
        vec![
            (
                "self".to_string(),
                "https://frota.example.com/api/usuarios?page=1&pageSize=1".to_string()
            ),
            (
                "next".to_string(),
                "https://frota.example.com/api/usuarios?page=2&pageSize=1".to_string()
            ),
        ]
    );
}

/// Tests that password material never appears in responses.
///
/// Expected: 201 with only id and username
#[tokio::test]
async fn create_usuario_hides_password() {
    let test = TestBuilder::new().with_table(Usuario).build().await.unwrap();
    let app = app(test.db.as_ref().unwrap());

    let response = send(
        &app,
        json(
            Method::POST,
            "/api/usuarios",
            json!({ "username": "admin", "password": "admin123" }),
        ),
    )
    .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body, json!({ "id": 1, "username": "admin" }));
    assert_eq!(response.headers[header::LOCATION], "/api/usuarios/1");
}

/// Tests creating a usuario without a password.
///
/// Expected: 400
#[tokio::test]
async fn create_usuario_requires_password() {
    let test = TestBuilder::new().with_table(Usuario).build().await.unwrap();
    let app = app(test.db.as_ref().unwrap());

    let response = send(
        &app,
        json(Method::POST, "/api/usuarios", json!({ "username": "admin" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "A senha é obrigatória");
}

/// Tests updating a usuario without a password.
///
/// Expected: 200 with the new username
#[tokio::test]
async fn update_usuario_without_password() {
    let test = TestBuilder::new().with_table(Usuario).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    two_usuarios(db).await;
    let app = app(db);

    let response = send(
        &app,
        json(Method::PUT, "/api/usuarios/1", json!({ "Username": "supervisor" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["username"], "supervisor");
}
