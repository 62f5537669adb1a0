//! Handler tests for the Users domain
//!
//! These drive the users router over the in-memory repository:
//! - Request deserialization (JSON → Rust structs)
//! - Fixed response texts and HTTP status codes
//! - Lookup cache behaviour as seen by clients

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_users::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app_with(config: UsersConfig) -> (Router, InMemoryUserRepository) {
    let repository = InMemoryUserRepository::new();
    let service = UserService::new(repository.clone(), UserCache::new(), config);
    (handlers::router(service), repository)
}

fn app() -> (Router, InMemoryUserRepository) {
    app_with(UsersConfig::default())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_string(&json).unwrap())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

fn text(bytes: &[u8]) -> &str {
    std::str::from_utf8(bytes).unwrap()
}

fn json_of(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

async fn register(app: &Router, name: &str, email: &str, password: &str) -> (StatusCode, Vec<u8>) {
    send(
        app,
        "POST",
        "/register",
        Some(json!({ "name": name, "password": password, "email": email })),
    )
    .await
}

#[tokio::test]
async fn test_register_then_login() {
    let (app, _) = app();

    let (status, body) = register(&app, "Ann", "a@x.com", "p1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text(&body), "User was created");

    let (status, body) = send(
        &app,
        "POST",
        "/login",
        Some(json!({ "email": "a@x.com", "password": "p1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text(&body), "Login successful");

    let (status, body) = send(
        &app,
        "POST",
        "/login",
        Some(json!({ "email": "a@x.com", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(text(&body), "Invalid password");
}

#[tokio::test]
async fn test_login_unknown_email() {
    let (app, _) = app();

    let (status, body) = send(
        &app,
        "POST",
        "/login",
        Some(json!({ "email": "nobody@x.com", "password": "p1" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(text(&body), "No user found");
}

#[tokio::test]
async fn test_register_stores_hash_only() {
    let (app, repository) = app();
    register(&app, "Ann", "a@x.com", "p1").await;

    let stored = repository.get_by_email("a@x.com").await.unwrap().unwrap();
    assert_ne!(stored.hashed_password, "p1");

    let (status, body) = send(&app, "GET", "/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!text(&body).contains("hashed_password"));
    assert!(!text(&body).contains("argon2"));
}

#[tokio::test]
async fn test_register_duplicate_email_is_500() {
    let (app, _) = app();
    register(&app, "Ann", "a@x.com", "p1").await;

    let (status, body) = register(&app, "Ann Again", "a@x.com", "p2").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(text(&body), "Error while creating a user");
}

async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }

    let response = app
        .clone()
        .oneshot(builder.body(Body::from(body.to_owned())).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn test_auth_routes_answer_unreadable_bodies_with_fixed_500() {
    let (app, repository) = app();

    let cases = [
        ("/register", r#"{"name":"Ann","email":"a@x.com"}"#, "Error while creating a user"),
        ("/login", r#"{"email":"a@x.com"}"#, "Login error"),
        (
            "/change-password",
            r#"{"email":"a@x.com","currentPassword":"p1"}"#,
            "Error while changing password",
        ),
    ];

    for (uri, body, expected) in cases {
        let (status, response) =
            send_raw(&app, "POST", uri, Some("application/json"), body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(text(&response), expected, "{uri}");

        let (status, response) = send_raw(&app, "POST", uri, None, body).await;
        assert_eq!(
            status,
            StatusCode::INTERNAL_SERVER_ERROR,
            "{uri} without content-type"
        );
        assert_eq!(text(&response), expected, "{uri} without content-type");

        let (status, _) =
            send_raw(&app, "POST", uri, Some("application/json"), "{not json").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri} with broken JSON");
    }

    assert!(repository.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_with_unreadable_body_is_400() {
    let (app, repository) = app();
    register(&app, "Ann", "a@x.com", "p1").await;

    let (status, body) = send_raw(&app, "PUT", "/users/1", None, r#"{"name":"Bob"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json_of(&body)["error"].is_string());

    let (status, body) = send_raw(
        &app,
        "PUT",
        "/users/1",
        Some("application/json"),
        r#"{"name":1}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json_of(&body)["error"].is_string());

    let stored = repository.get_by_id(1).await.unwrap().unwrap();
    assert_eq!(stored.name, "Ann");
}

#[tokio::test]
async fn test_unreadable_stored_hash_is_500() {
    let (app, repository) = app();
    repository
        .create(NewUser {
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            hashed_password: "not-a-hash".to_string(),
        })
        .await
        .unwrap();

    let (status, body) = send(
        &app,
        "POST",
        "/login",
        Some(json!({ "email": "a@x.com", "password": "p1" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(text(&body), "Login error");

    let (status, body) = send(
        &app,
        "POST",
        "/change-password",
        Some(json!({ "email": "a@x.com", "currentPassword": "p1", "newPassword": "p2" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(text(&body), "Error while changing password");

    let stored = repository.get_by_email("a@x.com").await.unwrap().unwrap();
    assert_eq!(stored.hashed_password, "not-a-hash");
}

#[tokio::test]
async fn test_register_schema_only_when_enforced() {
    let (lenient, _) = app();
    let (status, _) = register(&lenient, "A", "not-an-email", "p1").await;
    assert_eq!(status, StatusCode::OK);

    let (strict, repository) = app_with(UsersConfig {
        enforce_schema: true,
    });
    let (status, body) = register(&strict, "A", "not-an-email", "p1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json_of(&body)["error"].is_string());
    assert!(repository.list().await.unwrap().is_empty());

    let (status, _) = register(&strict, "Ann", "a@x.com", "p1").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_change_password_flow() {
    let (app, repository) = app();
    register(&app, "Ann", "a@x.com", "p1").await;
    let before = repository.get_by_email("a@x.com").await.unwrap().unwrap();

    let (status, body) = send(
        &app,
        "POST",
        "/change-password",
        Some(json!({ "email": "a@x.com", "currentPassword": "wrong", "newPassword": "p2" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(text(&body), "Invalid current password!");

    let unchanged = repository.get_by_email("a@x.com").await.unwrap().unwrap();
    assert_eq!(unchanged.hashed_password, before.hashed_password);

    let (status, body) = send(
        &app,
        "POST",
        "/change-password",
        Some(json!({ "email": "a@x.com", "currentPassword": "p1", "newPassword": "p2" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text(&body), "Password changed successfully");

    let (status, _) = send(
        &app,
        "POST",
        "/login",
        Some(json!({ "email": "a@x.com", "password": "p2" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_change_password_unknown_email() {
    let (app, _) = app();

    let (status, body) = send(
        &app,
        "POST",
        "/change-password",
        Some(json!({ "email": "nobody@x.com", "currentPassword": "p1", "newPassword": "p2" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(text(&body), "User not found!");
}

#[tokio::test]
async fn test_get_user_found_and_cached() {
    let (app, repository) = app();
    register(&app, "Ann", "a@x.com", "p1").await;

    let (status, first) = send(&app, "GET", "/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let user = json_of(&first);
    assert_eq!(user["id"], 1);
    assert_eq!(user["name"], "Ann");
    assert_eq!(user["email"], "a@x.com");

    // Change the record behind the cache's back
    repository
        .update_profile(
            1,
            UpdateUser {
                name: Some("Annie".to_string()),
                email: None,
            },
        )
        .await
        .unwrap();

    let (status, second) = send(&app, "GET", "/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_deleted_user_still_served_from_cache() {
    let (app, _) = app();
    register(&app, "Ann", "a@x.com", "p1").await;

    let (status, _) = send(&app, "GET", "/users/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "DELETE", "/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body), json!({ "message": "User deleted" }));

    // The cache is not invalidated on delete
    let (status, body) = send(&app, "GET", "/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body)["name"], "Ann");
}

#[tokio::test]
async fn test_get_missing_user_is_404() {
    let (app, _) = app();

    for _ in 0..2 {
        let (status, body) = send(&app, "GET", "/users/42", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json_of(&body), json!({ "message": "User not found" }));
    }
}

#[tokio::test]
async fn test_malformed_id_is_400() {
    let (app, _) = app();

    for method in ["GET", "DELETE"] {
        let (status, body) = send(&app, method, "/users/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json_of(&body)["error"].is_string());
    }

    let (status, _) = send(&app, "PUT", "/users/abc", Some(json!({ "name": "X" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_ignores_pagination() {
    let (app, _) = app();
    register(&app, "Ann", "a@x.com", "p1").await;
    register(&app, "Bob", "b@x.com", "p1").await;

    let (status, page_one) = send(&app, "GET", "/users?page=1&limit=1", None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, page_two) = send(&app, "GET", "/users?page=2&limit=1", None).await;

    assert_eq!(page_one, page_two);
    assert_eq!(json_of(&page_one).as_array().unwrap().len(), 2);

    let (status, _) = send(&app, "GET", "/users?page=abc&limit=-3", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_update_user() {
    let (app, _) = app();
    register(&app, "Ann", "a@x.com", "p1").await;

    let (status, body) = send(
        &app,
        "PUT",
        "/users/1",
        Some(json!({ "name": "Annie", "email": "annie@x.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let user = json_of(&body);
    assert_eq!(user["name"], "Annie");
    assert_eq!(user["email"], "annie@x.com");
    assert!(user.get("hashed_password").is_none());
}

#[tokio::test]
async fn test_update_and_delete_missing_user_are_400() {
    let (app, _) = app();

    let (status, body) = send(&app, "PUT", "/users/7", Some(json!({ "name": "X" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json_of(&body)["error"], "Record to update not found.");

    let (status, body) = send(&app, "DELETE", "/users/7", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json_of(&body)["error"], "Record to delete does not exist.");
}
