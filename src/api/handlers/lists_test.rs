//! Integration tests for list API endpoints.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::api::{AppState, routes};
use crate::db::MemoryDatabase;

fn test_app() -> axum::Router {
    routes::create_router(AppState::new(MemoryDatabase::with_demo_data()))
}

async fn json_body(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

// =============================================================================
// GET /lists/
// =============================================================================

#[tokio::test]
async fn list_lists_returns_seeded_lists() {
    let app = test_app();

    let response = app
        .oneshot(Request::builder().uri("/lists/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(
        body,
        json!([{"id": 1, "name": "Trabajo"}, {"id": 2, "name": "Casa"}])
    );
}

#[tokio::test]
async fn list_lists_accepts_path_without_trailing_slash() {
    let app = test_app();

    let response = app
        .oneshot(Request::builder().uri("/lists").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn list_lists_initially_empty_without_seed() {
    let app = routes::create_router(AppState::new(MemoryDatabase::new()));

    let response = app
        .oneshot(Request::builder().uri("/lists/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!([]));
}

// =============================================================================
// POST /lists/
// =============================================================================

#[tokio::test]
async fn create_list_returns_201_with_next_id() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_json("/lists/", json!({"name": "Nueva Lista"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body, json!({"id": 3, "name": "Nueva Lista"}));

    let response = app
        .oneshot(Request::builder().uri("/lists/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let lists = json_body(response).await;
    assert_eq!(lists[2]["name"], "Nueva Lista");
}

#[tokio::test]
async fn create_list_duplicate_name_is_400() {
    let app = test_app();

    let response = app
        .oneshot(post_json("/lists/", json!({"name": "casa"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["detail"], "A list with this name already exists");
}

#[tokio::test]
async fn create_list_blank_name_is_422() {
    let app = test_app();

    let response = app
        .oneshot(post_json("/lists/", json!({"name": "   "})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert!(body["detail"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn create_list_missing_name_is_422() {
    let app = test_app();

    let response = app
        .oneshot(post_json("/lists/", json!({"title": "Wrong field"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json_body(response).await["detail"].is_string());
}

#[tokio::test]
async fn create_list_invalid_json_is_422() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/lists/")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_list_without_content_type_is_422() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/lists")
                .body(Body::from(r#"{"name": "Compras"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
