//! Handler tests for the Categories domain
//!
//! These tests exercise the HTTP layer over the in-memory application
//! service: request deserialization, response serialization, status
//! codes, and error responses.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_categories::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

// Helper to parse a JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&payload).unwrap()))
        .unwrap()
}

fn put_json(uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&payload).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_create_category_returns_200_with_assigned_id() {
    let app = handlers::router(InMemoryCategoryService::new());

    let request = post_json("/", json!({"name": "Shoes", "description": "Running shoes"}));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let category: Category = json_body(response.into_body()).await;
    assert_eq!(category.id, 1);
    assert_eq!(category.name, "Shoes");
    assert_eq!(category.description, "Running shoes");
}

#[tokio::test]
async fn test_create_then_get_returns_equal_fields() {
    let service = InMemoryCategoryService::new();
    let app = handlers::router(service);

    let request = post_json("/", json!({"name": "Books", "description": "Paperbacks"}));
    let response = app.clone().oneshot(request).await.unwrap();
    let created: Category = json_body(response.into_body()).await;

    let request = Request::builder()
        .method("GET")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Category = json_body(response.into_body()).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_category_validates_name() {
    let app = handlers::router(InMemoryCategoryService::new());

    let request = post_json("/", json!({"name": "", "description": "Empty name"}));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["name"].is_array());
}

#[tokio::test]
async fn test_get_category_returns_400_for_missing() {
    let app = handlers::router(InMemoryCategoryService::new());

    let request = Request::builder()
        .method("GET")
        .uri("/999")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "OPERATION_FAILED");
    assert_eq!(body["message"], "Could not fetch the data");
}

#[tokio::test]
async fn test_get_category_rejects_non_positive_id() {
    let app = handlers::router(InMemoryCategoryService::new());

    for bad in ["abc", "0", "-3"] {
        let request = Request::builder()
            .method("GET")
            .uri(format!("/{}", bad))
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = json_body(response.into_body()).await;
        assert_eq!(body["error"], "INVALID_ID");
    }
}

#[tokio::test]
async fn test_list_categories_empty_collection() {
    let app = handlers::router(InMemoryCategoryService::new());

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let categories: Vec<Category> = json_body(response.into_body()).await;
    assert!(categories.is_empty());
}

#[tokio::test]
async fn test_list_categories_returns_all_sorted() {
    let app = handlers::router(InMemoryCategoryService::new());

    for name in ["Shoes", "Books"] {
        let request = post_json("/", json!({"name": name, "description": ""}));
        app.clone().oneshot(request).await.unwrap();
    }

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let categories: Vec<Category> = json_body(response.into_body()).await;
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].id, 1);
    assert_eq!(categories[1].id, 2);
}

#[tokio::test]
async fn test_update_category_applies_id_from_query() {
    let app = handlers::router(InMemoryCategoryService::new());

    let request = post_json("/", json!({"name": "Old", "description": "Before"}));
    app.clone().oneshot(request).await.unwrap();

    let request = put_json("/?id=1", json!({"name": "New", "description": "After"}));
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated: Category = json_body(response.into_body()).await;
    assert_eq!(updated.id, 1);
    assert_eq!(updated.name, "New");

    let request = Request::builder()
        .method("GET")
        .uri("/1")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let fetched: Category = json_body(response.into_body()).await;
    assert_eq!(fetched.name, "New");
}

#[tokio::test]
async fn test_update_category_returns_400_for_missing() {
    let app = handlers::router(InMemoryCategoryService::new());

    let request = put_json("/?id=42", json!({"name": "Ghost", "description": ""}));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Could not edit the data");
}

#[tokio::test]
async fn test_update_category_requires_id_query() {
    let app = handlers::router(InMemoryCategoryService::new());

    let request = put_json("/", json!({"name": "NoId", "description": ""}));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_category_returns_deleted_entity() {
    let app = handlers::router(InMemoryCategoryService::new());

    let request = post_json("/", json!({"name": "Transient", "description": ""}));
    app.clone().oneshot(request).await.unwrap();

    let request = Request::builder()
        .method("DELETE")
        .uri("/1")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let deleted: Category = json_body(response.into_body()).await;
    assert_eq!(deleted.id, 1);
    assert_eq!(deleted.name, "Transient");

    // A second delete hits the generic failure path
    let request = Request::builder()
        .method("DELETE")
        .uri("/1")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Could not delete the data");
}
