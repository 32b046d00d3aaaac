//! HTTP handlers for the Products API

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use axum_helpers::{
    AppError, IdPath, ValidatedJson,
    errors::{
        messages,
        responses::{
            BadRequestIdResponse, BadRequestValidationResponse, OperationFailedResponse,
        },
    },
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi};

use crate::models::{Product, ProductData, UpdatePolicy};
use crate::service::ProductApplicationService;

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        update_product,
        get_product,
        delete_product,
    ),
    components(
        schemas(Product, ProductData, UpdatePolicy),
        responses(
            BadRequestValidationResponse,
            BadRequestIdResponse,
            OperationFailedResponse
        )
    ),
    tags(
        (name = "Products", description = "Catalog product endpoints")
    )
)]
pub struct ApiDoc;

/// Router state: the injected service plus the edit-scope policy.
pub struct ProductsState<S> {
    service: Arc<S>,
    update_policy: UpdatePolicy,
}

impl<S> Clone for ProductsState<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            update_policy: self.update_policy,
        }
    }
}

/// Create the products router with all HTTP endpoints
pub fn router<S: ProductApplicationService + 'static>(
    service: S,
    update_policy: UpdatePolicy,
) -> Router {
    let state = ProductsState {
        service: Arc::new(service),
        update_policy,
    };

    Router::new()
        .route(
            "/",
            get(list_products).post(create_product).put(update_product),
        )
        .route("/{id}", get(get_product).delete(delete_product))
        .with_state(state)
}

/// Identifier of the entity to edit, supplied outside the body
#[derive(Debug, Deserialize, IntoParams)]
pub struct UpdateQuery {
    pub id: i32,
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "All products", body = Vec<Product>),
        (status = 400, response = OperationFailedResponse)
    )
)]
async fn list_products<S: ProductApplicationService>(
    State(state): State<ProductsState<S>>,
) -> Result<Json<Vec<Product>>, AppError> {
    match state.service.find_all().await {
        Some(products) => Ok(Json(products)),
        None => Err(AppError::BadRequest(messages::FETCH_FAILED.to_string())),
    }
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product identifier")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestIdResponse)
    )
)]
async fn get_product<S: ProductApplicationService>(
    State(state): State<ProductsState<S>>,
    IdPath(id): IdPath,
) -> Result<Json<Product>, AppError> {
    match state.service.find_by_id(id).await {
        Some(product) => Ok(Json(product)),
        None => Err(AppError::BadRequest(messages::FETCH_FAILED.to_string())),
    }
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductData,
    responses(
        (status = 200, description = "Product created", body = Product),
        (status = 400, response = BadRequestValidationResponse)
    )
)]
async fn create_product<S: ProductApplicationService>(
    State(state): State<ProductsState<S>>,
    ValidatedJson(input): ValidatedJson<ProductData>,
) -> Result<Json<Product>, AppError> {
    let product = Product::from_data(input);

    match state.service.save(product).await {
        Some(saved) => Ok(Json(saved)),
        None => Err(AppError::BadRequest(messages::SAVE_FAILED.to_string())),
    }
}

/// Edit an existing product.
///
/// The fields taken from the payload depend on the router's
/// [`UpdatePolicy`]; see `models::UpdatePolicy`.
#[utoipa::path(
    put,
    path = "",
    tag = "Products",
    params(UpdateQuery),
    request_body = ProductData,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, response = BadRequestValidationResponse)
    )
)]
async fn update_product<S: ProductApplicationService>(
    State(state): State<ProductsState<S>>,
    Query(query): Query<UpdateQuery>,
    ValidatedJson(input): ValidatedJson<ProductData>,
) -> Result<Json<Product>, AppError> {
    let product = match state.update_policy {
        UpdatePolicy::NameDescription => Product::from_edit_data(query.id, input),
        UpdatePolicy::AllFields => Product::from_data_with_id(query.id, input),
    };

    match state.service.edit(product).await {
        Some(updated) => Ok(Json(updated)),
        None => Err(AppError::BadRequest(messages::EDIT_FAILED.to_string())),
    }
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product identifier")
    ),
    responses(
        (status = 200, description = "Deleted product", body = Product),
        (status = 400, response = BadRequestIdResponse)
    )
)]
async fn delete_product<S: ProductApplicationService>(
    State(state): State<ProductsState<S>>,
    IdPath(id): IdPath,
) -> Result<Json<Product>, AppError> {
    match state.service.remove(id).await {
        Some(deleted) => Ok(Json(deleted)),
        None => Err(AppError::BadRequest(messages::DELETE_FAILED.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::MockProductApplicationService;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn body_json(body: Body) -> Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    // A mock with no expectations panics on any call, so these tests also
    // assert the service is never reached.
    #[tokio::test]
    async fn test_create_with_invalid_payload_never_calls_service() {
        let mock = MockProductApplicationService::new();
        let app = router(mock, UpdatePolicy::default());

        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name":"Boots","quantity":-4}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response.into_body()).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert!(body["details"]["quantity"].is_array());
    }

    #[tokio::test]
    async fn test_update_with_missing_name_never_calls_service() {
        let mock = MockProductApplicationService::new();
        let app = router(mock, UpdatePolicy::default());

        let request = Request::builder()
            .method("PUT")
            .uri("/?id=5")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"description":"no name"}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response.into_body()).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert!(body["details"]["name"].is_array());
    }

    #[tokio::test]
    async fn test_legacy_policy_sends_partial_rebuild_to_service() {
        let mut mock = MockProductApplicationService::new();
        mock.expect_edit()
            .withf(|product| product.id == 5 && product.quantity == 0 && product.category_id == 0)
            .returning(|product| Some(product));
        let app = router(mock, UpdatePolicy::NameDescription);

        let request = Request::builder()
            .method("PUT")
            .uri("/?id=5")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"name":"Boots","description":"Hiking","quantity":9,"category_id":4}"#,
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_all_fields_policy_sends_full_payload_to_service() {
        let mut mock = MockProductApplicationService::new();
        mock.expect_edit()
            .withf(|product| product.id == 5 && product.quantity == 9 && product.category_id == 4)
            .returning(|product| Some(product));
        let app = router(mock, UpdatePolicy::AllFields);

        let request = Request::builder()
            .method("PUT")
            .uri("/?id=5")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"name":"Boots","description":"Hiking","quantity":9,"category_id":4}"#,
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_delete_failure_collapses_to_generic_message() {
        let mut mock = MockProductApplicationService::new();
        mock.expect_remove().returning(|_| None);
        let app = router(mock, UpdatePolicy::default());

        let request = Request::builder()
            .method("DELETE")
            .uri("/7")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response.into_body()).await;
        assert_eq!(body["error"], "OPERATION_FAILED");
        assert_eq!(body["message"], "Could not delete the data");
    }
}
