//! HTTP handlers for the Categories API

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

use crate::models::{Category, CategoryData};
use crate::service::CategoryApplicationService;

/// OpenAPI documentation for the Categories API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_categories,
        create_category,
        update_category,
        get_category,
        delete_category,
    ),
    components(
        schemas(Category, CategoryData),
        responses(
            BadRequestValidationResponse,
            BadRequestIdResponse,
            OperationFailedResponse
        )
    ),
    tags(
        (name = "Categories", description = "Catalog category endpoints")
    )
)]
pub struct ApiDoc;

/// Create the categories router with all HTTP endpoints
pub fn router<S: CategoryApplicationService + 'static>(service: S) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/",
            get(list_categories)
                .post(create_category)
                .put(update_category),
        )
        .route("/{id}", get(get_category).delete(delete_category))
        .with_state(shared_service)
}

/// Identifier of the entity to edit, supplied outside the body
#[derive(Debug, Deserialize, IntoParams)]
pub struct UpdateQuery {
    pub id: i32,
}

/// List all categories
#[utoipa::path(
    get,
    path = "",
    tag = "Categories",
    responses(
        (status = 200, description = "All categories", body = Vec<Category>),
        (status = 400, response = OperationFailedResponse)
    )
)]
async fn list_categories<S: CategoryApplicationService>(
    State(service): State<Arc<S>>,
) -> Result<Json<Vec<Category>>, AppError> {
    match service.find_all().await {
        Some(categories) => Ok(Json(categories)),
        None => Err(AppError::BadRequest(messages::FETCH_FAILED.to_string())),
    }
}

/// Get a category by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Categories",
    params(
        ("id" = i32, Path, description = "Category identifier")
    ),
    responses(
        (status = 200, description = "Category found", body = Category),
        (status = 400, response = BadRequestIdResponse)
    )
)]
async fn get_category<S: CategoryApplicationService>(
    State(service): State<Arc<S>>,
    IdPath(id): IdPath,
) -> Result<Json<Category>, AppError> {
    match service.find_by_id(id).await {
        Some(category) => Ok(Json(category)),
        None => Err(AppError::BadRequest(messages::FETCH_FAILED.to_string())),
    }
}

/// Create a new category
#[utoipa::path(
    post,
    path = "",
    tag = "Categories",
    request_body = CategoryData,
    responses(
        (status = 200, description = "Category created", body = Category),
        (status = 400, response = BadRequestValidationResponse)
    )
)]
async fn create_category<S: CategoryApplicationService>(
    State(service): State<Arc<S>>,
    ValidatedJson(input): ValidatedJson<CategoryData>,
) -> Result<Json<Category>, AppError> {
    let category = Category::from_data(input);

    match service.save(category).await {
        Some(saved) => Ok(Json(saved)),
        None => Err(AppError::BadRequest(messages::SAVE_FAILED.to_string())),
    }
}

/// Edit an existing category
#[utoipa::path(
    put,
    path = "",
    tag = "Categories",
    params(UpdateQuery),
    request_body = CategoryData,
    responses(
        (status = 200, description = "Category updated", body = Category),
        (status = 400, response = BadRequestValidationResponse)
    )
)]
async fn update_category<S: CategoryApplicationService>(
    State(service): State<Arc<S>>,
    Query(query): Query<UpdateQuery>,
    ValidatedJson(input): ValidatedJson<CategoryData>,
) -> Result<Json<Category>, AppError> {
    let category = Category::from_data_with_id(query.id, input);

    match service.edit(category).await {
        Some(updated) => Ok(Json(updated)),
        None => Err(AppError::BadRequest(messages::EDIT_FAILED.to_string())),
    }
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Categories",
    params(
        ("id" = i32, Path, description = "Category identifier")
    ),
    responses(
        (status = 200, description = "Deleted category", body = Category),
        (status = 400, response = BadRequestIdResponse)
    )
)]
async fn delete_category<S: CategoryApplicationService>(
    State(service): State<Arc<S>>,
    IdPath(id): IdPath,
) -> Result<Json<Category>, AppError> {
    match service.remove(id).await {
        Some(deleted) => Ok(Json(deleted)),
        None => Err(AppError::BadRequest(messages::DELETE_FAILED.to_string())),
    }
}
