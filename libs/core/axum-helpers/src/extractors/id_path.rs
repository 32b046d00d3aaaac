//! Integer id path parameter extractor with automatic validation.

use crate::errors::{ErrorCode, error_response};
use axum::{
    extract::{FromRequestParts, Path},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};

/// Extractor for integer identifier path parameters.
///
/// Parses the `{id}` path segment as a positive integer and returns a
/// structured 400 response otherwise.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_category(IdPath(id): IdPath) -> String {
///     format!("Category ID: {}", id)
/// }
///
/// let app = Router::new().route("/categories/{id}", get(get_category));
/// ```
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match raw.parse::<i32>() {
            Ok(id) if id > 0 => Ok(IdPath(id)),
            _ => Err(error_response(
                StatusCode::BAD_REQUEST,
                format!("Invalid identifier: {}", raw),
                ErrorCode::InvalidId,
            )),
        }
    }
}
