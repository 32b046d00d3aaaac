//! Application-specific readiness checks over the catalog stores.

use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use domain_categories::CategoryApplicationService;
use domain_products::ProductApplicationService;

/// Readiness check endpoint.
///
/// Uses the generic `run_health_checks` utility from axum-helpers to
/// verify both catalog stores answer.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![
        (
            "categories",
            Box::pin(async {
                state
                    .categories
                    .find_all()
                    .await
                    .map(|_| ())
                    .ok_or_else(|| "category store unavailable".to_string())
            }),
        ),
        (
            "products",
            Box::pin(async {
                state
                    .products
                    .find_all()
                    .await
                    .map(|_| ())
                    .ok_or_else(|| "product store unavailable".to_string())
            }),
        ),
    ];

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}
