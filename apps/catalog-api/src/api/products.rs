use axum::Router;
use domain_products::handlers;

pub fn router(state: &crate::state::AppState) -> Router {
    handlers::router(
        state.products.clone(),
        state.config.product_update_policy,
    )
}
