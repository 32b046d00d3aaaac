use axum::Router;
use domain_categories::handlers;

pub fn router(state: &crate::state::AppState) -> Router {
    handlers::router(state.categories.clone())
}
