use axum::Router;

pub mod categories;
pub mod health;
pub mod products;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by the `create_router` helper.
///
/// Returns a stateless Router; each domain router has its state already
/// applied (only cheap clones of the shared stores remain).
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .nest("/categories", categories::router(state))
        .nest("/products", products::router(state))
}

/// Creates a router with the /ready endpoint that checks the catalog stores.
///
/// This router has state applied and can be merged with the stateless app
/// router from `create_router`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
