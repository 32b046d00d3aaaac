use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "CRUD API for managing catalog categories and products"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/categories", api = domain_categories::handlers::ApiDoc),
        (path = "/products", api = domain_products::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
