use utoipa::OpenApi;

/// Aggregated OpenAPI document for the inventory API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventory API",
        description = "Product inventory management service"
    ),
    nest(
        (path = "/products", api = domain_products::ApiDoc)
    )
)]
pub struct ApiDoc;
