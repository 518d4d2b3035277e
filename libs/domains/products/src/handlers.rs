use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use axum_helpers::{AppError, ErrorResponse};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductError;
use crate::models::{Product, ProductInput, ProductOrder, StockQuery};
use crate::repository::ProductRepository;
use crate::service::ProductService;

const TAG: &str = "products";

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        list_products_by_price,
        get_product,
        check_stock,
        create_product,
        update_product,
        delete_product,
    ),
    components(schemas(Product, ProductInput, ErrorResponse)),
    tags(
        (name = TAG, description = "Inventory management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the product router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/sortByPrice", get(list_products_by_price))
        .route("/checkStock/{id}", get(check_stock))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared_service)
}

/// List all products, sorted ascending by name
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "Products sorted by name", body = Vec<Product>),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = service.list_products(ProductOrder::Name).await?;
    Ok(Json(products))
}

/// List all products, sorted ascending by price
#[utoipa::path(
    get,
    path = "/sortByPrice",
    tag = TAG,
    responses(
        (status = 200, description = "Products sorted by price", body = Vec<Product>),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
async fn list_products_by_price<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = service.list_products(ProductOrder::Price).await?;
    Ok(Json(products))
}

/// Get a product by ID
///
/// An unknown id is not an error: the response is 200 with an empty body.
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found, or empty body when absent", body = Product),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    match service.get_product(id).await? {
        Some(product) => Ok(Json(product).into_response()),
        None => Ok(StatusCode::OK.into_response()),
    }
}

/// Check whether a product is stocked above a threshold
///
/// Returns the product when its quantity is strictly above `count`;
/// otherwise 200 with an empty body. An absent `count` matches nothing,
/// so the body is always empty.
#[utoipa::path(
    get,
    path = "/checkStock/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Product ID"),
        StockQuery
    ),
    responses(
        (status = 200, description = "Product in stock, or empty body otherwise", body = Product),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
async fn check_stock<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i64>,
    Query(query): Query<StockQuery>,
) -> Result<Response, AppError> {
    match service.check_stock(id, query.count).await? {
        Some(product) => Ok(Json(product).into_response()),
        None => Ok(StatusCode::OK.into_response()),
    }
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 422, description = "Id was set on the request", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let input = decode_body(&body)?.ok_or(ProductError::IdSetOnRequest)?;
    let product = service.create_product(input).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// Update a product
///
/// Overwrites all mutable fields with the request's values, nulls included.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product updated successfully", body = Product),
        (status = 404, description = "Unknown product id", body = ErrorResponse),
        (status = 422, description = "Name was not set on the request", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i64>,
    body: Bytes,
) -> Result<Json<Product>, AppError> {
    let input = decode_body(&body)?.ok_or(ProductError::NameNotSet)?;
    let product = service.update_product(id, input).await?;

    Ok(Json(product))
}

/// Decode a request body, resolving an empty body to `None`.
///
/// The wire contract treats an absent entity like one that fails the
/// endpoint's null checks, so callers map `None` onto their own
/// validation error instead of a generic 400. Malformed JSON still
/// surfaces as the extractor rejection.
fn decode_body(body: &Bytes) -> Result<Option<ProductInput>, AppError> {
    if body.is_empty() {
        return Ok(None);
    }

    let Json(input) = Json::<ProductInput>::from_bytes(body)?;
    Ok(Some(input))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 404, description = "Unknown product id", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    service.delete_product(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
