//! Product routes: catalog browsing and creation

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};

use crate::error::StoreError;
use crate::middleware::auth_middleware;
use crate::models::ProductPayload;
use crate::state::AppState;
use crate::validation;

use super::ApiResponse;

/// Create the product router; browsing is open, creation sits behind the
/// access gate
pub fn router(state: &AppState) -> Router<AppState> {
    let gate = middleware::from_fn_with_state(state.clone(), auth_middleware);

    Router::new()
        .route("/", post(create_product).route_layer(gate).get(list_products))
        .route("/:id", get(get_product))
        .route("/category/:category", get(products_by_category))
}

/// Get all products
pub async fn list_products(State(state): State<AppState>) -> Result<impl IntoResponse, StoreError> {
    let products = state.products.list().await?;
    Ok(Json(ApiResponse::data(
        "Products retrieved successfully",
        products,
    )))
}

/// Get a product by id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, StoreError> {
    let product = state.products.find_by_id(id).await?;
    Ok(Json(ApiResponse::data(
        "Product retrieved successfully",
        product,
    )))
}

/// Create a new product
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<impl IntoResponse, StoreError> {
    let new_product =
        validation::validate_new_product(payload).map_err(StoreError::InvalidInput)?;
    let product = state.products.create(&new_product).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data("Product created successfully", product)),
    ))
}

/// Get products whose category matches a case-insensitive substring
pub async fn products_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<impl IntoResponse, StoreError> {
    let products = state.products.find_by_category(&category).await?;
    Ok(Json(ApiResponse::data(
        "Products by category retrieved successfully",
        products,
    )))
}
