//! Order routes: listing, creation, per-user queries, and completion

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
};

use crate::error::StoreError;
use crate::middleware::auth_middleware;
use crate::models::OrderPayload;
use crate::state::AppState;
use crate::validation;

use super::ApiResponse;

/// Create the order router; everything except the full listing sits behind
/// the access gate
pub fn router(state: &AppState) -> Router<AppState> {
    let gate = middleware::from_fn_with_state(state.clone(), auth_middleware);

    let protected = Router::new()
        .route("/:id", put(complete_order))
        .route("/user/:user_id", get(orders_by_user))
        .route("/user/:user_id/completed", get(completed_orders_by_user))
        .route_layer(gate.clone());

    Router::new()
        .route("/", post(create_order).route_layer(gate).get(list_orders))
        .merge(protected)
}

/// Get all orders
pub async fn list_orders(State(state): State<AppState>) -> Result<impl IntoResponse, StoreError> {
    let orders = state.orders.list().await?;
    Ok(Json(ApiResponse::data(
        "Orders retrieved successfully",
        orders,
    )))
}

/// Create a new order linked to its product
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<OrderPayload>,
) -> Result<impl IntoResponse, StoreError> {
    let new_order = validation::validate_new_order(payload).map_err(StoreError::InvalidInput)?;
    let order = state.orders.create(&new_order).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data("Order created successfully", order)),
    ))
}

/// Get all orders for a user
pub async fn orders_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, StoreError> {
    let orders = state.orders.find_by_user(user_id).await?;
    Ok(Json(ApiResponse::data(
        "Orders for user retrieved successfully",
        orders,
    )))
}

/// Get a user's completed orders
pub async fn completed_orders_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, StoreError> {
    let orders = state.orders.find_completed_by_user(user_id).await?;
    Ok(Json(ApiResponse::data(
        "Completed orders for user retrieved successfully",
        orders,
    )))
}

/// Transition an order to `complete`
pub async fn complete_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, StoreError> {
    let order = state.orders.complete(id).await?;
    Ok(Json(ApiResponse::data(
        "Order status updated to complete",
        order,
    )))
}
