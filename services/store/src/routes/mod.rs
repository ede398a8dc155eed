//! HTTP routes for the storefront service
//!
//! Every endpoint responds with the `{message, data?, token?}` envelope;
//! error responses carry only `message` and get their status from
//! [`StoreError`](crate::error::StoreError).

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use serde::Serialize;
use serde_json::json;

use crate::state::AppState;

pub mod orders;
pub mod products;
pub mod users;

/// Response envelope shared by all endpoints
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Read/create success carrying a payload
    pub fn data(message: &str, data: T) -> Self {
        Self {
            message: message.to_string(),
            data: Some(data),
            token: None,
        }
    }

    /// Success carrying a payload and a freshly minted token
    pub fn data_with_token(message: &str, data: T, token: String) -> Self {
        Self {
            message: message.to_string(),
            data: Some(data),
            token: Some(token),
        }
    }
}

impl ApiResponse<()> {
    /// Success carrying only a token, e.g. login
    pub fn token_only(message: &str, token: String) -> Self {
        Self {
            message: message.to_string(),
            data: None,
            token: Some(token),
        }
    }
}

/// Create the router for the storefront service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/users", users::router(&state))
        .nest("/api/products", products::router(&state))
        .nest("/api/orders", orders::router(&state))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database_up = common::database::health_check(&state.pool)
        .await
        .unwrap_or(false);

    Json(json!({
        "status": if database_up { "ok" } else { "degraded" },
        "service": "store",
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_omits_absent_fields() {
        let response = ApiResponse::data("Products retrieved successfully", vec![1, 2]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["message"], "Products retrieved successfully");
        assert_eq!(json["data"], serde_json::json!([1, 2]));
        assert!(json.get("token").is_none());

        let response = ApiResponse::token_only("Login successful", "jwt".to_string());
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("data").is_none());
        assert_eq!(json["token"], "jwt");
    }
}
