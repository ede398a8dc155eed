//! User routes: listing, lookup, registration, and login

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
use crate::models::{LoginPayload, User, UserPayload};
use crate::state::AppState;
use crate::validation;

use super::ApiResponse;

/// Create the user router; listing, lookup, and admin create sit behind
/// the access gate, sign-up and login are open
pub fn router(state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/signup", post(sign_up))
        .route("/authenticate", post(authenticate))
        .merge(protected)
}

/// Get all users
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, StoreError> {
    let users = state.users.list().await?;
    Ok(Json(ApiResponse::data(
        "User list retrieved successfully",
        users,
    )))
}

/// Get a user by id, together with a fresh token for that identity
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, StoreError> {
    let (user, token) = state.users.find_by_id(id).await?;
    Ok(Json(ApiResponse::data_with_token(
        "User info retrieved successfully",
        user,
        token,
    )))
}

/// Register a new user
pub async fn sign_up(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<impl IntoResponse, StoreError> {
    let (user, token) = register(&state, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data_with_token(
            "User registered successfully",
            user,
            token,
        )),
    ))
}

/// Create a user on behalf of an authenticated caller
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<impl IntoResponse, StoreError> {
    let (user, token) = register(&state, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data_with_token(
            "User created successfully",
            user,
            token,
        )),
    ))
}

/// Verify credentials and return a bearer token
pub async fn authenticate(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse, StoreError> {
    let credentials =
        validation::validate_credentials(payload).map_err(StoreError::InvalidInput)?;
    let token = state
        .users
        .authenticate(&credentials.user_name, &credentials.password)
        .await?;
    Ok(Json(ApiResponse::token_only("Login successful", token)))
}

async fn register(state: &AppState, payload: UserPayload) -> Result<(User, String), StoreError> {
    let new_user = validation::validate_new_user(payload).map_err(StoreError::InvalidInput)?;
    state.users.register(&new_user).await
}
