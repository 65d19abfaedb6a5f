/// Registration and login routes
///
/// Refusals (duplicate username, wrong password) answer 200 with
/// `success:false` and the exact legacy message strings; clients key off
/// the body, not the status.
use crate::{api::ApiResponse, error::Result, state::AppState};
use axum::{extract::State, Json};
use pindrop_store::StoreError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

/// POST /api/register
pub async fn register(
    State(app_state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<ApiResponse>> {
    match app_state.users.register(&req.username, &req.password).await {
        Ok(()) => Ok(Json(ApiResponse::ok("Registration successful!"))),
        Err(StoreError::DuplicateUser(_)) => {
            Ok(Json(ApiResponse::rejected("Username already exists.")))
        }
        Err(e) => Err(e.into()),
    }
}

/// POST /api/login
pub async fn login(
    State(app_state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<ApiResponse>> {
    match app_state
        .users
        .authenticate(&req.username, &req.password)
        .await
    {
        Ok(()) => Ok(Json(ApiResponse::ok("Login successful!"))),
        Err(StoreError::UserNotFound(_)) => Ok(Json(ApiResponse::rejected("User not found."))),
        Err(StoreError::BadCredentials) => Ok(Json(ApiResponse::rejected("Incorrect password."))),
        Err(e) => Err(e.into()),
    }
}
