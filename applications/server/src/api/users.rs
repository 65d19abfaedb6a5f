/// User record routes
use crate::{
    api::ApiResponse,
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};
use pindrop_core::{UserRecord, UserUpdate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct UserEnvelope {
    pub success: bool,
    pub data: UserRecord,
}

/// Fields are optional so a half-formed request reaches the handler and
/// gets the legacy 400 body instead of an extractor rejection
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub updates: Option<UserUpdate>,
}

/// GET /api/getUser/:username
pub async fn get_user(
    Path(username): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<UserEnvelope>> {
    let record = app_state.users.get(&username).await?;
    Ok(Json(UserEnvelope {
        success: true,
        data: record,
    }))
}

/// POST /api/updateUser
///
/// Merge semantics: queue and playlists union by song url, queueIndex
/// overwrites. The record set is rewritten durably before the response.
pub async fn update_user(
    State(app_state): State<AppState>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<ApiResponse>> {
    let (Some(username), Some(updates)) = (req.username, req.updates) else {
        return Err(ServerError::BadRequest("Missing data".to_string()));
    };

    app_state.users.apply_update(&username, &updates).await?;

    Ok(Json(ApiResponse::ok("User data saved")))
}
