use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use serde::Serialize;

use crate::shared::http::error::ApiError;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct HashPasswordResponse {
    pub original_password: String,
    pub hashed_password: String,
}

pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<HashPasswordResponse>, ApiError> {
    let Path(original_password) = path?;

    // Argon2 is CPU and memory bound; keep it off the async workers.
    let hasher = state.password_hasher.clone();
    let plain = original_password.clone();
    let hashed_password = tokio::task::spawn_blocking(move || hasher.hash(&plain))
        .await
        .map_err(|e| ApiError::Internal(format!("hashing task failed: {e}")))??;

    Ok(Json(HashPasswordResponse {
        original_password,
        hashed_password,
    }))
}
