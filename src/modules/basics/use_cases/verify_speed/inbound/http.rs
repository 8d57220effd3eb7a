use axum::{
    Json,
    extract::{Path, rejection::PathRejection},
};
use serde::Serialize;

use crate::shared::http::error::ApiError;

pub const EXPECTED_SPEED: i64 = 100;

#[derive(Serialize)]
pub struct VerifySpeedResponse {
    pub status: &'static str,
    pub speed: i64,
}

pub async fn handle(
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<VerifySpeedResponse>, ApiError> {
    let Path(speed) = path?;
    if speed != EXPECTED_SPEED {
        return Err(ApiError::NotFound("Speed does not match".into()));
    }
    Ok(Json(VerifySpeedResponse {
        status: "success",
        speed,
    }))
}
