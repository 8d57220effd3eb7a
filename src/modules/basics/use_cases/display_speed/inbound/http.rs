use axum::{
    Json,
    extract::{Path, rejection::PathRejection},
};
use serde::Serialize;

use crate::shared::http::error::ApiError;

#[derive(Serialize)]
pub struct DisplaySpeedResponse {
    pub speed: i64,
    pub info: String,
}

pub async fn handle(
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DisplaySpeedResponse>, ApiError> {
    let Path(speed) = path?;
    Ok(Json(DisplaySpeedResponse {
        speed,
        info: format!("Your speed is {speed}"),
    }))
}
