use axum::{Json, extract::rejection::JsonRejection};

use crate::modules::items::core::item::Item;
use crate::shared::http::error::ApiError;

/// Response-model endpoint: the validated body is the response.
pub async fn handle(body: Result<Json<Item>, JsonRejection>) -> Result<Json<Item>, ApiError> {
    let Json(item) = body?;
    Ok(Json(item))
}
