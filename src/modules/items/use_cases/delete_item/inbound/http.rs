use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::modules::items::core::item::{ItemId, ItemsChanged};
use crate::shared::http::error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<ItemId>, PathRejection>,
) -> Result<Json<ItemsChanged>, ApiError> {
    let Path(item_id) = path?;
    let db = state.items.remove(item_id).await?;
    tracing::info!(item_id, "item deleted");
    Ok(Json(ItemsChanged::deleted(db)))
}
