use axum::{
    Json,
    extract::{Path, Query, State, rejection::PathRejection, rejection::QueryRejection},
};
use serde::Deserialize;

use crate::modules::items::core::item::{ItemId, ItemsChanged};
use crate::shared::http::error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateItemParams {
    pub name: String,
}

pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<ItemId>, PathRejection>,
    query: Result<Query<UpdateItemParams>, QueryRejection>,
) -> Result<Json<ItemsChanged>, ApiError> {
    let Path(item_id) = path?;
    let Query(params) = query?;
    let db = state.items.update(item_id, params.name).await?;
    tracing::info!(item_id, "item updated");
    Ok(Json(ItemsChanged::updated(db)))
}
