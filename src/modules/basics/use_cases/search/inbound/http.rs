use axum::{
    Json,
    extract::{Query, rejection::QueryRejection},
};
use serde::{Deserialize, Serialize};

use crate::shared::http::error::ApiError;

const DEFAULT_LIMIT: i64 = 10;

#[derive(Deserialize)]
pub struct SearchParams {
    pub item: i64,
    pub limit: Option<i64>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub item: i64,
    pub limit: i64,
}

pub async fn handle(
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(params) = query?;
    Ok(Json(SearchResponse {
        item: params.item,
        limit: params.limit.unwrap_or(DEFAULT_LIMIT),
    }))
}
