use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;

use crate::modules::items::core::item::{ItemId, ItemsChanged};
use crate::shared::http::error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateItemParams {
    pub item_id: ItemId,
    pub name: String,
}

pub async fn handle(
    State(state): State<AppState>,
    query: Result<Query<CreateItemParams>, QueryRejection>,
) -> Result<Json<ItemsChanged>, ApiError> {
    let Query(params) = query?;
    let db = state.items.insert(params.item_id, params.name).await?;
    tracing::info!(item_id = params.item_id, "item added");
    Ok(Json(ItemsChanged::added(db)))
}

#[cfg(test)]
mod create_item_http_inbound_tests {
    use axum::{Router, http::Method, http::StatusCode, routing::post};
    use serde_json::json;
    use std::sync::Arc;

    use super::handle;
    use crate::modules::items::adapters::outbound::item_store_in_memory::InMemoryItemStore;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::http::{empty_request, send};
    use crate::tests::fixtures::state::make_test_state;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/items/", post(handle))
            .with_state(state)
    }

    #[tokio::test]
    async fn it_should_add_the_item_and_return_the_db() {
        let state = make_test_state();

        let response = send(
            app(state.clone()),
            empty_request(Method::POST, "/items/?item_id=1&name=cup"),
        )
        .await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.json, json!({"msg": "Item added", "db": {"1": "cup"}}));
        assert_eq!(state.items.get(1).await.unwrap(), "cup");
    }

    #[tokio::test]
    async fn it_should_return_400_when_the_id_already_exists() {
        let state = make_test_state();
        state.items.insert(1, "cup".into()).await.unwrap();

        let response = send(
            app(state.clone()),
            empty_request(Method::POST, "/items/?item_id=1&name=mug"),
        )
        .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.json, json!({"detail": "Item already exists"}));
        assert_eq!(state.items.get(1).await.unwrap(), "cup");
    }

    #[tokio::test]
    async fn it_should_return_422_when_name_is_missing() {
        let response = send(
            app(make_test_state()),
            empty_request(Method::POST, "/items/?item_id=1"),
        )
        .await;

        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_store_is_offline() {
        let mut store = InMemoryItemStore::new();
        store.toggle_offline();
        let state = make_test_state().with_item_store(Arc::new(store));

        let response = send(
            app(state),
            empty_request(Method::POST, "/items/?item_id=1&name=cup"),
        )
        .await;

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
