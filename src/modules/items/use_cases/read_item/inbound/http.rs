use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::modules::items::core::item::{ItemId, ItemView};
use crate::shared::http::error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<ItemId>, PathRejection>,
) -> Result<Json<ItemView>, ApiError> {
    let Path(item_id) = path?;
    let name = state.items.get(item_id).await?;
    Ok(Json(ItemView { item_id, name }))
}

#[cfg(test)]
mod read_item_http_inbound_tests {
    use axum::{Router, http::Method, http::StatusCode, routing::get};
    use serde_json::json;

    use super::handle;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::http::{empty_request, send};
    use crate::tests::fixtures::state::make_test_state;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/items/{item_id}", get(handle))
            .with_state(state)
    }

    #[tokio::test]
    async fn it_should_return_the_item() {
        let state = make_test_state();
        state.items.insert(7, "pen".into()).await.unwrap();

        let response = send(app(state), empty_request(Method::GET, "/items/7")).await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.json, json!({"item_id": 7, "name": "pen"}));
    }

    #[tokio::test]
    async fn it_should_return_404_for_a_missing_item() {
        let response = send(app(make_test_state()), empty_request(Method::GET, "/items/7")).await;

        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.json, json!({"detail": "Item not found"}));
    }

    #[tokio::test]
    async fn it_should_return_422_for_a_non_integer_id() {
        let response = send(
            app(make_test_state()),
            empty_request(Method::GET, "/items/seven"),
        )
        .await;

        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
