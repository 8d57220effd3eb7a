// Full CRUD walk through the composed router, middleware included.

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::shell::http::router;
use crate::shell::middleware::APP_NAME_HEADER;
use crate::tests::fixtures::http::{empty_request, send};
use crate::tests::fixtures::state::make_test_state;

#[tokio::test]
async fn it_should_walk_an_item_through_its_lifecycle() {
    let app = router(make_test_state());

    let created = send(
        app.clone(),
        empty_request(Method::POST, "/items/?item_id=1&name=cup"),
    )
    .await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.json, json!({"msg": "Item added", "db": {"1": "cup"}}));

    let duplicate = send(
        app.clone(),
        empty_request(Method::POST, "/items/?item_id=1&name=mug"),
    )
    .await;
    assert_eq!(duplicate.status, StatusCode::BAD_REQUEST);
    assert_eq!(duplicate.headers[APP_NAME_HEADER], "FastAPI-Revision");

    let read = send(app.clone(), empty_request(Method::GET, "/items/1")).await;
    assert_eq!(read.json, json!({"item_id": 1, "name": "cup"}));

    let updated = send(app.clone(), empty_request(Method::PUT, "/items/1?name=mug")).await;
    assert_eq!(updated.json, json!({"msg": "Item updated", "db": {"1": "mug"}}));

    let deleted = send(app.clone(), empty_request(Method::DELETE, "/items/1")).await;
    assert_eq!(deleted.json, json!({"msg": "Item deleted", "db": {}}));

    let gone = send(app, empty_request(Method::GET, "/items/1")).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert_eq!(gone.json, json!({"detail": "Item not found"}));
}

#[tokio::test]
async fn it_should_route_priced_items_apart_from_item_ids() {
    let app = router(make_test_state());

    let response = send(
        app.clone(),
        crate::tests::fixtures::http::json_request(
            Method::POST,
            "/items/priced",
            &json!({"id": 9, "name": "lamp", "price": 4.25}),
        ),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);

    let read = send(app, empty_request(Method::GET, "/items/9")).await;
    assert_eq!(read.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn it_should_list_the_db_in_insertion_order() {
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    let app = router(make_test_state());
    send(
        app.clone(),
        empty_request(Method::POST, "/items/?item_id=2&name=pen"),
    )
    .await;

    let response = app
        .oneshot(empty_request(Method::POST, "/items/?item_id=1&name=cup"))
        .await
        .unwrap();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    assert_eq!(
        std::str::from_utf8(&bytes).unwrap(),
        r#"{"msg":"Item added","db":{"2":"pen","1":"cup"}}"#
    );
}
