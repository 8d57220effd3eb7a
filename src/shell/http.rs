use axum::{
    Router,
    http::HeaderName,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::modules::auth::use_cases::login::inbound::http as login_http;
use crate::modules::auth::use_cases::secure_data::inbound::http as secure_data_http;
use crate::modules::basics::use_cases::delayed_greeting::inbound::http as delayed_greeting_http;
use crate::modules::basics::use_cases::display_speed::inbound::http as display_speed_http;
use crate::modules::basics::use_cases::hash_password::inbound::http as hash_password_http;
use crate::modules::basics::use_cases::health::inbound::http as health_http;
use crate::modules::basics::use_cases::home::inbound::http as home_http;
use crate::modules::basics::use_cases::search::inbound::http as search_http;
use crate::modules::basics::use_cases::verify_speed::inbound::http as verify_speed_http;
use crate::modules::items::use_cases::create_item::inbound::http as create_item_http;
use crate::modules::items::use_cases::create_priced_item::inbound::http as create_priced_item_http;
use crate::modules::items::use_cases::delete_item::inbound::http as delete_item_http;
use crate::modules::items::use_cases::read_item::inbound::http as read_item_http;
use crate::modules::items::use_cases::update_item::inbound::http as update_item_http;
use crate::modules::users::use_cases::create_user::inbound::http as create_user_http;
use crate::shared::http::error::{method_not_allowed, not_found};
use crate::shared::http::trailing_slash::redirect_to_trailing_slash;
use crate::shell::middleware::append_app_name;
use crate::shell::observability::MakeRequestUuidV7;
use crate::shell::state::AppState;

const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_http::handle))
        .route("/health", get(health_http::handle))
        .route("/speed/{speed}", get(display_speed_http::handle))
        .route("/test/{speed}", get(verify_speed_http::handle))
        .route("/search", get(search_http::handle))
        .route("/ui", get(delayed_greeting_http::handle))
        .route("/pass/{passwd}", get(hash_password_http::handle))
        .route("/user/", post(create_user_http::handle))
        .route("/items/", post(create_item_http::handle))
        .route("/items/priced", post(create_priced_item_http::handle))
        .route(
            "/items/{item_id}",
            get(read_item_http::handle)
                .put(update_item_http::handle)
                .delete(delete_item_http::handle),
        )
        .route("/secure-data", get(secure_data_http::handle))
        .route("/login/", post(login_http::handle))
        .route("/user", post(redirect_to_trailing_slash))
        .route("/items", post(redirect_to_trailing_slash))
        .route("/login", post(redirect_to_trailing_slash))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(from_fn_with_state(state.clone(), append_app_name))
        .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(REQUEST_ID_HEADER, MakeRequestUuidV7))
        .with_state(state)
}
