use axum::{
    extract::{Request, State},
    http::HeaderName,
    middleware::Next,
    response::Response,
};

use crate::shell::state::AppState;

pub const APP_NAME_HEADER: HeaderName = HeaderName::from_static("x-app-name");

/// Stamps `X-App-Name` on every response, errors and fallbacks included.
pub async fn append_app_name(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(APP_NAME_HEADER, state.app_name.clone());
    response
}
