use axum::{http::Uri, response::Redirect};

/// 307 to the same path with a trailing slash appended; the query string is
/// kept and the method is preserved by the client.
pub async fn redirect_to_trailing_slash(uri: Uri) -> Redirect {
    let target = match uri.query() {
        Some(query) => format!("{}/?{query}", uri.path()),
        None => format!("{}/", uri.path()),
    };
    Redirect::temporary(&target)
}
