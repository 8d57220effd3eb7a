//! Header-token guard, resolved as an extractor so any handler can require it
//! by taking a [`VerifiedToken`] argument.

use axum::{extract::FromRequestParts, http::HeaderName, http::request::Parts};

use crate::shared::http::error::ApiError;
use crate::shell::state::AppState;

pub const TOKEN_HEADER: HeaderName = HeaderName::from_static("token");

/// Proof that the request carried the configured `token` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifiedToken;

impl FromRequestParts<AppState> for VerifiedToken {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(&TOKEN_HEADER)
            .ok_or_else(|| ApiError::Unprocessable("Missing `token` header".into()))?
            .to_str()
            .map_err(|_| ApiError::Unprocessable("`token` header is not valid ASCII".into()))?;

        if token != &*state.api_token {
            tracing::warn!("rejected request with an invalid token");
            return Err(ApiError::Forbidden("Invalid token".into()));
        }
        Ok(VerifiedToken)
    }
}
