use axum::{
    Form, Json,
    extract::{State, rejection::FormRejection},
};
use serde::{Deserialize, Serialize};

use crate::shared::http::error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub msg: &'static str,
}

pub async fn handle(
    State(state): State<AppState>,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Form(form) = form?;
    // Empty form fields count as absent.
    for (field, value) in [("username", &form.username), ("password", &form.password)] {
        if value.is_empty() {
            return Err(ApiError::Unprocessable(format!(
                "Missing form field `{field}`"
            )));
        }
    }
    if !state.admin.matches(&form.username, &form.password) {
        tracing::warn!(username = %form.username, "login rejected");
        return Err(ApiError::Unauthorized("Invalid credentials".into()));
    }
    tracing::info!(username = %form.username, "login succeeded");
    Ok(Json(LoginResponse {
        msg: "Login successful",
    }))
}
