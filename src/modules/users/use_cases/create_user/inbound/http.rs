use axum::{Json, extract::rejection::JsonRejection};
use serde::Serialize;

use crate::modules::users::core::user::User;
use crate::shared::http::error::ApiError;

#[derive(Serialize)]
pub struct CreateUserResponse {
    pub msg: &'static str,
    pub data: User,
}

pub async fn handle(
    body: Result<Json<User>, JsonRejection>,
) -> Result<Json<CreateUserResponse>, ApiError> {
    let Json(user) = body?;
    tracing::debug!(user_id = user.id, "user accepted");
    Ok(Json(CreateUserResponse {
        msg: "User created",
        data: user,
    }))
}
