use axum::Json;
use serde::Serialize;

use crate::modules::auth::adapters::inbound::verify_token::VerifiedToken;

#[derive(Serialize)]
pub struct SecureDataResponse {
    pub msg: &'static str,
}

pub async fn handle(_: VerifiedToken) -> Json<SecureDataResponse> {
    Json(SecureDataResponse {
        msg: "This is protected data",
    })
}
