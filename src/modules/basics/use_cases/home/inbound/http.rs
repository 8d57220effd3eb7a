use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HomeResponse {
    pub message: &'static str,
}

pub async fn handle() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "Hello, FastAPI!",
    })
}
