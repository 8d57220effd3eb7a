use axum::{Json, extract::State};
use serde::Serialize;

use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct DelayedGreetingResponse {
    pub message: &'static str,
}

/// Simulates a slow upstream by sleeping for the configured delay.
pub async fn handle(State(state): State<AppState>) -> Json<DelayedGreetingResponse> {
    tokio::time::sleep(state.greeting_delay).await;
    Json(DelayedGreetingResponse {
        message: "Hello Global",
    })
}
