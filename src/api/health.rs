//! Health check endpoint.

use axum::{extract::State, Json};

use super::ApiResult;
use crate::errors::{MessageResponse, MESSAGE_PREFIX};
use crate::AppState;

/// GET /health - Ping every tenant cluster.
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<MessageResponse>> {
    state.registry.health_check().await?;
    Ok(Json(MessageResponse::new(format!(
        "{}: Up and running!",
        MESSAGE_PREFIX
    ))))
}
