use axum::Json;
use tracing::debug;

use crate::error::ApiError;
use crate::models::MessageResponse;

/// Root greeting
pub async fn root() -> Json<MessageResponse> {
    debug!("Root requested");
    Json(MessageResponse {
        message: "Hello World!".to_string(),
    })
}

/// Response for any unmatched route
pub async fn not_found() -> ApiError {
    ApiError::not_found()
}
