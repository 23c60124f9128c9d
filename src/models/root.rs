use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Greeting returned by the root endpoint
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
