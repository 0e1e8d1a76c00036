use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned for every failed request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human readable failure description
    pub error_msg: String,
}

impl ErrorResponse {
    pub fn new(error_msg: impl Into<String>) -> Self {
        Self {
            error_msg: error_msg.into(),
        }
    }
}
