//! Standardized API error envelope.

use serde::{Deserialize, Serialize};

/// Error body returned by every failing endpoint: `{"error": "...", ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable description of the failure.
    pub error: String,

    /// Extra context, when safe to expose.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    // Common error constructors
    pub fn password_mismatch() -> Self {
        Self::new("Password does not match")
    }

    pub fn internal_error() -> Self {
        Self::new("Internal server error")
    }
}
