//! Shared response envelope types for API handlers.
//!
//! Use these instead of ad-hoc `serde_json::json!` literals to get
//! compile-time type safety and consistent serialization.

use serde::Serialize;

/// Standard `{ "success": true }` acknowledgement for deletes and clear-all.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        SuccessResponse { success: true }
    }
}

/// Standard `{ "added": [...] }` envelope for bulk-import responses.
#[derive(Debug, Serialize)]
pub struct AddedResponse<T: Serialize> {
    pub added: Vec<T>,
}
