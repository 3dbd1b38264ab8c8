//! Shared response body types for API handlers.

use serde::Serialize;

/// `{ "success": bool }` body returned by mutation endpoints.
///
/// `success` is `true` only when stored data actually changed; a missing
/// target or a no-op write both report `false`.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn new(success: bool) -> Self {
        Self { success }
    }
}
