//! Shared response body types for API handlers.
//!
//! Resource endpoints return rows as-is, without an envelope. The types here
//! cover the few endpoints that answer with a confirmation message instead.

use serde::Serialize;

/// `{ "message": "..." }` confirmation body, used by deletes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
