//! Shared response envelope types for API handlers.

use serde::Serialize;

/// `{ "status": "success", "data": T }` envelope used by list and update.
#[derive(Debug, Serialize)]
pub struct StatusResponse<T: Serialize> {
    pub status: &'static str,
    pub data: T,
}

impl<T: Serialize> StatusResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}

/// `{ "message": "..." }` confirmation body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
