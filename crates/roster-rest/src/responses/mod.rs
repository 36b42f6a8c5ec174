//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::{ErrorResponse, RosterError};
use serde::Serialize;
use tracing::{debug, error};

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub RosterError);

impl From<RosterError> for AppError {
    fn from(err: RosterError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(code = self.0.error_code(), "Request failed: {}", self.0);
        } else {
            debug!(code = self.0.error_code(), "Request rejected: {}", self.0);
        }

        (status, Json(ErrorResponse::from_error(&self.0))).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a success response.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}
