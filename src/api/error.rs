//! The shared error taxonomy every handler maps into.

use crate::domain::error::StoreError;
use crate::domain::policy::Denial;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A plain json error body. Every non-2xx response carries one.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Message to explain failure
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Structural or business-rule validation failure.
    #[error("{0}")]
    Validation(String),
    #[error("User not authenticated.")]
    Unauthenticated,
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{0}")]
    Conflict(String),
    /// Persistence or other unexpected failure. The inner error is logged;
    /// the response body stays opaque.
    #[error("An unknown error has occurred")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Denial> for ApiError {
    fn from(denial: Denial) -> Self {
        match denial {
            Denial::NotAuthenticated => ApiError::Unauthenticated,
            Denial::Forbidden => ApiError::Forbidden(denial.to_string()),
            Denial::PastAppointment => ApiError::Validation(denial.to_string()),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict => ApiError::Conflict("Conflicting record.".to_string()),
            StoreError::Other(err) => ApiError::Internal(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                "Internal server error"
            );
        }

        (
            status_code,
            Json(ErrorResponse {
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
