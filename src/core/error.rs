use std::marker::PhantomData;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::shared::types::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Operation timed out: {0}")]
    Timeout(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Timeout(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Message shown to the client. Storage details are logged, not returned.
    pub fn client_message(self) -> String {
        match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                "Database error occurred".to_string()
            }
            AppError::Timeout(ref msg) => {
                tracing::warn!("Timeout: {}", msg);
                self.to_string()
            }
            AppError::NotFound(msg) | AppError::Validation(msg) | AppError::BadRequest(msg) => {
                msg
            }
        }
    }
}

/// Response body that can describe a failure.
///
/// Each endpoint's response keeps its payload fields on error, left empty.
pub trait ErrorPayload: Serialize {
    fn from_error_msg(error_msg: String) -> Self;
}

impl ErrorPayload for ErrorResponse {
    fn from_error_msg(error_msg: String) -> Self {
        ErrorResponse::new(error_msg)
    }
}

/// An `AppError` rendered with the body shape of endpoint response `T`
pub struct EndpointError<T> {
    error: AppError,
    _payload: PhantomData<fn() -> T>,
}

impl<T> std::fmt::Debug for EndpointError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.error, f)
    }
}

impl<T> From<AppError> for EndpointError<T> {
    fn from(error: AppError) -> Self {
        Self {
            error,
            _payload: PhantomData,
        }
    }
}

impl<T: ErrorPayload> IntoResponse for EndpointError<T> {
    fn into_response(self) -> Response {
        let status = self.error.status_code();
        let body = T::from_error_msg(self.error.client_message());
        (status, Json(body)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        EndpointError::<ErrorResponse>::from(self).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Handler result whose error body has the same shape as its success body
pub type EndpointResult<T> = std::result::Result<Json<T>, EndpointError<T>>;
