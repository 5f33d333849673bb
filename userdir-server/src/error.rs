//! Error to HTTP response mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use userdir_core::Error;

/// Status for a duplicate user.
///
/// 409 Conflict is the accurate code; existing clients expect 500.
pub const CONFLICT_STATUS: StatusCode = StatusCode::INTERNAL_SERVER_ERROR;

/// Reply for any storage or internal failure
pub const STORE_UNAVAILABLE_MSG: &str = "user store is unavailable...";

/// JSON body carrying a single message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub msg: String,
}

impl MessageBody {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Error returned by handlers
#[derive(Debug)]
pub enum ApiError {
    Core(Error),
    /// Request body claimed to be JSON but did not parse
    MalformedBody(String),
    /// Blocking task panicked or was cancelled
    Internal(String),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self::Core(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(Error::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Core(Error::Conflict(_)) => CONFLICT_STATUS,
            ApiError::Core(Error::Storage(_) | Error::Config(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Core(Error::Validation(msg) | Error::Conflict(msg)) => msg.clone(),
            ApiError::Core(Error::Storage(_) | Error::Config(_)) | ApiError::Internal(_) => {
                STORE_UNAVAILABLE_MSG.to_string()
            }
            ApiError::MalformedBody(detail) => {
                format!("request body is not valid JSON: {}", detail)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Core(err @ (Error::Storage(_) | Error::Config(_))) => {
                tracing::error!(error = %err, "user store access failed");
            }
            ApiError::Internal(detail) => tracing::error!(%detail, "request task failed"),
            _ => {}
        }

        (self.status(), Json(MessageBody::new(self.message()))).into_response()
    }
}
