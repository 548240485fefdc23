//! Errors returned to HTTP clients.

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::ResponseError;
use thiserror::Error;

/// Per-request failures. Each one becomes a plain-text response; none of
/// them escape the handler boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body or query string could not be decoded into the expected shape.
    #[error("{0}")]
    Decode(String),

    #[error("Player not found")]
    PlayerNotFound,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Decode(_) => StatusCode::BAD_REQUEST,
            ApiError::PlayerNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl From<JsonPayloadError> for ApiError {
    fn from(err: JsonPayloadError) -> Self {
        match err {
            JsonPayloadError::Deserialize(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Decode(other.to_string()),
        }
    }
}

impl From<QueryPayloadError> for ApiError {
    fn from(err: QueryPayloadError) -> Self {
        match err {
            QueryPayloadError::Deserialize(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Decode(other.to_string()),
        }
    }
}
