pub mod handlers;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// Returned for all error responses, providing consistent error information
/// to clients.
///
/// # JSON Example
///
/// ```json
/// {
///   "code": 422,
///   "error": "Product name was not set on request.",
///   "exceptionType": "UnprocessableEntity"
/// }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Numeric HTTP status code, mirrored into the body
    pub code: u16,
    /// Human-readable error message, omitted when the failure carries none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Machine-readable kind of the failure
    #[serde(rename = "exceptionType")]
    pub exception_type: String,
}

/// Application error type that can be converted to HTTP responses.
///
/// This is the single place where HTTP status codes are decided for
/// non-2xx responses. Every failure is logged before the response body is
/// built.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Unprocessable Entity: {0}")]
    UnprocessableEntity(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, exception_type, message) = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!("JSON extraction error: {:?}", e);
                (e.status(), "JsonRejection", Some(e.body_text()))
            }
            AppError::Database(e) => return map_db_error(&e),
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, "NotFound", Some(msg))
            }
            AppError::UnprocessableEntity(msg) => {
                tracing::info!("Unprocessable entity: {}", msg);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "UnprocessableEntity",
                    Some(msg),
                )
            }
        };

        error_response(status, exception_type.to_string(), message)
    }
}

/// Classify a SeaORM error into an HTTP response.
///
/// SeaORM wraps the driver-level cause inside `DbErr`; `sql_err()` unwraps
/// one level so constraint violations report their own kind instead of a
/// generic database failure. Everything maps to 500 here — "row not found"
/// never reaches this layer because repositories resolve absence into an
/// explicit `Option` result.
fn map_db_error(error: &DbErr) -> Response {
    tracing::error!("Database error: {:?}", error);

    let (exception_type, message) = match error.sql_err() {
        Some(sql_err @ SqlErr::UniqueConstraintViolation(_)) => {
            ("UniqueConstraintViolation", sql_err.to_string())
        }
        Some(sql_err @ SqlErr::ForeignKeyConstraintViolation(_)) => {
            ("ForeignKeyConstraintViolation", sql_err.to_string())
        }
        _ => ("DbErr", error.to_string()),
    };

    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        exception_type.to_string(),
        Some(message),
    )
}

/// Build an error response body from its parts.
pub fn error_response(
    status: StatusCode,
    exception_type: String,
    message: Option<String>,
) -> Response {
    let body = Json(ErrorResponse {
        code: status.as_u16(),
        error: message,
        exception_type,
    });

    (status, body).into_response()
}
