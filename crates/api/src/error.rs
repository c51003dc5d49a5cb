use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use vidhub_core::error::CoreError;

/// Everything a handler can fail with. Each variant renders as the error
/// envelope:
///
/// ```text
/// { "status_code": 400, "message": "...", "errors": [], "success": false, "code": "BAD_REQUEST" }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Field-level DTO validation failures.
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// Malformed input that never reached the domain layer.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Request body exceeded the configured upload limit.
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Logged in full; the caller only sees a generic message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut errors: Vec<String> = Vec::new();

        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(%entity, %id, "Entity not found");
                    (StatusCode::NOT_FOUND, "NOT_FOUND", core.to_string())
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
                CoreError::Internal(msg) => hidden_internal(msg),
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::Validation(report) => {
                errors = flatten_validation_errors(report);
                let message = errors
                    .first()
                    .cloned()
                    .unwrap_or_else(|| "Validation failed".to_string());
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message)
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", msg.clone())
            }
            AppError::InternalError(msg) => hidden_internal(msg),
        };

        let body = json!({
            "status_code": status.as_u16(),
            "message": message,
            "errors": errors,
            "success": false,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Render validator output as sorted `field: message` lines.
fn flatten_validation_errors(report: &validator::ValidationErrors) -> Vec<String> {
    let mut lines: Vec<String> = report
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let detail = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{field}: {detail}")
            })
        })
        .collect();
    lines.sort();
    lines
}

type ErrorParts = (StatusCode, &'static str, String);

fn hidden_internal(cause: &dyn std::fmt::Display) -> ErrorParts {
    tracing::error!(error = %cause, "Request failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Missing rows are 404 and violations of a `uq_*` constraint are 409.
/// Any other database failure is a 500 with the cause kept out of the body.
fn classify_sqlx_error(err: &sqlx::Error) -> ErrorParts {
    if let sqlx::Error::RowNotFound = err {
        return (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        );
    }

    let duplicate = err
        .as_database_error()
        .filter(|db| db.code().as_deref() == Some("23505"))
        .and_then(|db| db.constraint())
        .filter(|name| name.starts_with("uq_"));

    match duplicate {
        Some(constraint) => (
            StatusCode::CONFLICT,
            "CONFLICT",
            format!("Duplicate value violates unique constraint: {constraint}"),
        ),
        None => hidden_internal(err),
    }
}
