use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::errors::{ErrorResponse, messages};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(Uuid),

    #[error("User with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let (status, error, message, code) = match &self {
            UserError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                "NotFound",
                format!("User {} not found", id),
                Some(messages::CODE_NOT_FOUND),
            ),
            UserError::DuplicateEmail(email) => (
                StatusCode::CONFLICT,
                "Conflict",
                format!("User with email '{}' already exists", email),
                Some(messages::CODE_CONFLICT),
            ),
            // Deliberately the same message whether the email is unknown or
            // the password is wrong.
            UserError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                "Invalid email or password".to_string(),
                Some(messages::CODE_UNAUTHORIZED),
            ),
            UserError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                "BadRequest",
                msg.clone(),
                Some(messages::CODE_VALIDATION),
            ),
            UserError::PasswordHash(msg) => {
                tracing::error!("Password hash error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalServerError",
                    messages::INTERNAL_ERROR.to_string(),
                    Some(messages::CODE_INTERNAL),
                )
            }
            UserError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalServerError",
                    messages::INTERNAL_ERROR.to_string(),
                    Some(messages::CODE_INTERNAL),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            message,
            details: None,
            code,
        });

        (status, body).into_response()
    }
}
