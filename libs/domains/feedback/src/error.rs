use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::errors::{ErrorResponse, messages};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("Feedback not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type FeedbackResult<T> = Result<T, FeedbackError>;

impl IntoResponse for FeedbackError {
    fn into_response(self) -> Response {
        let (status, error, message, code) = match &self {
            FeedbackError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                "NotFound",
                format!("Feedback {} not found", id),
                Some(messages::CODE_NOT_FOUND),
            ),
            FeedbackError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                "BadRequest",
                msg.clone(),
                Some(messages::CODE_VALIDATION),
            ),
            FeedbackError::Internal(msg) => {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = FeedbackError::NotFound(Uuid::now_v7()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let response = FeedbackError::Validation("bad filter".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_hides_details() {
        let response = FeedbackError::Internal("connection reset".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
