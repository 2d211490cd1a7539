use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ApiResponse;

/// Failures surfaced by the quiz core. Every variant carries the user-facing
/// message that ends up in the response envelope.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuizError {
    #[error("An unexpected error occurred. Please try again later.")]
    ServiceUnavailable,

    #[error("{}", unknown_category_message(.0))]
    UnknownCategory(String),

    #[error("Currently there are no questions available for the {0} category. Please choose a different category or try again later.")]
    NoQuestionsAvailable(String),

    #[error("{0}")]
    InvalidSubmission(String),

    #[error("Failed to process submission: score must be a value between 0 and 100 (got {0})")]
    InvalidScore(f64),
}

fn unknown_category_message(category: &str) -> String {
    if category.is_empty() {
        "A category must be provided.".to_string()
    } else {
        format!("{} is not a valid category.", category)
    }
}

impl QuizError {
    pub fn invalid_submission(message: impl Into<String>) -> Self {
        QuizError::InvalidSubmission(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            QuizError::ServiceUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            QuizError::UnknownCategory(_) | QuizError::NoQuestionsAvailable(_) => {
                StatusCode::NOT_FOUND
            }
            QuizError::InvalidSubmission(_) | QuizError::InvalidScore(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for QuizError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Quiz request failed: {}", self);
        } else {
            tracing::warn!("Quiz request rejected: {}", self);
        }

        (status, Json(ApiResponse::<()>::failure(self.to_string()))).into_response()
    }
}
