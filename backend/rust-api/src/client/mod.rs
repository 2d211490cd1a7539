//! HTTP client used by the `quizwizard` command-line tool.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{ApiResponse, Question, QuizResults, QuizSubmission};
use crate::services::catalog::normalize_category;

pub mod session;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("error making {operation} request: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("error unmarshaling {operation} response: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("error within {operation} response: {message}")]
    Rejected {
        operation: &'static str,
        status: StatusCode,
        message: String,
    },

    #[error("{operation} response contained no data")]
    MissingData { operation: &'static str },
}

impl ClientError {
    pub fn is_unknown_category(&self) -> bool {
        matches!(
            self,
            ClientError::Rejected { status, message, .. }
                if *status == StatusCode::NOT_FOUND && message.ends_with("is not a valid category.")
        )
    }

    pub fn is_no_questions(&self) -> bool {
        matches!(
            self,
            ClientError::Rejected { status, message, .. }
                if *status == StatusCode::NOT_FOUND && message.contains("no questions available")
        )
    }
}

pub struct QuizClient {
    http: reqwest::Client,
    base_url: String,
}

impl QuizClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_categories(&self) -> Result<Vec<String>, ClientError> {
        const OPERATION: &str = "categories";
        let response = self
            .http
            .get(format!("{}/categories", self.base_url))
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                operation: OPERATION,
                source,
            })?;
        unwrap_envelope(OPERATION, response).await
    }

    pub async fn fetch_questions(&self, category: &str) -> Result<Vec<Question>, ClientError> {
        const OPERATION: &str = "fetch questions";
        let category = normalize_category(category);
        let response = self
            .http
            .get(format!("{}/questions", self.base_url))
            .query(&[("category", category.as_str())])
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                operation: OPERATION,
                source,
            })?;
        unwrap_envelope(OPERATION, response).await
    }

    pub async fn submit(&self, submission: &QuizSubmission) -> Result<QuizResults, ClientError> {
        const OPERATION: &str = "post submission";
        let response = self
            .http
            .post(format!("{}/submit", self.base_url))
            .json(submission)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                operation: OPERATION,
                source,
            })?;
        unwrap_envelope(OPERATION, response).await
    }
}

async fn unwrap_envelope<T: DeserializeOwned>(
    operation: &'static str,
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    let envelope: ApiResponse<T> = response
        .json()
        .await
        .map_err(|source| ClientError::Decode { operation, source })?;

    tracing::debug!(
        "{} response: status={}, success={}, message={}",
        operation,
        status,
        envelope.success,
        envelope.message
    );

    if !envelope.success {
        return Err(ClientError::Rejected {
            operation,
            status,
            message: envelope.message,
        });
    }

    envelope
        .data
        .ok_or(ClientError::MissingData { operation })
}
