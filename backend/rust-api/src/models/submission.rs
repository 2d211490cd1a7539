use serde::{Deserialize, Serialize};

use super::Question;

/// A single answer. A missing question makes the whole submission invalid;
/// an out-of-range answer index is simply wrong.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerResponse {
    #[serde(default)]
    pub question: Option<Question>,
    #[serde(default)]
    pub answer: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSubmission {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub question_responses: Vec<AnswerResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResults {
    pub score_string: String,
    pub score_percentage: f64,
    pub comparison: String,
}
