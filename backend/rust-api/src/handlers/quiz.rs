use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::{
    error::QuizError,
    extractors::AppJson,
    models::{ApiResponse, Question, QuestionsQuery, QuizResults, QuizSubmission},
    services::AppState,
};

pub async fn get_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<String>>>, QuizError> {
    let categories = state.quiz.list_categories()?;
    Ok(Json(ApiResponse::success(
        "Categories retrieved successfully.",
        categories,
    )))
}

pub async fn get_questions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QuestionsQuery>,
) -> Result<Json<ApiResponse<Vec<Question>>>, QuizError> {
    tracing::info!("Fetching questions for category '{}'", query.category);

    let selection = state.quiz.get_questions(&query.category)?;
    let message = format!(
        "Questions successfully retrieved from the {} category.",
        selection.category
    );
    Ok(Json(ApiResponse::success(message, selection.questions)))
}

pub async fn submit_answers(
    State(state): State<Arc<AppState>>,
    AppJson(submission): AppJson<QuizSubmission>,
) -> Result<Json<ApiResponse<QuizResults>>, QuizError> {
    tracing::info!(
        "Submitting {} answers for category '{}'",
        submission.question_responses.len(),
        submission.category
    );

    let results = state.quiz.submit_answers(&submission)?;
    Ok(Json(ApiResponse::success(
        "Submission processed successfully.",
        results,
    )))
}
