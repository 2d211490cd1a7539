#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use quizwizard_api::{
    config::Config,
    create_router,
    models::Question,
    services::{catalog::Catalog, shuffle::ShuffleEngine, AppState},
};
use tower::ServiceExt;

pub const TEST_SEED: u64 = 2024;

pub fn question(
    id: i64,
    category: &str,
    prompt: &str,
    answers: &[&str],
    correct: i64,
) -> Question {
    Question {
        id,
        category: category.to_string(),
        question: prompt.to_string(),
        answers: answers.iter().map(|a| a.to_string()).collect(),
        correct_answer_index: correct,
    }
}

/// science: 2 questions, math: 2 questions, geography: 3 questions.
pub fn sample_catalog() -> Catalog {
    let mut raw = HashMap::new();
    raw.insert(
        "science".to_string(),
        vec![
            question(1, "science", "Symbol for water?", &["H2O", "O2", "H2O2", "HO"], 0),
            question(2, "science", "The Red Planet?", &["Venus", "Mars", "Jupiter"], 1),
        ],
    );
    raw.insert(
        "math".to_string(),
        vec![
            question(3, "math", "What is 7 x 8?", &["54", "56", "58"], 1),
            question(4, "math", "What is the square root of 81?", &["9", "8"], 0),
        ],
    );
    raw.insert(
        "geography".to_string(),
        vec![
            question(5, "geography", "Capital of France?", &["Paris", "Lyon"], 0),
            question(6, "geography", "Longest river?", &["Amazon", "Nile"], 1),
            question(7, "geography", "Largest ocean?", &["Atlantic", "Pacific"], 1),
        ],
    );
    Catalog::new(raw)
}

pub fn create_test_state(catalog: Catalog) -> Arc<AppState> {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    Arc::new(AppState::with_catalog(
        Config::default(),
        catalog,
        ShuffleEngine::seeded(TEST_SEED),
    ))
}

pub fn create_test_app() -> Router {
    create_router(create_test_state(sample_catalog()))
}

pub fn create_app_with_catalog(catalog: Catalog) -> Router {
    create_router(create_test_state(catalog))
}

pub async fn read_json(response: axum::response::Response) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, read_json(response).await)
}

pub async fn post_raw(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, read_json(response).await)
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    post_raw(app, uri, &serde_json::to_string(body).unwrap()).await
}

/// Builds a submission body that answers each question with the given index.
pub fn submission_body(category: &str, answered: &[(&Question, i64)]) -> Value {
    let responses: Vec<Value> = answered
        .iter()
        .map(|(question, answer)| json!({ "question": question, "answer": answer }))
        .collect();
    json!({ "category": category, "questionResponses": responses })
}
