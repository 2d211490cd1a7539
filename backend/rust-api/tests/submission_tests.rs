mod common;

use axum::http::StatusCode;
use quizwizard_api::services::catalog::Catalog;
use serde_json::json;

fn science_question() -> quizwizard_api::models::Question {
    common::question(1, "science", "Symbol for water?", &["H2O", "O2", "H2O2", "HO"], 0)
}

fn mars_question() -> quizwizard_api::models::Question {
    common::question(2, "science", "The Red Planet?", &["Venus", "Mars", "Jupiter"], 1)
}

#[tokio::test]
async fn test_first_submission_is_first_quizzer() {
    let app = common::create_test_app();
    let (water, mars) = (science_question(), mars_question());

    let body = common::submission_body("science", &[(&water, 0), (&mars, 1)]);
    let (status, json) = common::post_json(&app, "/submit", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({
            "success": true,
            "message": "Submission processed successfully.",
            "data": {
                "scoreString": "2/2",
                "scorePercentage": 100.0,
                "comparison": "You are the first quizzer for the science category."
            }
        })
    );
}

#[tokio::test]
async fn test_comparison_against_earlier_quizzers() {
    let app = common::create_test_app();
    let (water, mars) = (science_question(), mars_question());

    // 0%, 50%, 50% recorded first
    for answers in [[3, 0], [0, 0], [0, 0]] {
        let body = common::submission_body(
            "science",
            &[(&water, answers[0]), (&mars, answers[1])],
        );
        let (status, _) = common::post_json(&app, "/submit", &body).await;
        assert_eq!(status, StatusCode::OK);
    }

    let body = common::submission_body("Science", &[(&water, 0), (&mars, 1)]);
    let (status, json) = common::post_json(&app, "/submit", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["scoreString"], "2/2");
    assert_eq!(
        json["data"]["comparison"],
        "Your score for the science category was better than 100% of all quizzers."
    );

    let body = common::submission_body("science", &[(&water, 0), (&mars, 0)]);
    let (_, json) = common::post_json(&app, "/submit", &body).await;
    assert_eq!(json["data"]["scorePercentage"], 50.0);
    assert_eq!(
        json["data"]["comparison"],
        "Your score for the science category was better than 25% of all quizzers."
    );
}

#[tokio::test]
async fn test_second_submission_still_first_quizzer() {
    let app = common::create_test_app();
    let water = science_question();

    for _ in 0..2 {
        let body = common::submission_body("science", &[(&water, 0)]);
        let (_, json) = common::post_json(&app, "/submit", &body).await;
        assert_eq!(
            json["data"]["comparison"],
            "You are the first quizzer for the science category."
        );
    }
}

#[tokio::test]
async fn test_out_of_range_answers_count_as_wrong() {
    let app = common::create_test_app();
    let (water, mars) = (science_question(), mars_question());

    let body = common::submission_body("random", &[(&water, -1), (&mars, 42)]);
    let (status, json) = common::post_json(&app, "/submit", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["scoreString"], "0/2");
    assert_eq!(json["data"]["scorePercentage"], 0.0);
}

#[tokio::test]
async fn test_invalid_request_format() {
    let app = common::create_test_app();

    let (status, json) = common::post_raw(&app, "/submit", "invalid json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        json!({ "success": false, "message": "Invalid request format." })
    );
}

#[tokio::test]
async fn test_no_answers_submitted() {
    let app = common::create_test_app();

    let body = json!({ "category": "science", "questionResponses": [] });
    let (status, json) = common::post_json(&app, "/submit", &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        json!({ "success": false, "message": "No answers were submitted." })
    );
}

#[tokio::test]
async fn test_empty_category_string() {
    let app = common::create_test_app();
    let water = science_question();

    let body = common::submission_body("  ", &[(&water, 0)]);
    let (status, json) = common::post_json(&app, "/submit", &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "A category must be provided.");
}

#[tokio::test]
async fn test_invalid_category() {
    let app = common::create_test_app();
    let water = science_question();

    let body = common::submission_body("history", &[(&water, 0)]);
    let (status, json) = common::post_json(&app, "/submit", &body).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json,
        json!({ "success": false, "message": "history is not a valid category." })
    );
}

#[tokio::test]
async fn test_null_question_rejected() {
    let app = common::create_test_app();

    let body = json!({
        "category": "science",
        "questionResponses": [{ "question": null, "answer": 0 }]
    });
    let (status, json) = common::post_json(&app, "/submit", &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["message"],
        "Failed to process submission: one or more answers were invalid"
    );
}

#[tokio::test]
async fn test_uninitialized_service_is_server_error() {
    let app = common::create_app_with_catalog(Catalog::default());
    let water = science_question();

    let body = common::submission_body("science", &[(&water, 0)]);
    let (status, json) = common::post_json(&app, "/submit", &body).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json["message"],
        "An unexpected error occurred. Please try again later."
    );
}
