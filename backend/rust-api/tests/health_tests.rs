mod common;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use quizwizard_api::{middlewares::trace::TRACE_ID_HEADER, services::catalog::Catalog};
use tower::ServiceExt;

#[tokio::test]
async fn test_health_reports_catalog_summary() {
    let app = common::create_test_app();

    let (status, json) = common::get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "quizwizard-api");
    assert_eq!(json["catalog"]["categories"], 3);
    assert_eq!(json["catalog"]["questions"], 7);
}

#[tokio::test]
async fn test_health_degraded_for_empty_catalog() {
    let app = common::create_app_with_catalog(Catalog::default());

    let (status, json) = common::get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["status"], "degraded");
}

#[tokio::test]
async fn test_trace_id_is_generated_and_propagated() {
    let app = common::create_test_app();

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/categories").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let generated = response.headers().get(TRACE_ID_HEADER).unwrap();
    assert_eq!(generated.to_str().unwrap().len(), 36);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/categories")
                .header(TRACE_ID_HEADER, "trace-abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers().get(TRACE_ID_HEADER).unwrap(), "trace-abc");
}

#[tokio::test]
async fn test_metrics_endpoint_exposes_quiz_counters() {
    let app = common::create_test_app();

    let (status, _) = common::get_json(&app, "/questions?category=science").await;
    assert_eq!(status, StatusCode::OK);

    let response = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("questions_served_total"));
    assert!(text.contains("http_requests_total"));
    assert!(text.contains("path=\"/questions\""));
}
