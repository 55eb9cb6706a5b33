// tests/router_tests.rs

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use cloudprep::{
    config::Config, create_router, error::AppError, mappings::MappingCatalog,
    models::exam::{EXAM_IDS, ExamSource, exam_source},
    sources::RemoteStore, state::AppState,
};
use serde_json::{Value, json};
use tower::ServiceExt;

/// Store with no objects at all.
struct EmptyStore;

#[async_trait]
impl RemoteStore for EmptyStore {
    async fn fetch_text(&self, path: &str) -> Result<String, AppError> {
        Err(AppError::UpstreamError(format!("Failed to fetch {}", path)))
    }
}

fn app() -> axum::Router {
    app_with_origins(vec!["http://localhost:3000".to_string()])
}

fn app_with_origins(allowed_origins: Vec<String>) -> axum::Router {
    let config = Config {
        rust_log: "error".to_string(),
        port: 0,
        exam_bucket_url: "http://bucket.invalid".to_string(),
        flashcard_prefix: "Flashcards".to_string(),
        fetch_timeout_secs: 1,
        allowed_origins,
    };

    create_router(AppState {
        config,
        catalog: Arc::new(MappingCatalog::builtin().unwrap()),
        store: Arc::new(EmptyStore),
    })
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn compare_is_answered_without_a_network() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/compare")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "awsServices": ["DynamoDB", "SNS"] }).to_string(),
        ))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["mappedServices"], 2);
    assert_eq!(body["recommendations"][0]["mapping"]["targetProduct"], "Managed MongoDB");
    assert_eq!(body["complexity"]["overall"], "Hard");
    assert_eq!(body["complexity"]["averageDifficulty"], 6.5);
}

#[tokio::test]
async fn mini_quiz_with_no_reachable_source_is_empty() {
    let request = Request::builder()
        .uri("/api/test/saa-mini")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn flashcards_degrade_to_an_empty_list() {
    let request = Request::builder()
        .uri("/api/flashcards?category=Security&q=kms")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn cors_allows_configured_origins() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/compare")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
}

#[tokio::test]
async fn wildcard_origin_allows_any_origin() {
    let app = app_with_origins(vec!["https://prep.example".to_string(), "*".to_string()]);

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/results")
        .header(header::ORIGIN, "https://anywhere.test")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn every_listed_exam_id_is_routed() {
    for &exam_id in EXAM_IDS {
        let request = Request::builder()
            .uri(format!("/api/test/{}", exam_id))
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        // Nothing is reachable: full tests fail upstream, mini quizzes come back empty.
        let expected = match exam_source(exam_id) {
            Some(ExamSource::Mini(_)) => StatusCode::OK,
            Some(ExamSource::Single(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            None => panic!("{} has no source", exam_id),
        };
        assert_eq!(response.status(), expected, "exam {}", exam_id);
    }
}

#[tokio::test]
async fn non_numeric_seed_is_a_bad_request() {
    let request = Request::builder()
        .uri("/api/test/saa-mini?seed=abc")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());
}
