//! Integration tests for the store audit router

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use store_audit::{create_router, AppState, AuditStats, Question, QuestionSet};
use tower::ServiceExt;

const FORM: &str = "application/x-www-form-urlencoded";

fn app_with(questions: QuestionSet) -> (Router, Arc<AuditStats>) {
    let stats = Arc::new(AuditStats::new());
    let state = Arc::new(AppState::new(questions, stats.clone()));
    (create_router(state), stats)
}

fn app() -> (Router, Arc<AuditStats>) {
    app_with(QuestionSet::builtin())
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, FORM)
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn json_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

// ============================================
// Page flow
// ============================================

#[tokio::test]
async fn test_index_shows_entry_form() {
    let (app, _) = app();
    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains(r#"action="/audit""#));
    assert!(page.contains(r#"name="store_name""#));
}

#[tokio::test]
async fn test_audit_with_empty_name_redirects() {
    let (app, stats) = app();
    let response = app.oneshot(form_post("/audit", "store_name=")).await.unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/");
    assert_eq!(stats.get_stats().audits_rejected, 1);
}

#[tokio::test]
async fn test_audit_without_name_field_redirects() {
    let (app, _) = app();
    let response = app.oneshot(form_post("/audit", "")).await.unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn test_audit_repeated_name_uses_first_value() {
    let (app, stats) = app();
    let response = app
        .oneshot(form_post("/audit", "store_name=Moda&store_name=Kadikoy"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains(r#"name="store_name" value="Moda""#));
    assert!(!page.contains("Kadikoy"));
    assert_eq!(stats.get_stats().audits_started, 1);
}

#[tokio::test]
async fn test_audit_with_plain_text_body_redirects() {
    let (app, _) = app();
    let request = Request::builder()
        .method("POST")
        .uri("/audit")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("store_name=Moda"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn test_audit_without_content_type_redirects() {
    let (app, _) = app();
    let request = Request::builder()
        .method("POST")
        .uri("/audit")
        .body(Body::from("store_name=Moda"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn test_audit_lists_questions_for_store() {
    let (app, stats) = app();
    let response = app
        .oneshot(form_post("/audit", "store_name=Kad%C4%B1k%C3%B6y"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains(r#"name="store_name" value="Kadıköy""#));
    for id in ["q1", "q2", "q3", "q4", "q5"] {
        assert!(page.contains(&format!(r#"name="{id}" value="yes""#)), "missing {id}");
    }
    assert_eq!(stats.get_stats().audits_started, 1);
}

#[tokio::test]
async fn test_submit_scores_mixed_answers() {
    let (app, stats) = app();
    let response = app
        .oneshot(form_post("/submit", "store_name=Moda&q1=yes&q2=yes&q3=no&q4=yes"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains(r#"<strong id="store-name">Moda</strong>"#));
    assert!(page.contains(r#"<strong id="score">60</strong>"#));

    let snapshot = stats.get_stats();
    assert_eq!(snapshot.audits_completed, 1);
    assert_eq!(snapshot.average_score, 60.0);
}

#[tokio::test]
async fn test_submit_single_yes() {
    let (app, _) = app();
    let response = app.oneshot(form_post("/submit", "store_name=Moda&q2=yes")).await.unwrap();

    let page = body_text(response).await;
    assert!(page.contains(r#"<strong id="score">25</strong>"#));
}

#[tokio::test]
async fn test_submit_without_answers_or_name() {
    let (app, _) = app();
    let response = app.oneshot(form_post("/submit", "")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains(r#"<strong id="store-name"></strong>"#));
    assert!(page.contains(r#"<strong id="score">0</strong>"#));
}

#[tokio::test]
async fn test_submit_with_plain_text_body_scores_zero() {
    let (app, stats) = app();
    let request = Request::builder()
        .method("POST")
        .uri("/submit")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("store_name=Moda&q1=yes&q2=yes"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains(r#"<strong id="store-name"></strong>"#));
    assert!(page.contains(r#"<strong id="score">0</strong>"#));
    assert_eq!(stats.get_stats().audits_completed, 1);
}

#[tokio::test]
async fn test_submit_without_content_type_scores_zero() {
    let (app, _) = app();
    let request = Request::builder()
        .method("POST")
        .uri("/submit")
        .body(Body::from("store_name=Moda&q1=yes"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains(r#"<strong id="score">0</strong>"#));
}

#[tokio::test]
async fn test_submit_repeated_answer_uses_first_value() {
    let (app, _) = app();
    let response = app
        .oneshot(form_post("/submit", "store_name=Moda&q2=no&q2=yes&q1=yes&q1=no"))
        .await
        .unwrap();

    let page = body_text(response).await;
    assert!(page.contains(r#"<strong id="score">20</strong>"#));
}

#[tokio::test]
async fn test_submit_all_yes_scores_hundred() {
    let (app, _) = app();
    let response = app
        .oneshot(form_post("/submit", "store_name=X&q1=yes&q2=yes&q3=yes&q4=yes&q5=yes"))
        .await
        .unwrap();

    let page = body_text(response).await;
    assert!(page.contains(r#"<strong id="score">100</strong>"#));
}

#[tokio::test]
async fn test_submit_escapes_store_name() {
    let (app, _) = app();
    let response = app
        .oneshot(form_post("/submit", "store_name=%3Cscript%3E"))
        .await
        .unwrap();

    let page = body_text(response).await;
    assert!(page.contains("&lt;script&gt;"));
    assert!(!page.contains("<script>"));
}

// ============================================
// JSON API
// ============================================

#[tokio::test]
async fn test_health() {
    let (app, _) = app();
    let response = app.oneshot(get("/v1/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["status"], "healthy");
}

#[tokio::test]
async fn test_questions_endpoint() {
    let (app, _) = app();
    let json = body_json(app.oneshot(get("/v1/questions")).await.unwrap()).await;

    assert_eq!(json["data"]["max_score"], 100);
    let questions = json["data"]["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 5);
    assert_eq!(questions[1]["id"], "q2");
    assert_eq!(questions[1]["points"], 25);
}

#[tokio::test]
async fn test_score_endpoint() {
    let (app, _) = app();
    let response = app
        .oneshot(json_post(
            "/v1/score",
            r#"{"store_name":"Moda","answers":{"q1":"yes","q2":"yes","q3":"no","q4":"yes"}}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["score"], 60);
    assert_eq!(json["data"]["earned_points"], 60);
    assert_eq!(json["data"]["store_name"], "Moda");
    assert_eq!(json["data"]["breakdown"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_score_endpoint_defaults() {
    let (app, _) = app();
    let json = body_json(app.oneshot(json_post("/v1/score", "{}")).await.unwrap()).await;

    assert_eq!(json["data"]["score"], 0);
    assert_eq!(json["data"]["store_name"], "");
}

#[tokio::test]
async fn test_score_endpoint_rejects_malformed_json() {
    let (app, _) = app();
    let response = app.oneshot(json_post("/v1/score", "{not json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "API_BAD_REQUEST");
    assert_eq!(json["error"]["message"], "Invalid JSON body");
    assert!(json["error"]["details"].as_str().is_some_and(|d| !d.is_empty()));
}

#[tokio::test]
async fn test_not_found_has_no_details() {
    let (app, _) = app();
    let json = body_json(app.oneshot(get("/missing")).await.unwrap()).await;
    assert!(json["error"].get("details").is_none());
}

#[tokio::test]
async fn test_stats_endpoint() {
    let (app, stats) = app();
    stats.record_completed(40);
    stats.record_completed(80);

    let json = body_json(app.oneshot(get("/v1/stats")).await.unwrap()).await;
    assert_eq!(json["data"]["audits_completed"], 2);
    assert_eq!(json["data"]["average_score"], 60.0);
}

#[tokio::test]
async fn test_unknown_route() {
    let (app, _) = app();
    let response = app.oneshot(get("/nowhere")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "API_NOT_FOUND");
}

// ============================================
// Custom question sets
// ============================================

#[tokio::test]
async fn test_custom_question_set() {
    let questions = QuestionSet::new(vec![
        Question::new("door", "Door clean?", 1),
        Question::new("lights", "Lights on?", 2),
    ])
    .unwrap();
    let (app, _) = app_with(questions);

    let response = app.oneshot(form_post("/submit", "store_name=A&door=yes")).await.unwrap();
    let page = body_text(response).await;
    assert!(page.contains(r#"<strong id="score">33</strong>"#));
}

#[tokio::test]
async fn test_empty_question_set_scores_zero() {
    let (app, _) = app_with(QuestionSet::new(Vec::new()).unwrap());

    let response = app.oneshot(form_post("/submit", "store_name=A&q1=yes")).await.unwrap();
    let page = body_text(response).await;
    assert!(page.contains(r#"<strong id="score">0</strong>"#));
}
