//! API Request Handlers
//!
//! Page flow: `/` -> `/audit` -> `/submit`, plus the JSON endpoints.

use axum::{
    extract::{rejection::JsonRejection, Form, Json, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::pages;
use super::types::*;
use crate::core::scorer::{AuditScorer, QuestionSet};
use crate::models::errors::{AppError, AppResult, ErrorCode};
use crate::models::types::AnswerSet;
use crate::utils::constants::{APP_VERSION, FIELD_STORE_NAME};
use crate::utils::telemetry::{AuditStats, AuditStatsSnapshot};

/// Shared application state
pub struct AppState {
    pub scorer: AuditScorer,
    pub stats: Arc<AuditStats>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(questions: QuestionSet, stats: Arc<AuditStats>) -> Self {
        Self {
            scorer: AuditScorer::new(questions),
            stats,
            start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Plain `302 Found` back to the entry form
fn redirect_to_index() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}

// ============================================
// Page Flow
// ============================================

pub async fn index() -> Html<String> {
    Html(pages::index_page())
}

/// Raw form pairs; an unreadable body counts as no fields
fn form_pairs(form: Option<Form<Vec<(String, String)>>>) -> Vec<(String, String)> {
    form.map(|Form(pairs)| pairs).unwrap_or_default()
}

/// First value submitted under `key`
fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, value)| value.clone())
}

/// Show the question list, or bounce back when no store name was given
pub async fn start_audit(
    State(state): State<Arc<AppState>>,
    form: Option<Form<Vec<(String, String)>>>,
) -> Response {
    let pairs = form_pairs(form);
    let store_name = first_value(&pairs, FIELD_STORE_NAME).filter(|name| !name.is_empty());

    match store_name {
        Some(store_name) => {
            state.stats.record_started();
            info!(store = %store_name, "Audit started");
            Html(pages::audit_page(&store_name, state.scorer.questions())).into_response()
        }
        None => {
            state.stats.record_rejected();
            debug!("Audit start without store name, redirecting");
            redirect_to_index()
        }
    }
}

/// Score the submitted answers and show the result.
///
/// The store name is passed through unchecked; absent reads as empty.
pub async fn submit_audit(
    State(state): State<Arc<AppState>>,
    form: Option<Form<Vec<(String, String)>>>,
) -> Html<String> {
    let pairs = form_pairs(form);
    let store_name = first_value(&pairs, FIELD_STORE_NAME).unwrap_or_default();
    let answers = AnswerSet::from_pairs(pairs);

    let result = state.scorer.evaluate(store_name, &answers);
    state.stats.record_completed(result.score);

    info!(
        audit_id = %result.audit_id,
        store = %result.store_name,
        score = result.score,
        earned = result.breakdown.earned_points,
        max = result.breakdown.max_score,
        "Audit completed"
    );

    Html(pages::result_page(&result))
}

// ============================================
// Health Check
// ============================================

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<ApiResponse<HealthData>> {
    let start = Instant::now();

    let data = HealthData {
        status: "healthy".to_string(),
        version: APP_VERSION.to_string(),
        uptime_seconds: state.uptime_seconds(),
    };

    Json(ApiResponse::success(data, elapsed_ms(start)))
}

// ============================================
// Questions
// ============================================

pub async fn get_questions(State(state): State<Arc<AppState>>) -> Json<ApiResponse<QuestionsData>> {
    let start = Instant::now();
    let questions = state.scorer.questions();

    let data = QuestionsData {
        questions: questions.questions().to_vec(),
        max_score: questions.max_score(),
    };

    Json(ApiResponse::success(data, elapsed_ms(start)))
}

// ============================================
// Scoring
// ============================================

pub async fn score_audit(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> AppResult<Json<ApiResponse<ScoreData>>> {
    let start = Instant::now();

    let Json(req) = payload.map_err(|rejection| {
        AppError::with_source(ErrorCode::ApiBadRequest, "Invalid JSON body", rejection)
    })?;

    let answers = AnswerSet::from(req.answers);
    let result = state
        .scorer
        .evaluate(req.store_name.unwrap_or_default(), &answers);
    state.stats.record_completed(result.score);

    info!(
        audit_id = %result.audit_id,
        store = %result.store_name,
        score = result.score,
        "Audit scored via API"
    );

    Ok(Json(ApiResponse::success(result.into(), elapsed_ms(start))))
}

// ============================================
// Statistics
// ============================================

pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<ApiResponse<AuditStatsSnapshot>> {
    let start = Instant::now();
    Json(ApiResponse::success(state.stats.get_stats(), elapsed_ms(start)))
}

// ============================================
// Fallback
// ============================================

pub async fn not_found() -> AppError {
    AppError::new(ErrorCode::ApiNotFound, "No such route")
}
