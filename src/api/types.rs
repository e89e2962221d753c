//! API Request/Response Types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::types::{AuditResult, Question, QuestionScore};

/// API Response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    pub latency_ms: f64,
    pub timestamp: i64,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T, latency_ms: f64) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            latency_ms,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(error: ApiError, latency_ms: f64) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            latency_ms,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

/// API Error
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

// ============================================
// Health
// ============================================

#[derive(Debug, Serialize)]
pub struct HealthData {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

// ============================================
// Questions
// ============================================

#[derive(Debug, Serialize)]
pub struct QuestionsData {
    pub questions: Vec<Question>,
    pub max_score: u64,
}

// ============================================
// Scoring
// ============================================

#[derive(Debug, Default, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub answers: HashMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct ScoreData {
    pub audit_id: Uuid,
    pub store_name: String,
    pub score: u8,
    pub earned_points: u64,
    pub max_score: u64,
    pub breakdown: Vec<QuestionScore>,
}

impl From<AuditResult> for ScoreData {
    fn from(result: AuditResult) -> Self {
        Self {
            audit_id: result.audit_id,
            store_name: result.store_name,
            score: result.score,
            earned_points: result.breakdown.earned_points,
            max_score: result.breakdown.max_score,
            breakdown: result.breakdown.items,
        }
    }
}
