//! Centralized Error Handling Module
//!
//! Every failure carries a unique error code so log lines can be grepped
//! and API clients can branch on a stable string.
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR
//! - CFG_xxx: Configuration errors
//! - AUDIT_xxx: Question set errors
//! - API_xxx: API errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt;

use crate::api::types::{ApiError, ApiResponse};

/// Application-wide error type
#[derive(Debug)]
pub struct AppError {
    /// Unique error code for logging/monitoring
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new AppError
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create AppError with source error
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Unique error codes for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // ============================================
    // Configuration Errors
    // ============================================
    /// Invalid configuration value (port, debug toggle)
    ConfigInvalidValue,
    /// Question file could not be read
    ConfigQuestionsUnreadable,
    /// Question file is not valid JSON
    ConfigQuestionsMalformed,

    // ============================================
    // Question Set Errors
    // ============================================
    /// Question has an empty id
    AuditEmptyQuestionId,
    /// Two questions share an id
    AuditDuplicateQuestionId,
    /// Question carries zero points
    AuditZeroPoints,
    /// Point weights overflow the max score
    AuditPointsOverflow,

    // ============================================
    // API Errors
    // ============================================
    /// Invalid request format
    ApiBadRequest,
    /// Resource not found
    ApiNotFound,

    // ============================================
    // Generic Errors
    // ============================================
    /// Unknown error
    Unknown,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigInvalidValue => "CFG_INVALID_VALUE",
            Self::ConfigQuestionsUnreadable => "CFG_QUESTIONS_UNREADABLE",
            Self::ConfigQuestionsMalformed => "CFG_QUESTIONS_MALFORMED",

            Self::AuditEmptyQuestionId => "AUDIT_EMPTY_QUESTION_ID",
            Self::AuditDuplicateQuestionId => "AUDIT_DUPLICATE_QUESTION_ID",
            Self::AuditZeroPoints => "AUDIT_ZERO_POINTS",
            Self::AuditPointsOverflow => "AUDIT_POINTS_OVERFLOW",

            Self::ApiBadRequest => "API_BAD_REQUEST",
            Self::ApiNotFound => "API_NOT_FOUND",

            Self::Unknown => "UNKNOWN_ERROR",
        }
    }

    /// Get HTTP status code for API responses
    pub fn http_status(&self) -> u16 {
        match self {
            Self::ApiBadRequest => 400,
            Self::ApiNotFound => 404,
            _ => 500,
        }
    }

    /// Check if the error stems from startup configuration
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::ConfigInvalidValue
                | Self::ConfigQuestionsUnreadable
                | Self::ConfigQuestionsMalformed
                | Self::AuditEmptyQuestionId
                | Self::AuditDuplicateQuestionId
                | Self::AuditZeroPoints
                | Self::AuditPointsOverflow
        )
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// Invalid configuration value
    pub fn invalid_config(key: &str, value: &str) -> Self {
        Self::new(
            ErrorCode::ConfigInvalidValue,
            format!("Invalid value for {}: {:?}", key, value),
        )
    }

    /// Question with an empty id
    pub fn empty_question_id(position: usize) -> Self {
        Self::new(
            ErrorCode::AuditEmptyQuestionId,
            format!("Question #{} has an empty id", position + 1),
        )
    }

    /// Duplicate question id
    pub fn duplicate_question_id(id: &str) -> Self {
        Self::new(
            ErrorCode::AuditDuplicateQuestionId,
            format!("Duplicate question id: {}", id),
        )
    }

    /// Question without weight
    pub fn zero_points(id: &str) -> Self {
        Self::new(
            ErrorCode::AuditZeroPoints,
            format!("Question {} must carry at least one point", id),
        )
    }

    /// Point sum does not fit
    pub fn points_overflow() -> Self {
        Self::new(
            ErrorCode::AuditPointsOverflow,
            "Sum of question points overflows",
        )
    }
}

// ============================================
// Result type alias
// ============================================

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

// ============================================
// HTTP rendering
// ============================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ApiResponse::error(
            ApiError {
                code: self.code_str().to_string(),
                details: self.source.as_ref().map(|e| e.to_string()),
                message: self.message,
            },
            0.0,
        );
        (status, Json(body)).into_response()
    }
}

// ============================================
// Conversion from common error types
// ============================================

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        Self::new(ErrorCode::Unknown, err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorCode::ConfigQuestionsUnreadable, "IO error", err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(ErrorCode::ConfigQuestionsMalformed, "JSON parse error", err)
    }
}
