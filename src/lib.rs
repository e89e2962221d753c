//! Store Audit Library
//!
//! Web form for store audits: the auditor names a store, answers a fixed
//! list of weighted yes/no questions and gets a 0-100 percentage score.
//! - `core`: question set and scorer
//! - `api`: page flow, JSON endpoints and router
//! - `models`: domain types, configuration, errors
//! - `utils`: constants and audit statistics

pub mod api;
pub mod core;
pub mod models;
pub mod utils;

pub use api::{create_router, AppState};
pub use crate::core::{percentage, AuditScorer, QuestionSet};
pub use models::{
    AnswerSet, AppError, AppResult, AuditResult, ErrorCode, Question, QuestionScore,
    ScoreBreakdown, ServerConfig,
};
pub use utils::{AuditStats, AuditStatsSnapshot};
