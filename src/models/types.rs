//! Type definitions for the store audit
//! Questions, submitted answers and audit results

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::utils::constants::YES_ANSWER;

/// A single audit checklist item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier, also the form field name
    pub id: String,
    /// Prompt shown to the auditor
    pub text: String,
    /// Weight earned on a "yes" answer
    pub points: u32,
}

impl Question {
    pub fn new(id: impl Into<String>, text: impl Into<String>, points: u32) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            points,
        }
    }
}

/// Answers submitted for one audit, keyed by question id.
///
/// Lookups never fail: a question whose id is absent, or whose value is
/// anything other than `"yes"`, reads as a negative answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    values: HashMap<String, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw form pairs. The first value for a repeated key wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut values = HashMap::new();
        for (key, value) in pairs {
            values.entry(key.into()).or_insert_with(|| value.into());
        }
        Self { values }
    }

    /// Record an answer, replacing any earlier one for the same id
    pub fn insert(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.values.insert(id.into(), value.into());
    }

    /// Mark a question as answered "yes"
    pub fn with_yes(mut self, id: impl Into<String>) -> Self {
        self.insert(id, YES_ANSWER);
        self
    }

    /// True only when the submitted value is exactly `"yes"`
    pub fn is_yes(&self, id: &str) -> bool {
        self.values.get(id).is_some_and(|v| v == YES_ANSWER)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<HashMap<String, String>> for AnswerSet {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

/// Points earned on one question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionScore {
    pub id: String,
    pub text: String,
    pub answered_yes: bool,
    pub earned: u32,
    pub points: u32,
}

/// Per-question detail behind a score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub items: Vec<QuestionScore>,
    pub earned_points: u64,
    pub max_score: u64,
}

/// Final outcome of one audit submission
#[derive(Debug, Clone, Serialize)]
pub struct AuditResult {
    pub audit_id: Uuid,
    pub store_name: String,
    /// Percentage score, 0-100
    pub score: u8,
    pub breakdown: ScoreBreakdown,
}

impl AuditResult {
    /// One-line summary for logs
    pub fn summary(&self) -> String {
        format!(
            "Audit {} | Store: {:?} | Score: {} ({}/{} pts)",
            self.audit_id,
            self.store_name,
            self.score,
            self.breakdown.earned_points,
            self.breakdown.max_score
        )
    }
}
