//! Audit Statistics
//!
//! In-memory counters over the lifetime of the process:
//! - Audits started (question page shown)
//! - Audits rejected (missing store name, redirected)
//! - Audits completed and their average score
//!
//! Nothing identifying is kept; store names are never recorded here.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Snapshot of the counters for reporting
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AuditStatsSnapshot {
    pub audits_started: u64,
    pub audits_rejected: u64,
    pub audits_completed: u64,
    /// Mean score over completed audits, 0 when none completed
    pub average_score: f64,
    /// Period start timestamp
    pub period_start: i64,
    /// Period end timestamp
    pub period_end: i64,
}

impl AuditStatsSnapshot {
    /// One-line summary for logs
    pub fn summary(&self) -> String {
        format!(
            "started={} rejected={} completed={} avg_score={:.1}",
            self.audits_started, self.audits_rejected, self.audits_completed, self.average_score
        )
    }
}

/// Lock-free audit counters shared by all handlers
pub struct AuditStats {
    audits_started: AtomicU64,
    audits_rejected: AtomicU64,
    audits_completed: AtomicU64,
    score_sum: AtomicU64,
    session_start: i64,
}

impl AuditStats {
    pub fn new() -> Self {
        Self {
            audits_started: AtomicU64::new(0),
            audits_rejected: AtomicU64::new(0),
            audits_completed: AtomicU64::new(0),
            score_sum: AtomicU64::new(0),
            session_start: current_timestamp(),
        }
    }

    /// Question page shown for a named store
    pub fn record_started(&self) {
        self.audits_started.fetch_add(1, Ordering::Relaxed);
    }

    /// Audit start refused for a missing store name
    pub fn record_rejected(&self) {
        self.audits_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Submission scored
    pub fn record_completed(&self, score: u8) {
        self.audits_completed.fetch_add(1, Ordering::Relaxed);
        self.score_sum.fetch_add(u64::from(score), Ordering::Relaxed);
    }

    /// Get current statistics
    pub fn get_stats(&self) -> AuditStatsSnapshot {
        let completed = self.audits_completed.load(Ordering::Relaxed);
        let score_sum = self.score_sum.load(Ordering::Relaxed);

        let average_score = if completed > 0 {
            score_sum as f64 / completed as f64
        } else {
            0.0
        };

        AuditStatsSnapshot {
            audits_started: self.audits_started.load(Ordering::Relaxed),
            audits_rejected: self.audits_rejected.load(Ordering::Relaxed),
            audits_completed: completed,
            average_score,
            period_start: self.session_start,
            period_end: current_timestamp(),
        }
    }
}

impl Default for AuditStats {
    fn default() -> Self {
        Self::new()
    }
}

fn current_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}
