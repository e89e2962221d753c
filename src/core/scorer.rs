//! Audit Scoring Module
//! Turns yes/no answers into a 0-100 percentage of weighted points
//!
//! Every question contributes its points on an exact "yes" and nothing
//! otherwise. The percentage is taken on f64 and rounded half-to-even.

use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::models::errors::{AppError, AppResult};
use crate::models::types::{AnswerSet, AuditResult, Question, QuestionScore, ScoreBreakdown};
use crate::utils::constants::DEFAULT_QUESTIONS;

/// Ordered, validated, immutable list of audit questions.
///
/// `max_score` is derived on construction and cannot drift from the
/// questions it was computed from.
#[derive(Debug, Clone)]
pub struct QuestionSet {
    questions: Arc<[Question]>,
    max_score: u64,
}

impl QuestionSet {
    /// Validate and freeze a question list.
    ///
    /// Rejects empty ids, duplicate ids and zero-point questions. An empty
    /// list is accepted and scores everything as 0.
    pub fn new(questions: Vec<Question>) -> AppResult<Self> {
        let max_score = Self::validate(&questions)?;

        Ok(Self {
            questions: questions.into(),
            max_score,
        })
    }

    fn validate(questions: &[Question]) -> AppResult<u64> {
        let mut seen = HashSet::with_capacity(questions.len());
        let mut max_score: u64 = 0;

        for (position, question) in questions.iter().enumerate() {
            if question.id.trim().is_empty() {
                return Err(AppError::empty_question_id(position));
            }
            if !seen.insert(question.id.as_str()) {
                return Err(AppError::duplicate_question_id(&question.id));
            }
            if question.points == 0 {
                return Err(AppError::zero_points(&question.id));
            }
            max_score = max_score
                .checked_add(u64::from(question.points))
                .ok_or_else(AppError::points_overflow)?;
        }

        Ok(max_score)
    }

    /// The built-in five question store checklist
    pub fn builtin() -> Self {
        let questions: Vec<Question> = DEFAULT_QUESTIONS
            .iter()
            .map(|(id, text, points)| Question::new(*id, *text, *points))
            .collect();
        let max_score = questions.iter().map(|q| u64::from(q.points)).sum();
        Self {
            questions: questions.into(),
            max_score,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Sum of all point weights
    pub fn max_score(&self) -> u64 {
        self.max_score
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for QuestionSet {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Scores answer sets against a fixed question set
#[derive(Debug, Clone, Default)]
pub struct AuditScorer {
    questions: QuestionSet,
}

impl AuditScorer {
    pub fn new(questions: QuestionSet) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    /// Percentage score (0-100) for a set of answers
    pub fn compute_score(&self, answers: &AnswerSet) -> u8 {
        percentage(self.earned_points(answers), self.questions.max_score())
    }

    /// Sum of points on questions answered "yes"
    pub fn earned_points(&self, answers: &AnswerSet) -> u64 {
        self.questions
            .questions()
            .iter()
            .filter(|q| answers.is_yes(&q.id))
            .map(|q| u64::from(q.points))
            .sum()
    }

    /// Per-question detail for a set of answers
    pub fn breakdown(&self, answers: &AnswerSet) -> ScoreBreakdown {
        let items: Vec<QuestionScore> = self
            .questions
            .questions()
            .iter()
            .map(|q| {
                let answered_yes = answers.is_yes(&q.id);
                QuestionScore {
                    id: q.id.clone(),
                    text: q.text.clone(),
                    answered_yes,
                    earned: if answered_yes { q.points } else { 0 },
                    points: q.points,
                }
            })
            .collect();

        let earned_points = items.iter().map(|i| u64::from(i.earned)).sum();

        ScoreBreakdown {
            items,
            earned_points,
            max_score: self.questions.max_score(),
        }
    }

    /// Score a full submission
    pub fn evaluate(&self, store_name: impl Into<String>, answers: &AnswerSet) -> AuditResult {
        let breakdown = self.breakdown(answers);
        let score = percentage(breakdown.earned_points, breakdown.max_score);
        let result = AuditResult {
            audit_id: Uuid::new_v4(),
            store_name: store_name.into(),
            score,
            breakdown,
        };
        debug!("{}", result.summary());
        result
    }
}

/// `round(earned / max * 100)` on f64 with ties to even; 0 when `max` is 0.
///
/// Division happens before the multiplication, so float error decides
/// near-ties: 23/40 gives 57.49999999999999 and rounds to 57.
pub fn percentage(earned: u64, max: u64) -> u8 {
    if max == 0 {
        return 0;
    }

    let ratio = earned.min(max) as f64 / max as f64;
    (ratio * 100.0).round_ties_even().clamp(0.0, 100.0) as u8
}
