use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Student selections keyed by the stable question id, valued by the label
/// the student picked in their randomized view.
pub type AnswerMap = HashMap<String, String>;

/// Per-question correctness captured at submission time, while the shuffled
/// view that produced the label is still in scope. Shuffled labels are
/// meaningless outside that view, so the resolved text and the correctness
/// boolean travel with the raw label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedAnswer {
    pub question_id: String,
    pub selected_label: Option<String>,
    pub selected_text: Option<String>,
    pub correct: bool,
}

/// One submitted attempt with its suggested score. Persistence belongs to
/// the surrounding application; this record only models the attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: String,
    pub assignment_id: String,
    pub answers: AnswerMap,
    pub recorded: Vec<RecordedAnswer>,
    pub suggested: ScoreResult,
    pub submitted_at: DateTime<Utc>,
}

/// Aggregated scoring outcome. `raw_score` is a suggestion for the grader;
/// the engine has no notion of a final grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub correct_count: u32,
    pub total_count: u32,
    pub raw_score: i32,
}

/// Per-question grading breakdown shown alongside the suggested score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResult {
    pub question_id: String,
    pub selected_label: Option<String>,
    pub correct_answer: String,
    pub correct: bool,
}
