//! Error types for quiz authoring, randomization and scoring.
//!
//! Malformed-question errors are raised at construction/import time so a bad
//! assignment is rejected before any student is shown a randomized view.
//! Scoring never raises: missing answers and empty sets resolve to
//! well-defined fallback values instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    /// The declared correct answer does not match any option label.
    #[error("question {question_id}: correct answer \"{label}\" does not match any option")]
    UnknownCorrectAnswer { question_id: String, label: String },

    /// The declared correct answer matches more than one option label.
    #[error("question {question_id}: correct answer \"{label}\" matches {matches} options")]
    AmbiguousCorrectAnswer {
        question_id: String,
        label: String,
        matches: usize,
    },

    /// Fewer options than the configured fixed-choice minimum.
    #[error("question {question_id}: has {count} options, at least {min} required")]
    TooFewOptions {
        question_id: String,
        count: usize,
        min: usize,
    },

    /// An option with an empty text body.
    #[error("question {question_id}: option at position {position} has empty text")]
    EmptyOptionText {
        question_id: String,
        position: usize,
    },

    /// Two questions in one set share an id.
    #[error("duplicate question id \"{question_id}\" in question set")]
    DuplicateQuestionId { question_id: String },

    /// Two options in one question share a label.
    #[error("question {question_id}: duplicate option label \"{label}\"")]
    DuplicateOptionLabel { question_id: String, label: String },

    /// More options than the label alphabet can address.
    #[error("question {question_id}: {count} options exceed the {max}-letter label alphabet")]
    TooManyOptions {
        question_id: String,
        count: usize,
        max: usize,
    },

    /// Field-level validation failures on an authoring draft.
    #[error("invalid question draft: {0}")]
    InvalidDraft(#[from] validator::ValidationErrors),

    /// Question import payload was not valid JSON.
    #[error("question import failed: {0}")]
    ImportFailed(#[from] serde_json::Error),

    /// Submission attempted with questions still unanswered.
    #[error("{count} questions are still unanswered")]
    UnansweredQuestions { count: usize },
}

impl QuizError {
    /// Returns `true` for errors that indicate a malformed question
    /// definition (as opposed to a bad submission).
    pub fn is_malformed_question(&self) -> bool {
        matches!(
            self,
            QuizError::UnknownCorrectAnswer { .. }
                | QuizError::AmbiguousCorrectAnswer { .. }
                | QuizError::TooFewOptions { .. }
                | QuizError::EmptyOptionText { .. }
                | QuizError::DuplicateQuestionId { .. }
                | QuizError::DuplicateOptionLabel { .. }
                | QuizError::TooManyOptions { .. }
        )
    }
}
