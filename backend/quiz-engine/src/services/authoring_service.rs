//! Question-set authoring and import.
//!
//! A bad assignment is rejected here, at creation/import time, so students
//! never hit a malformed question during randomization or scoring.

use uuid::Uuid;
use validator::Validate;

use crate::config::QuizConfig;
use crate::error::QuizError;
use crate::models::question::{
    label_for_position, AnswerOption, Question, QuestionDraft, QuestionSet, LABEL_ALPHABET_SIZE,
};

pub struct AuthoringService {
    min_options: usize,
}

impl AuthoringService {
    pub fn new(config: &QuizConfig) -> Self {
        Self {
            min_options: config.min_options,
        }
    }

    /// Builds a validated [`QuestionSet`] from authoring drafts, assigning
    /// fresh ids and positional labels A, B, C, ...
    ///
    /// The drafted `correct_answer` label is normalized to uppercase and
    /// must address one of the drafted option positions.
    pub fn build_question_set(&self, drafts: &[QuestionDraft]) -> Result<QuestionSet, QuizError> {
        let questions = drafts
            .iter()
            .map(|draft| self.build_question(draft))
            .collect::<Result<Vec<_>, _>>()?;

        let set = QuestionSet::new(questions)?;
        tracing::info!("Built question set: questions={}", set.len());
        Ok(set)
    }

    /// Imports drafts from a JSON array payload (the authoring UI's bulk
    /// import path) and builds the question set from them.
    pub fn import_json(&self, payload: &str) -> Result<QuestionSet, QuizError> {
        let drafts: Vec<QuestionDraft> = serde_json::from_str(payload)?;
        tracing::info!("Importing questions from JSON: count={}", drafts.len());
        self.build_question_set(&drafts)
    }

    fn build_question(&self, draft: &QuestionDraft) -> Result<Question, QuizError> {
        draft.validate()?;

        let id = Uuid::new_v4().to_string();

        if draft.options.len() < self.min_options {
            return Err(QuizError::TooFewOptions {
                question_id: id,
                count: draft.options.len(),
                min: self.min_options,
            });
        }
        if draft.options.len() > LABEL_ALPHABET_SIZE {
            return Err(QuizError::TooManyOptions {
                question_id: id,
                count: draft.options.len(),
                max: LABEL_ALPHABET_SIZE,
            });
        }

        for (position, text) in draft.options.iter().enumerate() {
            if text.trim().is_empty() {
                return Err(QuizError::EmptyOptionText {
                    question_id: id,
                    position,
                });
            }
        }

        let correct_answer = draft.correct_answer.trim().to_uppercase();
        let options: Vec<AnswerOption> = draft
            .options
            .iter()
            .enumerate()
            .map(|(i, text)| AnswerOption {
                label: label_for_position(i),
                text: text.clone(),
            })
            .collect();

        if !options.iter().any(|o| o.label == correct_answer) {
            return Err(QuizError::UnknownCorrectAnswer {
                question_id: id,
                label: correct_answer,
            });
        }

        Ok(Question {
            id,
            title: draft.title.clone(),
            options,
            correct_answer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthoringService {
        AuthoringService::new(&QuizConfig::default())
    }

    fn draft(title: &str, options: &[&str], correct: &str) -> QuestionDraft {
        QuestionDraft {
            title: title.to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
            correct_answer: correct.to_string(),
        }
    }

    #[test]
    fn builds_questions_with_positional_labels() {
        let set = service()
            .build_question_set(&[draft("Capital of France?", &["Lyon", "Paris", "Nice"], "b")])
            .unwrap();

        let q = &set.questions()[0];
        assert_eq!(q.correct_answer, "B");
        assert_eq!(q.options[0].label, "A");
        assert_eq!(q.options[2].label, "C");
        assert_eq!(q.ensure_single_correct().unwrap().text, "Paris");
        assert!(!q.id.is_empty());
    }

    #[test]
    fn rejects_out_of_range_correct_label() {
        let err = service()
            .build_question_set(&[draft("Q", &["a", "b", "c", "d"], "Z")])
            .unwrap_err();
        assert!(matches!(err, QuizError::UnknownCorrectAnswer { .. }));
        assert!(err.is_malformed_question());
    }

    #[test]
    fn rejects_empty_title() {
        let err = service()
            .build_question_set(&[draft("", &["a", "b"], "A")])
            .unwrap_err();
        assert!(matches!(err, QuizError::InvalidDraft(_)));
    }

    #[test]
    fn rejects_blank_option_text() {
        let err = service()
            .build_question_set(&[draft("Q", &["a", "  ", "c"], "A")])
            .unwrap_err();
        assert!(matches!(err, QuizError::EmptyOptionText { position: 1, .. }));
    }

    #[test]
    fn rejects_single_option_question() {
        let err = service()
            .build_question_set(&[draft("Q", &["only"], "A")])
            .unwrap_err();
        assert!(matches!(err, QuizError::InvalidDraft(_)));
    }

    #[test]
    fn honors_configured_minimum_options() {
        let cfg = QuizConfig {
            min_options: 4,
            ..QuizConfig::default()
        };
        let err = AuthoringService::new(&cfg)
            .build_question_set(&[draft("Q", &["a", "b", "c"], "A")])
            .unwrap_err();
        assert!(matches!(err, QuizError::TooFewOptions { count: 3, min: 4, .. }));
    }

    #[test]
    fn imports_question_array_from_json() {
        let payload = r#"[
            {"title": "2 + 2?", "options": ["3", "4", "5", "6"], "correct_answer": "B"},
            {"title": "3 * 3?", "options": ["6", "8", "9", "12"], "correct_answer": "C"}
        ]"#;

        let set = service().import_json(payload).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.questions()[1].ensure_single_correct().unwrap().text, "9");
    }

    #[test]
    fn import_rejects_non_array_payload() {
        let err = service().import_json(r#"{"title": "not a list"}"#).unwrap_err();
        assert!(matches!(err, QuizError::ImportFailed(_)));
    }
}
