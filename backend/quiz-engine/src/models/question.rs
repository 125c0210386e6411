use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::QuizError;

/// Labels are single letters assigned strictly by position (A, B, C, ...).
pub const LABEL_ALPHABET_SIZE: usize = 26;

/// Label for the option at `position` (0 -> "A", 1 -> "B", ...).
///
/// Callers must keep `position` below [`LABEL_ALPHABET_SIZE`]; question
/// construction rejects larger option lists.
pub fn label_for_position(position: usize) -> String {
    debug_assert!(position < LABEL_ALPHABET_SIZE);
    ((b'A' + position as u8) as char).to_string()
}

/// One selectable option of a multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub label: String,
    pub text: String,
}

/// A single-correct-answer multiple-choice question as the grader holds it.
///
/// `id` is stable across shuffles; `correct_answer` references exactly one
/// label in `options` (enforced by [`QuestionSet::new`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub title: String,
    pub options: Vec<AnswerOption>,
    pub correct_answer: String,
}

impl Question {
    /// Returns the single option named by `correct_answer`, or a
    /// malformed-question error when zero or multiple options match.
    pub fn ensure_single_correct(&self) -> Result<&AnswerOption, QuizError> {
        let mut matched = self.options.iter().filter(|o| o.label == self.correct_answer);

        let first = matched.next().ok_or_else(|| QuizError::UnknownCorrectAnswer {
            question_id: self.id.clone(),
            label: self.correct_answer.clone(),
        })?;

        let extra = matched.count();
        if extra > 0 {
            return Err(QuizError::AmbiguousCorrectAnswer {
                question_id: self.id.clone(),
                label: self.correct_answer.clone(),
                matches: extra + 1,
            });
        }

        Ok(first)
    }

    fn ensure_well_formed(&self) -> Result<(), QuizError> {
        if self.options.len() > LABEL_ALPHABET_SIZE {
            return Err(QuizError::TooManyOptions {
                question_id: self.id.clone(),
                count: self.options.len(),
                max: LABEL_ALPHABET_SIZE,
            });
        }

        for (i, option) in self.options.iter().enumerate() {
            if self.options[..i].iter().any(|o| o.label == option.label) {
                return Err(QuizError::DuplicateOptionLabel {
                    question_id: self.id.clone(),
                    label: option.label.clone(),
                });
            }
        }

        self.ensure_single_correct().map(|_| ())
    }
}

/// An ordered, validated set of questions with unique ids.
///
/// Construction is the fail-fast point for malformed questions: a set that
/// builds successfully can always be randomized and scored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<Question>", into = "Vec<Question>")]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        for (i, question) in questions.iter().enumerate() {
            if questions[..i].iter().any(|q| q.id == question.id) {
                return Err(QuizError::DuplicateQuestionId {
                    question_id: question.id.clone(),
                });
            }
            question.ensure_well_formed()?;
        }

        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    /// Looks up a question by its stable id.
    pub fn get(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }
}

impl TryFrom<Vec<Question>> for QuestionSet {
    type Error = QuizError;

    fn try_from(questions: Vec<Question>) -> Result<Self, Self::Error> {
        QuestionSet::new(questions)
    }
}

impl From<QuestionSet> for Vec<Question> {
    fn from(set: QuestionSet) -> Self {
        set.questions
    }
}

/// A question as rendered to one student within one attempt: question order,
/// option order and labels differ from the source, the answer key does not.
///
/// The option texts are the same multiset as the source question's;
/// `correct_answer` names the relabeled option whose text was correct before
/// the shuffle. `original_id` links back to the source [`Question`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomizedQuestion {
    pub original_id: String,
    pub title: String,
    pub options: Vec<AnswerOption>,
    pub correct_answer: String,
}

impl RandomizedQuestion {
    /// Option currently carrying `label`, if any.
    pub fn option_by_label(&self, label: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.label == label)
    }
}

/// Authoring-time question input: option texts in author order, correct
/// answer given as a positional label (A, B, ...). Ids and labels are
/// assigned on import.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuestionDraft {
    #[validate(length(min = 1, message = "question title must not be empty"))]
    pub title: String,
    #[validate(length(min = 2, message = "a question needs at least two options"))]
    pub options: Vec<String>,
    #[validate(length(min = 1, message = "correct answer label must not be empty"))]
    pub correct_answer: String,
}
