pub mod question;
pub mod submission;

pub use question::{AnswerOption, Question, QuestionDraft, QuestionSet, RandomizedQuestion};
pub use submission::{AnswerMap, QuestionResult, RecordedAnswer, ScoreResult, SubmissionRecord};
