//! Answer resolution and score aggregation.
//!
//! The resolver compares labels against the original, unshuffled question
//! set; shuffled labels are only valid inside the randomized view that
//! produced them, so cross-view grading goes through [`RecordedAnswer`]s
//! captured at submission time instead (see `attempt_service`).

use crate::models::question::{Question, QuestionSet, RandomizedQuestion};
use crate::models::submission::{AnswerMap, QuestionResult, RecordedAnswer, ScoreResult};

pub struct AnswerKeyResolver;

impl AnswerKeyResolver {
    /// True iff `selected_label` names the correct option of `question`.
    /// `question` must be the definition whose label space produced the
    /// selection.
    pub fn is_correct(question: &Question, selected_label: &str) -> bool {
        question.correct_answer == selected_label
    }
}

pub struct ScoringEngine;

impl ScoringEngine {
    /// Scores an answer map whose labels reference the original (unshuffled)
    /// question set. A missing answer counts as incorrect, never as an
    /// error; an empty set scores zero.
    pub fn score(set: &QuestionSet, answers: &AnswerMap, max_score: i32) -> ScoreResult {
        let (result, _) = Self::grade(set, answers, max_score);
        result
    }

    /// Like [`ScoringEngine::score`], with the per-question breakdown the
    /// grader sees next to the suggested score.
    pub fn grade(
        set: &QuestionSet,
        answers: &AnswerMap,
        max_score: i32,
    ) -> (ScoreResult, Vec<QuestionResult>) {
        let mut breakdown = Vec::with_capacity(set.len());
        let mut correct_count: u32 = 0;

        for question in set.iter() {
            let selected = answers.get(&question.id);
            let correct = selected
                .map(|label| AnswerKeyResolver::is_correct(question, label))
                .unwrap_or(false);
            if correct {
                correct_count += 1;
            }
            breakdown.push(QuestionResult {
                question_id: question.id.clone(),
                selected_label: selected.cloned(),
                correct_answer: question.correct_answer.clone(),
                correct,
            });
        }

        let total_count = set.len() as u32;
        let result = ScoreResult {
            correct_count,
            total_count,
            raw_score: proportional_score(correct_count, total_count, max_score),
        };

        tracing::debug!(
            "Scored submission: correct={}, total={}, raw_score={}",
            result.correct_count,
            result.total_count,
            result.raw_score
        );

        (result, breakdown)
    }

    /// Scores correctness booleans captured at submission time. Used when
    /// grading happens after the randomized view is gone; `total_count`
    /// covers every rendered question, answered or not.
    pub fn score_recorded(
        recorded: &[RecordedAnswer],
        total_count: u32,
        max_score: i32,
    ) -> ScoreResult {
        let correct_count = recorded.iter().filter(|r| r.correct).count() as u32;
        ScoreResult {
            correct_count,
            total_count,
            raw_score: proportional_score(correct_count, total_count, max_score),
        }
    }

    /// Captures per-question correctness against the randomized view the
    /// student actually saw, while its label space is still in scope.
    pub fn record_answers(view: &[RandomizedQuestion], answers: &AnswerMap) -> Vec<RecordedAnswer> {
        view.iter()
            .map(|rq| {
                let selected_label = answers.get(&rq.original_id).cloned();
                let selected_text = selected_label
                    .as_deref()
                    .and_then(|label| rq.option_by_label(label))
                    .map(|o| o.text.clone());
                let correct = selected_label
                    .as_deref()
                    .map(|label| label == rq.correct_answer)
                    .unwrap_or(false);
                RecordedAnswer {
                    question_id: rq.original_id.clone(),
                    selected_label,
                    selected_text,
                    correct,
                }
            })
            .collect()
    }
}

fn proportional_score(correct_count: u32, total_count: u32, max_score: i32) -> i32 {
    if total_count == 0 {
        return 0;
    }
    ((f64::from(correct_count) / f64::from(total_count)) * f64::from(max_score)).round() as i32
}
