//! Deterministic question and option randomization.
//!
//! One attempt seed drives the question order; each question then derives a
//! sub-seed from `(seed, position)` so option orders differ between
//! questions but reproduce exactly on re-render. Correctness travels with
//! the option itself through the shuffle (a transient tag, stripped before
//! the view is returned), never with its position or its original label.

use crate::config::QuizConfig;
use crate::error::QuizError;
use crate::models::question::{
    label_for_position, AnswerOption, Question, QuestionSet, RandomizedQuestion,
};
use crate::utils::rng::SeededRng;
use crate::utils::shuffle::fisher_yates;

// Internal pairing of an option with its source-correctness tag. Never part
// of the public view, so the answer key cannot leak to the rendering layer.
#[derive(Debug, Clone)]
struct TaggedOption {
    option: AnswerOption,
    is_correct_source: bool,
}

pub struct QuestionRandomizer {
    shuffle_questions: bool,
    shuffle_options: bool,
}

impl QuestionRandomizer {
    pub fn new(config: &QuizConfig) -> Self {
        Self {
            shuffle_questions: config.shuffle_questions,
            shuffle_options: config.shuffle_options,
        }
    }

    /// Produces the randomized view of `set` for the attempt owning `seed`.
    /// Calling twice with the same seed yields an identical view.
    pub fn randomize(
        &self,
        set: &QuestionSet,
        seed: i64,
    ) -> Result<Vec<RandomizedQuestion>, QuizError> {
        if set.is_empty() {
            return Ok(Vec::new());
        }

        let ordered: Vec<Question> = if self.shuffle_questions {
            let mut rng = SeededRng::new(seed);
            fisher_yates(set.questions(), &mut rng)
        } else {
            set.questions().to_vec()
        };

        let view = ordered
            .iter()
            .enumerate()
            .map(|(idx, question)| {
                self.randomize_question(question, seed.wrapping_add(idx as i64))
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            "Randomized question set: questions={}, seed={}",
            view.len(),
            seed
        );

        Ok(view)
    }

    fn randomize_question(
        &self,
        question: &Question,
        sub_seed: i64,
    ) -> Result<RandomizedQuestion, QuizError> {
        // Tag before shuffling, against the source correct_answer label.
        question.ensure_single_correct()?;
        let tagged: Vec<TaggedOption> = question
            .options
            .iter()
            .map(|option| TaggedOption {
                option: option.clone(),
                is_correct_source: option.label == question.correct_answer,
            })
            .collect();

        let shuffled = if self.shuffle_options {
            let mut rng = SeededRng::new(sub_seed);
            fisher_yates(&tagged, &mut rng)
        } else {
            tagged
        };

        // Labels are reassigned strictly by new position.
        let correct_position = shuffled
            .iter()
            .position(|t| t.is_correct_source)
            .ok_or_else(|| QuizError::UnknownCorrectAnswer {
                question_id: question.id.clone(),
                label: question.correct_answer.clone(),
            })?;

        let options: Vec<AnswerOption> = shuffled
            .into_iter()
            .enumerate()
            .map(|(i, t)| AnswerOption {
                label: label_for_position(i),
                text: t.option.text,
            })
            .collect();

        Ok(RandomizedQuestion {
            original_id: question.id.clone(),
            title: question.title.clone(),
            options,
            correct_answer: label_for_position(correct_position),
        })
    }
}
