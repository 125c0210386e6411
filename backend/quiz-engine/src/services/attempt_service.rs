//! Attempt orchestration: seed lifecycle, rendering and submission.
//!
//! Ties the session seed store, the randomizer and the scorer together the
//! way the student-facing flow uses them: a fresh attempt draws a new seed,
//! every re-render within the attempt reuses it, and submission captures
//! per-question correctness while the randomized label space is still in
//! scope.

use chrono::Utc;
use uuid::Uuid;

use crate::config::QuizConfig;
use crate::error::QuizError;
use crate::models::question::{QuestionSet, RandomizedQuestion};
use crate::models::submission::{AnswerMap, SubmissionRecord};
use crate::services::randomizer_service::QuestionRandomizer;
use crate::services::scoring_service::ScoringEngine;
use crate::services::seed_store::{InMemorySeedStore, SeedStore, SessionSeedStore};

pub struct AttemptService<S: SeedStore = InMemorySeedStore> {
    config: QuizConfig,
    randomizer: QuestionRandomizer,
    seeds: SessionSeedStore<S>,
}

impl AttemptService<InMemorySeedStore> {
    pub fn new(config: QuizConfig) -> Self {
        let randomizer = QuestionRandomizer::new(&config);
        Self {
            config,
            randomizer,
            seeds: SessionSeedStore::new(),
        }
    }
}

impl<S: SeedStore> AttemptService<S> {
    pub fn with_store(config: QuizConfig, store: S) -> Self {
        let randomizer = QuestionRandomizer::new(&config);
        Self {
            config,
            randomizer,
            seeds: SessionSeedStore::with_store(store),
        }
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// Starts (or restarts) an attempt. Re-randomizes only when the student
    /// has no pending or graded submission for the assignment.
    pub fn begin_attempt(&mut self, assignment_id: &str, has_submission: bool) {
        self.seeds.begin_attempt(assignment_id, has_submission);
    }

    /// Returns the randomized view for rendering. Stable across repeated
    /// calls within one attempt: the session seed is reused until the
    /// attempt is restarted via [`AttemptService::begin_attempt`].
    pub fn render_attempt(
        &mut self,
        assignment_id: &str,
        set: &QuestionSet,
    ) -> Result<Vec<RandomizedQuestion>, QuizError> {
        let seed = self.seeds.get_or_create(assignment_id);
        tracing::info!(
            "Rendering attempt: assignment={}, seed={}, questions={}",
            assignment_id,
            seed,
            set.len()
        );
        self.randomizer.randomize(set, seed)
    }

    /// Accepts a completed answer map against the view the student saw and
    /// produces a submission record with a suggested score.
    ///
    /// Rejects incomplete submissions; a human grader may still override
    /// the suggested score downstream.
    pub fn submit(
        &mut self,
        assignment_id: &str,
        view: &[RandomizedQuestion],
        answers: &AnswerMap,
        max_score: Option<i32>,
    ) -> Result<SubmissionRecord, QuizError> {
        let unanswered = view
            .iter()
            .filter(|q| !answers.contains_key(&q.original_id))
            .count();
        if unanswered > 0 {
            tracing::warn!(
                "Rejecting incomplete submission: assignment={}, unanswered={}",
                assignment_id,
                unanswered
            );
            return Err(QuizError::UnansweredQuestions { count: unanswered });
        }

        let max_score = max_score.unwrap_or(self.config.default_max_score);
        let recorded = ScoringEngine::record_answers(view, answers);
        let suggested = ScoringEngine::score_recorded(&recorded, view.len() as u32, max_score);

        tracing::info!(
            "Submission recorded: assignment={}, correct={}/{}, suggested_score={}",
            assignment_id,
            suggested.correct_count,
            suggested.total_count,
            suggested.raw_score
        );

        Ok(SubmissionRecord {
            id: Uuid::new_v4().to_string(),
            assignment_id: assignment_id.to_string(),
            answers: answers.clone(),
            recorded,
            suggested,
            submitted_at: Utc::now(),
        })
    }
}
