//! Per-assignment session seed storage.
//!
//! Within one attempt at an assignment, every re-render (question
//! navigation, dialog reopen) must see the same shuffle, so the seed is
//! stored keyed by assignment id. A fresh attempt gets a fresh seed via
//! `clear`. Seeds are fairness entropy only; they never survive the store's
//! own lifetime and are never security-sensitive.

use std::collections::HashMap;

use chrono::Utc;
use rand::Rng;

/// Key-value backing for session seeds. The store lifetime policy
/// (clear on fresh attempt, retain while a submission exists) is driven by
/// the caller, not inferred here.
pub trait SeedStore {
    fn get(&self, key: &str) -> Option<i64>;
    fn set(&mut self, key: &str, seed: i64);
    fn remove(&mut self, key: &str);
}

/// Default process-local backing, scoped to one student's session.
#[derive(Debug, Default)]
pub struct InMemorySeedStore {
    seeds: HashMap<String, i64>,
}

impl InMemorySeedStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SeedStore for InMemorySeedStore {
    fn get(&self, key: &str) -> Option<i64> {
        self.seeds.get(key).copied()
    }

    fn set(&mut self, key: &str, seed: i64) {
        self.seeds.insert(key.to_string(), seed);
    }

    fn remove(&mut self, key: &str) {
        self.seeds.remove(key);
    }
}

pub struct SessionSeedStore<S: SeedStore = InMemorySeedStore> {
    store: S,
}

impl SessionSeedStore<InMemorySeedStore> {
    pub fn new() -> Self {
        Self {
            store: InMemorySeedStore::new(),
        }
    }
}

impl Default for SessionSeedStore<InMemorySeedStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SeedStore> SessionSeedStore<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Returns the seed bound to `assignment_id`, creating one on first use.
    /// Stable until [`SessionSeedStore::clear`] discards it.
    pub fn get_or_create(&mut self, assignment_id: &str) -> i64 {
        let key = seed_key(assignment_id);
        if let Some(seed) = self.store.get(&key) {
            return seed;
        }

        let seed = fresh_seed();
        tracing::debug!(
            "Created session seed: assignment={}, seed={}",
            assignment_id,
            seed
        );
        self.store.set(&key, seed);
        seed
    }

    /// Discards the seed so the next render re-randomizes. Must only be
    /// called when a fresh attempt begins and no submission exists yet;
    /// see [`SessionSeedStore::begin_attempt`].
    pub fn clear(&mut self, assignment_id: &str) {
        self.store.remove(&seed_key(assignment_id));
    }

    /// Applies the attempt-lifecycle policy: a fresh attempt on an
    /// unsubmitted assignment re-randomizes, while an assignment with a
    /// pending or graded submission keeps its seed untouched.
    pub fn begin_attempt(&mut self, assignment_id: &str, has_submission: bool) {
        if has_submission {
            tracing::debug!(
                "Submission exists for assignment={}, keeping session seed",
                assignment_id
            );
            return;
        }
        self.clear(assignment_id);
    }
}

// Keys are namespaced per assignment so unrelated assignments never collide.
fn seed_key(assignment_id: &str) -> String {
    format!("quiz_seed:{}", assignment_id)
}

// Wall-clock millis plus jitter; variance is all that matters here.
fn fresh_seed() -> i64 {
    Utc::now().timestamp_millis() ^ i64::from(rand::rng().random::<u32>())
}
