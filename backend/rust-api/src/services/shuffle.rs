use rand::{rngs::StdRng, Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

use super::catalog::Catalog;
use crate::models::Question;

pub const DEFAULT_RANDOM_QUESTION_LIMIT: usize = 5;

/// Returns a shuffled copy of `items`; the input is left untouched.
///
/// Walks the copy front to back, swapping each position `i` with a uniformly
/// chosen `j` in `[0, i]`, which yields every permutation with equal
/// probability.
pub fn shuffled_copy<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut copy = items.to_vec();
    for i in 0..copy.len() {
        let j = rng.random_range(0..=i);
        copy.swap(i, j);
    }
    copy
}

/// Question shuffler with an injectable random source.
pub struct ShuffleEngine {
    rng: Mutex<StdRng>,
    random_limit: usize,
}

impl ShuffleEngine {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Deterministic engine for reproducible orderings.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
            random_limit: DEFAULT_RANDOM_QUESTION_LIMIT,
        }
    }

    pub fn with_random_limit(mut self, limit: usize) -> Self {
        self.random_limit = limit;
        self
    }

    pub fn random_limit(&self) -> usize {
        self.random_limit
    }

    pub fn shuffle(&self, questions: &[Question]) -> Vec<Question> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        shuffled_copy(questions, &mut *rng)
    }

    /// Pools every category, shuffles, and keeps at most `random_limit`.
    pub fn pick_random(&self, catalog: &Catalog) -> Vec<Question> {
        let mut selection = self.shuffle(&catalog.all_questions());
        selection.truncate(self.random_limit);
        selection
    }
}

impl Default for ShuffleEngine {
    fn default() -> Self {
        Self::new()
    }
}
