use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::catalog::normalize_category;
use crate::error::QuizError;

/// Where a new score landed relative to the history it was compared against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Standing {
    /// Percentage of prior scores strictly below the new score.
    pub comparison: f64,
    /// History length before the new score was appended.
    pub prior_submissions: usize,
}

/// Per-category, append-only history of percentage scores.
///
/// Categories are fixed at construction; scoring into an unknown category is
/// an error rather than an implicit insert. A single mutex guards the whole
/// map, so [`ScoreLedger::record`] compares and appends as one unit.
#[derive(Debug, Default)]
pub struct ScoreLedger {
    scores: Mutex<HashMap<String, Vec<f64>>>,
}

impl ScoreLedger {
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let scores = categories
            .into_iter()
            .map(|category| (normalize_category(category.as_ref()), Vec::new()))
            .collect();
        Self {
            scores: Mutex::new(scores),
        }
    }

    /// Percentage of recorded scores in `category` strictly below `score`.
    /// Returns 0 when there is no history yet.
    pub fn compare(&self, category: &str, score: f64) -> Result<f64, QuizError> {
        let entries = self.entries();
        let history = lookup(&entries, category)?;
        validate_score(score)?;
        Ok(comparison_percentage(history, score))
    }

    pub fn append(&self, category: &str, score: f64) -> Result<(), QuizError> {
        let mut entries = self.entries();
        let history = lookup_mut(&mut entries, category)?;
        validate_score(score)?;
        history.push(score);
        Ok(())
    }

    /// Compares `score` against the existing history and appends it while
    /// holding the lock, so concurrent submissions never see each other half
    /// way through.
    pub fn record(&self, category: &str, score: f64) -> Result<Standing, QuizError> {
        let mut entries = self.entries();
        let history = lookup_mut(&mut entries, category)?;
        validate_score(score)?;

        let standing = Standing {
            comparison: comparison_percentage(history, score),
            prior_submissions: history.len(),
        };
        history.push(score);
        Ok(standing)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.entries().contains_key(&normalize_category(category))
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Snapshot of a category's history in insertion order.
    pub fn history(&self, category: &str) -> Option<Vec<f64>> {
        self.entries().get(&normalize_category(category)).cloned()
    }

    // Every mutation is a single push, so a poisoned guard still holds
    // consistent histories.
    fn entries(&self) -> MutexGuard<'_, HashMap<String, Vec<f64>>> {
        self.scores.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn lookup<'a>(
    entries: &'a HashMap<String, Vec<f64>>,
    category: &str,
) -> Result<&'a [f64], QuizError> {
    let key = normalize_category(category);
    entries
        .get(&key)
        .map(Vec::as_slice)
        .ok_or(QuizError::UnknownCategory(key))
}

fn lookup_mut<'a>(
    entries: &'a mut HashMap<String, Vec<f64>>,
    category: &str,
) -> Result<&'a mut Vec<f64>, QuizError> {
    let key = normalize_category(category);
    entries
        .get_mut(&key)
        .ok_or(QuizError::UnknownCategory(key))
}

fn validate_score(score: f64) -> Result<(), QuizError> {
    if (0.0..=100.0).contains(&score) {
        Ok(())
    } else {
        Err(QuizError::InvalidScore(score))
    }
}

fn comparison_percentage(history: &[f64], score: f64) -> f64 {
    if history.is_empty() {
        return 0.0;
    }
    let below = history.iter().filter(|&&prior| prior < score).count();
    (below as f64 / history.len() as f64) * 100.0
}
