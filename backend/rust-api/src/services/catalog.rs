use anyhow::{Context, Result};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::models::Question;

/// Virtual category that pools every real category.
pub const RANDOM_CATEGORY: &str = "random";

/// Category keys are case-insensitive and ignore surrounding whitespace.
pub fn normalize_category(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Capitalizes the first character of a category key for display.
pub fn display_category(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Read-only, category-partitioned question set. Built once at startup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: BTreeMap<String, Vec<Question>>,
}

impl Catalog {
    pub fn new(raw: HashMap<String, Vec<Question>>) -> Self {
        let mut categories: BTreeMap<String, Vec<Question>> = BTreeMap::new();

        for (key, questions) in raw {
            let key = normalize_category(&key);
            if key.is_empty() {
                tracing::warn!(
                    "Skipping {} questions filed under an empty category key",
                    questions.len()
                );
                continue;
            }

            let bucket = categories.entry(key.clone()).or_default();
            for mut question in questions {
                if normalize_category(&question.category) != key {
                    tracing::warn!(
                        "Question {} declares category '{}' but is filed under '{}'; re-keying",
                        question.id,
                        question.category,
                        key
                    );
                }
                question.category = key.clone();

                if question.answer_text(question.correct_answer_index).is_none() {
                    tracing::warn!(
                        "Question {} in '{}' has correctAnswerIndex {} outside its {} answers",
                        question.id,
                        key,
                        question.correct_answer_index,
                        question.answers.len()
                    );
                }
                bucket.push(question);
            }
        }

        Self { categories }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: HashMap<String, Vec<Question>> =
            serde_json::from_str(json).context("failed to unmarshal question catalog JSON")?;
        Ok(Self::new(raw))
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!("Loading question catalog from {}", path.display());

        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read file {}", path.display()))?;
        let catalog = Self::from_json_str(&data)
            .with_context(|| format!("invalid question file {}", path.display()))?;

        tracing::info!(
            "Question catalog loaded: {} categories, {} questions",
            catalog.category_count(),
            catalog.question_count()
        );
        Ok(catalog)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn contains(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    pub fn questions(&self, category: &str) -> Option<&[Question]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Category keys in lexicographic order.
    pub fn category_keys(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Every question across all categories, concatenated.
    pub fn all_questions(&self) -> Vec<Question> {
        self.categories.values().flatten().cloned().collect()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn question_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}
