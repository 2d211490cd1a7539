use crate::error::QuizError;
use crate::metrics::{QUESTIONS_SERVED_TOTAL, QUIZ_SCORE_PERCENTAGE, QUIZ_SUBMISSIONS_TOTAL};
use crate::models::{Question, QuizResults, QuizSubmission};

use super::catalog::{display_category, normalize_category, Catalog, RANDOM_CATEGORY};
use super::ledger::{ScoreLedger, Standing};
use super::scorer::calculate_score;
use super::shuffle::ShuffleEngine;

/// Questions picked for one quiz, tagged with the normalized category.
#[derive(Debug, Clone)]
pub struct QuestionSet {
    pub category: String,
    pub questions: Vec<Question>,
}

/// Owns the catalog, the score ledger and the shuffler. Constructed once at
/// startup and shared by every request handler.
pub struct QuizService {
    catalog: Catalog,
    ledger: ScoreLedger,
    shuffler: ShuffleEngine,
}

impl QuizService {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_shuffler(catalog, ShuffleEngine::new())
    }

    pub fn with_shuffler(catalog: Catalog, shuffler: ShuffleEngine) -> Self {
        let ledger = ScoreLedger::new(
            std::iter::once(RANDOM_CATEGORY).chain(catalog.category_keys()),
        );
        Self {
            catalog,
            ledger,
            shuffler,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    /// Display names of every category, sorted, followed by "Random".
    pub fn list_categories(&self) -> Result<Vec<String>, QuizError> {
        if self.catalog.is_empty() {
            return Err(QuizError::ServiceUnavailable);
        }

        let mut categories: Vec<String> =
            self.catalog.category_keys().map(display_category).collect();
        categories.sort();
        categories.push(display_category(RANDOM_CATEGORY));
        Ok(categories)
    }

    /// Shuffled questions for `category`. An empty category name selects the
    /// random pool, which is capped by the shuffler's random limit.
    pub fn get_questions(&self, category: &str) -> Result<QuestionSet, QuizError> {
        if self.catalog.is_empty() {
            return Err(QuizError::ServiceUnavailable);
        }

        let mut category = normalize_category(category);
        if category.is_empty() {
            category = RANDOM_CATEGORY.to_string();
        }

        let questions = if category == RANDOM_CATEGORY {
            self.shuffler.pick_random(&self.catalog)
        } else {
            let pool = self
                .catalog
                .questions(&category)
                .ok_or_else(|| QuizError::UnknownCategory(category.clone()))?;
            self.shuffler.shuffle(pool)
        };

        if questions.is_empty() {
            return Err(QuizError::NoQuestionsAvailable(category));
        }

        QUESTIONS_SERVED_TOTAL
            .with_label_values(&[category.as_str()])
            .inc_by(questions.len() as u64);
        tracing::debug!(
            "Selected {} questions from the {} category",
            questions.len(),
            category
        );

        Ok(QuestionSet {
            category,
            questions,
        })
    }

    /// Grades a submission, compares it against earlier submissions in the
    /// same category and records it.
    pub fn submit_answers(&self, submission: &QuizSubmission) -> Result<QuizResults, QuizError> {
        if self.catalog.is_empty() || self.ledger.is_empty() {
            return Err(QuizError::ServiceUnavailable);
        }

        if submission.question_responses.is_empty() {
            return Err(QuizError::invalid_submission("No answers were submitted."));
        }

        let category = normalize_category(&submission.category);
        if category.is_empty() {
            return Err(QuizError::invalid_submission("A category must be provided."));
        }
        if !self.ledger.contains(&category) {
            return Err(QuizError::UnknownCategory(category));
        }

        let score = calculate_score(&submission.question_responses).map_err(|err| {
            QuizError::invalid_submission(format!("Failed to process submission: {}", err))
        })?;

        let standing = self.ledger.record(&category, score.percentage)?;

        QUIZ_SUBMISSIONS_TOTAL
            .with_label_values(&[category.as_str()])
            .inc();
        QUIZ_SCORE_PERCENTAGE
            .with_label_values(&[category.as_str()])
            .observe(score.percentage);
        tracing::info!(
            "Submission graded: category={}, score={}, comparison={:.1}%, prior_submissions={}",
            category,
            score,
            standing.comparison,
            standing.prior_submissions
        );

        Ok(QuizResults {
            score_string: score.to_string(),
            score_percentage: score.percentage,
            comparison: comparison_message(&category, &standing),
        })
    }
}

/// A history of at most one earlier submission is reported as "first
/// quizzer" rather than as a percentage.
fn comparison_message(category: &str, standing: &Standing) -> String {
    if standing.prior_submissions <= 1 {
        format!("You are the first quizzer for the {} category.", category)
    } else {
        format!(
            "Your score for the {} category was better than {:.0}% of all quizzers.",
            category, standing.comparison
        )
    }
}
