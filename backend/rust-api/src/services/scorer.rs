use std::fmt;

use crate::error::QuizError;
use crate::models::AnswerResponse;

/// Graded result of a submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
    pub percentage: f64,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}

/// Grades a submission. Any answer index other than the question's correct
/// index, including negative or out-of-range values, counts as wrong.
pub fn calculate_score(responses: &[AnswerResponse]) -> Result<Score, QuizError> {
    if responses.is_empty() {
        return Err(QuizError::invalid_submission("no answers were submitted"));
    }

    let mut correct = 0;
    for response in responses {
        let question = response
            .question
            .as_ref()
            .ok_or_else(|| QuizError::invalid_submission("one or more answers were invalid"))?;
        if question.is_correct(response.answer) {
            correct += 1;
        }
    }

    let total = responses.len();
    Ok(Score {
        correct,
        total,
        percentage: (correct as f64 / total as f64) * 100.0,
    })
}
