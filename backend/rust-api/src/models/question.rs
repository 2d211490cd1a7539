use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,
    pub category: String,
    pub question: String,
    pub answers: Vec<String>,
    pub correct_answer_index: i64,
}

impl Question {
    /// Answer text for a 0-based index, if the index is in range.
    pub fn answer_text(&self, index: i64) -> Option<&str> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.answers.get(i))
            .map(String::as_str)
    }

    pub fn is_correct(&self, answer: i64) -> bool {
        self.correct_answer_index == answer
    }
}
