use serde::{Deserialize, Serialize};

/// A multiple-choice question as stored in the quiz catalogue.
///
/// Immutable once loaded into a run; `correct_answer` indexes into
/// `options` and is never exposed to clients.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: u32,
    pub difficulty: Difficulty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Question {
    pub fn new(
        id: i64,
        question: &str,
        options: Vec<String>,
        correct_answer: u32,
        difficulty: Difficulty,
    ) -> Self {
        Question {
            id,
            question: question.to_string(),
            options,
            correct_answer,
            difficulty,
        }
    }
}
