use serde::Serialize;

use crate::models::domain::{Difficulty, Level, Profile, Question};

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub refresh_token: String,
    pub username: String,
    pub email: String,
}

/// A question card as shown to the client. Deliberately omits the
/// correct-option index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub id: i64,
    pub question: String,
    pub options: Vec<String>,
    pub difficulty: Difficulty,
}

impl From<&Question> for QuestionView {
    fn from(question: &Question) -> Self {
        QuestionView {
            id: question.id,
            question: question.question.clone(),
            options: question.options.clone(),
            difficulty: question.difficulty,
        }
    }
}

/// Snapshot of an in-flight (or finished) quiz run.
#[derive(Debug, Serialize)]
pub struct QuizView {
    pub current_question: usize,
    pub question_count: usize,
    pub score: u32,
    pub is_complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionView>,
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub correct: bool,
    pub score: u32,
    pub current_question: usize,
    pub question_count: usize,
    pub is_complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion: Option<CompletionNotification>,
}

/// One-time signal carrying the final score when a quiz run ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionNotification {
    pub final_score: u32,
    pub question_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub username: String,
    pub current_level: Level,
    pub total_score: i64,
}

impl LeaderboardEntry {
    pub fn from_profile(rank: usize, profile: &Profile) -> Self {
        LeaderboardEntry {
            rank,
            username: profile.username.clone(),
            current_level: profile.current_level,
            total_score: profile.total_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_view_hides_correct_answer() {
        let question = Question::new(
            2,
            "Which animal says 'meow'?",
            vec!["Dog".into(), "Cat".into(), "Bird".into(), "Fish".into()],
            1,
            Difficulty::Easy,
        );

        let view = QuestionView::from(&question);
        let json = serde_json::to_string(&view).unwrap();

        assert!(json.contains("meow"));
        assert!(!json.contains("correct_answer"));
    }

    #[test]
    fn leaderboard_entry_carries_rank_and_level() {
        let mut profile = Profile::new("account-1", "SuperLearner123");
        profile.total_score = 12;
        profile.current_level = Level::Explorer;

        let entry = LeaderboardEntry::from_profile(1, &profile);
        assert_eq!(entry.rank, 1);
        assert_eq!(entry.username, "SuperLearner123");
        assert_eq!(entry.current_level, Level::Explorer);
        assert_eq!(entry.total_score, 12);
    }

    #[test]
    fn quiz_view_omits_question_once_complete() {
        let view = QuizView {
            current_question: 5,
            question_count: 5,
            score: 4,
            is_complete: true,
            question: None,
        };

        let json = serde_json::to_string(&view).unwrap();
        assert!(!json.contains("\"question\":"));
        assert!(json.contains("\"is_complete\":true"));
    }
}
