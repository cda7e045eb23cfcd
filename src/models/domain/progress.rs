use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Append-only record of one completed quiz run.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProgressRecord {
    pub id: String,
    pub user_id: String,
    pub quiz_id: i64,
    pub score: u32,
    pub submitted_at: DateTime<Utc>,
}

impl ProgressRecord {
    pub fn new(user_id: &str, quiz_id: i64, score: u32) -> Self {
        ProgressRecord {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            quiz_id,
            score,
            submitted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_links_account_quiz_and_score() {
        let record = ProgressRecord::new("account-1", 5, 4);

        assert_eq!(record.user_id, "account-1");
        assert_eq!(record.quiz_id, 5);
        assert_eq!(record.score, 4);
        assert!(!record.id.is_empty());
    }

    #[test]
    fn records_get_distinct_ids() {
        let a = ProgressRecord::new("account-1", 1, 0);
        let b = ProgressRecord::new("account-1", 1, 0);
        assert_ne!(a.id, b.id);
    }
}
