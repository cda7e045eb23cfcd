use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-account record of display name, level and cumulative score.
///
/// Created at first successful authentication, updated after each
/// completed quiz run.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    pub id: String,
    pub username: String,
    pub current_level: Level,
    pub total_score: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum Level {
    #[default]
    Beginner,
    Explorer,
    Master,
}

impl Level {
    /// Level label earned at a given cumulative score.
    pub fn for_total_score(total_score: i64) -> Self {
        match total_score {
            s if s >= 50 => Level::Master,
            s if s >= 10 => Level::Explorer,
            _ => Level::Beginner,
        }
    }
}

impl Profile {
    pub fn new(id: &str, username: &str) -> Self {
        Profile {
            id: id.to_string(),
            username: username.to_string(),
            current_level: Level::Beginner,
            total_score: 0,
            created_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_profile_starts_at_beginner_with_zero_score() {
        let profile = Profile::new("account-1", "SuperLearner123");

        assert_eq!(profile.username, "SuperLearner123");
        assert_eq!(profile.current_level, Level::Beginner);
        assert_eq!(profile.total_score, 0);
        assert!(profile.created_at.is_some());
    }

    #[test]
    fn level_thresholds() {
        assert_eq!(Level::for_total_score(0), Level::Beginner);
        assert_eq!(Level::for_total_score(9), Level::Beginner);
        assert_eq!(Level::for_total_score(10), Level::Explorer);
        assert_eq!(Level::for_total_score(49), Level::Explorer);
        assert_eq!(Level::for_total_score(50), Level::Master);
    }

    #[test]
    fn level_serializes_as_label() {
        let json = serde_json::to_string(&Level::Explorer).unwrap();
        assert_eq!(json, "\"Explorer\"");
    }
}
