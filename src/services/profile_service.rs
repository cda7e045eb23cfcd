use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::Profile, dto::response::LeaderboardEntry},
    repositories::ProfileRepository,
};

pub struct ProfileService {
    profiles: Arc<dyn ProfileRepository>,
    leaderboard_size: i64,
}

impl ProfileService {
    pub fn new(profiles: Arc<dyn ProfileRepository>, leaderboard_size: i64) -> Self {
        Self {
            profiles,
            leaderboard_size,
        }
    }

    pub async fn get_profile(&self, account_id: &str) -> AppResult<Profile> {
        self.profiles
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Profile for account '{}' not found", account_id))
            })
    }

    /// Top profiles by cumulative score, ranked from 1.
    pub async fn leaderboard(&self) -> AppResult<Vec<LeaderboardEntry>> {
        let profiles = self.profiles.top_by_score(self.leaderboard_size).await?;

        Ok(profiles
            .iter()
            .enumerate()
            .map(|(index, profile)| LeaderboardEntry::from_profile(index + 1, profile))
            .collect())
    }
}
