use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{Level, Profile},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn create(&self, profile: Profile) -> AppResult<Profile>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Profile>>;
    /// Adds `points` to the cumulative total and returns the updated row.
    async fn add_to_total_score(&self, id: &str, points: i64) -> AppResult<Profile>;
    async fn set_level(&self, id: &str, level: Level) -> AppResult<()>;
    async fn top_by_score(&self, limit: i64) -> AppResult<Vec<Profile>>;
}

pub struct MongoProfileRepository {
    collection: Collection<Profile>,
}

impl MongoProfileRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("profiles");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let score_index = IndexModel::builder()
            .keys(doc! { "total_score": -1 })
            .options(IndexOptions::builder().name("total_score".to_string()).build())
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(score_index).await?;

        log::info!("Ensured indexes for profiles collection");
        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for MongoProfileRepository {
    async fn create(&self, profile: Profile) -> AppResult<Profile> {
        self.collection.insert_one(&profile).await?;
        Ok(profile)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Profile>> {
        let profile = self.collection.find_one(doc! { "id": id }).await?;
        Ok(profile)
    }

    async fn add_to_total_score(&self, id: &str, points: i64) -> AppResult<Profile> {
        let updated = self
            .collection
            .find_one_and_update(
                doc! { "id": id },
                doc! { "$inc": { "total_score": points } },
            )
            .return_document(ReturnDocument::After)
            .await?;

        updated.ok_or_else(|| AppError::NotFound(format!("Profile with id '{}' not found", id)))
    }

    async fn set_level(&self, id: &str, level: Level) -> AppResult<()> {
        let level = mongodb::bson::to_bson(&level)?;

        let result = self
            .collection
            .update_one(
                doc! { "id": id },
                doc! { "$set": { "current_level": level } },
            )
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Profile with id '{}' not found",
                id
            )));
        }

        Ok(())
    }

    async fn top_by_score(&self, limit: i64) -> AppResult<Vec<Profile>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "total_score": -1 })
            .limit(limit)
            .await?;
        let profiles: Vec<Profile> = cursor.try_collect().await?;
        Ok(profiles)
    }
}
