use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::ProgressRecord};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Append-only: records are never updated or deleted.
    async fn insert(&self, record: ProgressRecord) -> AppResult<ProgressRecord>;
    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<ProgressRecord>>;
}

pub struct MongoProgressRepository {
    collection: Collection<ProgressRecord>,
}

impl MongoProgressRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("user_progress");
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

        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder().name("user_id".to_string()).build())
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(user_index).await?;

        log::info!("Ensured indexes for user_progress collection");
        Ok(())
    }
}

#[async_trait]
impl ProgressRepository for MongoProgressRepository {
    async fn insert(&self, record: ProgressRecord) -> AppResult<ProgressRecord> {
        self.collection.insert_one(&record).await?;
        Ok(record)
    }

    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<ProgressRecord>> {
        let cursor = self
            .collection
            .find(doc! { "user_id": user_id })
            .sort(doc! { "submitted_at": -1 })
            .await?;
        let records: Vec<ProgressRecord> = cursor.try_collect().await?;
        Ok(records)
    }
}
