use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::Question};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// All quiz rows, ordered by their difficulty tag. Ordering beyond
    /// that is whatever the store supplies.
    async fn list_by_difficulty(&self) -> AppResult<Vec<Question>>;
    async fn insert_many(&self, questions: Vec<Question>) -> AppResult<()>;
    async fn count(&self) -> AppResult<u64>;
}

pub struct MongoQuestionRepository {
    collection: Collection<Question>,
}

impl MongoQuestionRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("quizzes");
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

        self.collection.create_index(id_index).await?;

        log::info!("Ensured indexes for quizzes collection");
        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for MongoQuestionRepository {
    async fn list_by_difficulty(&self) -> AppResult<Vec<Question>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "difficulty": 1 })
            .await?;
        let questions: Vec<Question> = cursor.try_collect().await?;
        Ok(questions)
    }

    async fn insert_many(&self, questions: Vec<Question>) -> AppResult<()> {
        self.collection.insert_many(&questions).await?;
        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        let count = self.collection.count_documents(doc! {}).await?;
        Ok(count)
    }
}
