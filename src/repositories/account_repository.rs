use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Account,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn create(&self, account: Account) -> AppResult<Account>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Account>>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>>;
    async fn find_by_confirmation_token_hash(&self, hash: &str) -> AppResult<Option<Account>>;
    /// Flips the confirmed flag and discards the confirmation token.
    async fn mark_confirmed(&self, id: &str) -> AppResult<()>;
}

pub struct MongoAccountRepository {
    collection: Collection<Account>,
}

impl MongoAccountRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("accounts");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("username_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(email_index).await?;
        self.collection.create_index(username_index).await?;

        log::info!("Ensured indexes for accounts collection");
        Ok(())
    }
}

#[async_trait]
impl AccountRepository for MongoAccountRepository {
    async fn create(&self, account: Account) -> AppResult<Account> {
        self.collection.insert_one(&account).await?;
        Ok(account)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Account>> {
        let account = self.collection.find_one(doc! { "id": id }).await?;
        Ok(account)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        let account = self.collection.find_one(doc! { "email": email }).await?;
        Ok(account)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>> {
        let account = self
            .collection
            .find_one(doc! { "username": username })
            .await?;
        Ok(account)
    }

    async fn find_by_confirmation_token_hash(&self, hash: &str) -> AppResult<Option<Account>> {
        let account = self
            .collection
            .find_one(doc! { "confirmation_token_hash": hash })
            .await?;
        Ok(account)
    }

    async fn mark_confirmed(&self, id: &str) -> AppResult<()> {
        let result = self
            .collection
            .update_one(
                doc! { "id": id },
                doc! {
                    "$set": { "email_confirmed": true },
                    "$unset": { "confirmation_token_hash": "" },
                },
            )
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Account with id '{}' not found",
                id
            )));
        }

        Ok(())
    }
}
