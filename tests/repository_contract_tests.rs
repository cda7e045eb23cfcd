//! Contract tests for the repository seam, run against in-memory
//! implementations. Any store that backs the service layer has to
//! satisfy these behaviors.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use kidslearn_server::{
    errors::{AppError, AppResult},
    models::domain::{Account, Difficulty, Level, Profile, ProgressRecord, Question},
    repositories::{AccountRepository, ProfileRepository, ProgressRepository, QuestionRepository},
};

struct InMemoryQuestionRepository {
    questions: RwLock<Vec<Question>>,
}

impl InMemoryQuestionRepository {
    fn new() -> Self {
        Self {
            questions: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn list_by_difficulty(&self) -> AppResult<Vec<Question>> {
        let mut questions = self.questions.read().await.clone();
        questions.sort_by_key(|q| q.difficulty);
        Ok(questions)
    }

    async fn insert_many(&self, new_questions: Vec<Question>) -> AppResult<()> {
        self.questions.write().await.extend(new_questions);
        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.questions.read().await.len() as u64)
    }
}

struct InMemoryProfileRepository {
    profiles: RwLock<HashMap<String, Profile>>,
}

impl InMemoryProfileRepository {
    fn new() -> Self {
        Self {
            profiles: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn create(&self, profile: Profile) -> AppResult<Profile> {
        let mut profiles = self.profiles.write().await;
        if profiles.contains_key(&profile.id) {
            return Err(AppError::AlreadyExists(format!(
                "Profile with id '{}' already exists",
                profile.id
            )));
        }
        profiles.insert(profile.id.clone(), profile.clone());
        Ok(profile)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Profile>> {
        Ok(self.profiles.read().await.get(id).cloned())
    }

    async fn add_to_total_score(&self, id: &str, points: i64) -> AppResult<Profile> {
        let mut profiles = self.profiles.write().await;
        let profile = profiles
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Profile with id '{}' not found", id)))?;
        profile.total_score += points;
        Ok(profile.clone())
    }

    async fn set_level(&self, id: &str, level: Level) -> AppResult<()> {
        let mut profiles = self.profiles.write().await;
        let profile = profiles
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Profile with id '{}' not found", id)))?;
        profile.current_level = level;
        Ok(())
    }

    async fn top_by_score(&self, limit: i64) -> AppResult<Vec<Profile>> {
        let mut profiles: Vec<Profile> = self.profiles.read().await.values().cloned().collect();
        profiles.sort_by(|a, b| b.total_score.cmp(&a.total_score));
        profiles.truncate(limit.max(0) as usize);
        Ok(profiles)
    }
}

struct InMemoryProgressRepository {
    records: RwLock<Vec<ProgressRecord>>,
}

impl InMemoryProgressRepository {
    fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ProgressRepository for InMemoryProgressRepository {
    async fn insert(&self, record: ProgressRecord) -> AppResult<ProgressRecord> {
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<ProgressRecord>> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }
}

struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryAccountRepository {
    fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: Account) -> AppResult<Account> {
        let mut accounts = self.accounts.write().await;
        if accounts
            .values()
            .any(|a| a.email == account.email || a.username == account.username)
        {
            return Err(AppError::AlreadyExists(
                "account with this email or username already exists".to_string(),
            ));
        }
        accounts.insert(account.id.clone(), account.clone());
        Ok(account)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Account>> {
        Ok(self.accounts.read().await.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        Ok(self
            .accounts
            .read()
            .await
            .values()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>> {
        Ok(self
            .accounts
            .read()
            .await
            .values()
            .find(|a| a.username == username)
            .cloned())
    }

    async fn find_by_confirmation_token_hash(&self, hash: &str) -> AppResult<Option<Account>> {
        Ok(self
            .accounts
            .read()
            .await
            .values()
            .find(|a| a.confirmation_token_hash.as_deref() == Some(hash))
            .cloned())
    }

    async fn mark_confirmed(&self, id: &str) -> AppResult<()> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Account with id '{}' not found", id)))?;
        account.email_confirmed = true;
        account.confirmation_token_hash = None;
        Ok(())
    }
}

fn question(id: i64, difficulty: Difficulty) -> Question {
    Question::new(
        id,
        &format!("Question {}", id),
        vec!["a".into(), "b".into()],
        0,
        difficulty,
    )
}

#[tokio::test]
async fn question_listing_orders_by_difficulty() {
    let repo = InMemoryQuestionRepository::new();
    repo.insert_many(vec![
        question(1, Difficulty::Hard),
        question(2, Difficulty::Easy),
        question(3, Difficulty::Medium),
        question(4, Difficulty::Easy),
    ])
    .await
    .unwrap();

    let listed = repo.list_by_difficulty().await.unwrap();
    let difficulties: Vec<Difficulty> = listed.iter().map(|q| q.difficulty).collect();

    assert_eq!(
        difficulties,
        vec![
            Difficulty::Easy,
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard
        ]
    );
    assert_eq!(repo.count().await.unwrap(), 4);
}

#[tokio::test]
async fn profile_score_increment_accumulates() {
    let repo = InMemoryProfileRepository::new();
    repo.create(Profile::new("account-1", "kid")).await.unwrap();

    let updated = repo.add_to_total_score("account-1", 4).await.unwrap();
    assert_eq!(updated.total_score, 4);

    let updated = repo.add_to_total_score("account-1", 3).await.unwrap();
    assert_eq!(updated.total_score, 7);
}

#[tokio::test]
async fn profile_score_increment_requires_existing_row() {
    let repo = InMemoryProfileRepository::new();

    let result = repo.add_to_total_score("missing", 4).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let result = repo.set_level("missing", Level::Explorer).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn profile_top_by_score_is_descending_and_limited() {
    let repo = InMemoryProfileRepository::new();
    for (id, score) in [("a", 5_i64), ("b", 20), ("c", 1), ("d", 11)] {
        let mut profile = Profile::new(id, id);
        profile.total_score = score;
        repo.create(profile).await.unwrap();
    }

    let top = repo.top_by_score(2).await.unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].total_score, 20);
    assert_eq!(top[1].total_score, 11);
}

#[tokio::test]
async fn duplicate_profile_creation_is_rejected() {
    let repo = InMemoryProfileRepository::new();
    repo.create(Profile::new("account-1", "kid")).await.unwrap();

    let result = repo.create(Profile::new("account-1", "kid")).await;
    assert!(matches!(result, Err(AppError::AlreadyExists(_))));
}

#[tokio::test]
async fn progress_records_append_per_user() {
    let repo = InMemoryProgressRepository::new();
    repo.insert(ProgressRecord::new("account-1", 5, 3)).await.unwrap();
    repo.insert(ProgressRecord::new("account-1", 5, 5)).await.unwrap();
    repo.insert(ProgressRecord::new("account-2", 5, 4)).await.unwrap();

    let records = repo.find_by_user("account-1").await.unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.user_id == "account-1"));

    // Append-only: both runs remain, nothing was overwritten.
    let scores: Vec<u32> = records.iter().map(|r| r.score).collect();
    assert!(scores.contains(&3) && scores.contains(&5));
}

#[tokio::test]
async fn account_uniqueness_and_confirmation() {
    let repo = InMemoryAccountRepository::new();
    let account = Account::new("kid@example.com", "kid", "hash".into(), "token-hash".into());
    let account = repo.create(account).await.unwrap();

    let dup = Account::new("kid@example.com", "other", "hash".into(), "t".into());
    assert!(matches!(
        repo.create(dup).await,
        Err(AppError::AlreadyExists(_))
    ));

    let found = repo
        .find_by_confirmation_token_hash("token-hash")
        .await
        .unwrap();
    assert_eq!(found.as_ref().map(|a| a.id.as_str()), Some(account.id.as_str()));

    repo.mark_confirmed(&account.id).await.unwrap();
    let confirmed = repo.find_by_id(&account.id).await.unwrap().unwrap();
    assert!(confirmed.email_confirmed);
    assert!(confirmed.confirmation_token_hash.is_none());

    // The token can no longer be used to look the account up.
    let gone = repo
        .find_by_confirmation_token_hash("token-hash")
        .await
        .unwrap();
    assert!(gone.is_none());
}

#[tokio::test]
async fn repositories_are_object_safe() {
    // The services hold these as trait objects; make sure the in-memory
    // implementations coerce the same way the Mongo ones do.
    let _: Arc<dyn QuestionRepository> = Arc::new(InMemoryQuestionRepository::new());
    let _: Arc<dyn ProfileRepository> = Arc::new(InMemoryProfileRepository::new());
    let _: Arc<dyn ProgressRepository> = Arc::new(InMemoryProgressRepository::new());
    let _: Arc<dyn AccountRepository> = Arc::new(InMemoryAccountRepository::new());
}
