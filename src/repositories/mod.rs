pub mod account_repository;
pub mod profile_repository;
pub mod progress_repository;
pub mod question_repository;
pub mod refresh_token_repository;

pub use account_repository::{AccountRepository, MongoAccountRepository};
pub use profile_repository::{MongoProfileRepository, ProfileRepository};
pub use progress_repository::{MongoProgressRepository, ProgressRepository};
pub use question_repository::{MongoQuestionRepository, QuestionRepository};
pub use refresh_token_repository::{MongoRefreshTokenRepository, RefreshTokenRepository};

#[cfg(test)]
pub use account_repository::MockAccountRepository;
#[cfg(test)]
pub use profile_repository::MockProfileRepository;
#[cfg(test)]
pub use progress_repository::MockProgressRepository;
#[cfg(test)]
pub use question_repository::MockQuestionRepository;
#[cfg(test)]
pub use refresh_token_repository::MockRefreshTokenRepository;
