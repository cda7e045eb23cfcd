use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        AccountRepository, MongoAccountRepository, MongoProfileRepository,
        MongoProgressRepository, MongoQuestionRepository, MongoRefreshTokenRepository,
        ProfileRepository, ProgressRepository, QuestionRepository, RefreshTokenRepository,
    },
    services::{AuthService, ProfileService, QuizService},
};

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub auth_service: Arc<AuthService>,
    pub quiz_service: Arc<QuizService>,
    pub profile_service: Arc<ProfileService>,
    pub jwt_service: Arc<JwtService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let account_repository = MongoAccountRepository::new(&db);
        account_repository.ensure_indexes().await?;
        let account_repository: Arc<dyn AccountRepository> = Arc::new(account_repository);

        let profile_repository = MongoProfileRepository::new(&db);
        profile_repository.ensure_indexes().await?;
        let profile_repository: Arc<dyn ProfileRepository> = Arc::new(profile_repository);

        let question_repository = MongoQuestionRepository::new(&db);
        question_repository.ensure_indexes().await?;
        let question_repository: Arc<dyn QuestionRepository> = Arc::new(question_repository);

        let progress_repository = MongoProgressRepository::new(&db);
        progress_repository.ensure_indexes().await?;
        let progress_repository: Arc<dyn ProgressRepository> = Arc::new(progress_repository);

        let refresh_token_repository = MongoRefreshTokenRepository::new(&db);
        refresh_token_repository.ensure_indexes().await?;
        let refresh_token_repository: Arc<dyn RefreshTokenRepository> =
            Arc::new(refresh_token_repository);

        let jwt_service = Arc::new(JwtService::new(
            &config.jwt_secret,
            config.jwt_expiration_hours,
            config.refresh_expiration_hours,
        ));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&account_repository),
            Arc::clone(&profile_repository),
            Arc::clone(&refresh_token_repository),
            Arc::clone(&jwt_service),
        ));

        let quiz_service = Arc::new(QuizService::new(
            question_repository,
            progress_repository,
            Arc::clone(&profile_repository),
        ));

        let profile_service = Arc::new(ProfileService::new(
            profile_repository,
            config.leaderboard_size,
        ));

        Ok(Self {
            db,
            auth_service,
            quiz_service,
            profile_service,
            jwt_service,
            config: Arc::new(config),
        })
    }
}
