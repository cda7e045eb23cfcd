use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::{
    auth::{password, JwtService},
    errors::{AppError, AppResult},
    models::{
        domain::{Account, Profile, RefreshToken},
        dto::{
            request::{ConfirmEmailRequest, LoginRequest, RegisterRequest},
            response::AuthResponse,
        },
    },
    repositories::{AccountRepository, ProfileRepository, RefreshTokenRepository},
};

/// Outcome of a registration: the account plus the raw confirmation
/// token handed to the mailer. The token never appears in HTTP responses.
pub struct Registration {
    pub account: Account,
    pub confirmation_token: String,
}

/// Sign-up, email confirmation, sign-in and sign-out against the
/// account store.
pub struct AuthService {
    accounts: Arc<dyn AccountRepository>,
    profiles: Arc<dyn ProfileRepository>,
    refresh_tokens: Arc<dyn RefreshTokenRepository>,
    jwt: Arc<JwtService>,
}

impl AuthService {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        profiles: Arc<dyn ProfileRepository>,
        refresh_tokens: Arc<dyn RefreshTokenRepository>,
        jwt: Arc<JwtService>,
    ) -> Self {
        Self {
            accounts,
            profiles,
            refresh_tokens,
            jwt,
        }
    }

    /// Creates an unconfirmed account. Confirmation token delivery is the
    /// mailer's job; this service only logs that one was issued.
    pub async fn register(&self, request: RegisterRequest) -> AppResult<Registration> {
        request.validate()?;

        if self.accounts.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::AlreadyExists(
                "An account with this email already exists".to_string(),
            ));
        }

        if self
            .accounts
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists(
                "This username is already taken".to_string(),
            ));
        }

        let password_hash = password::hash_password(&request.password)?;
        let confirmation_token = Uuid::new_v4().to_string();

        let account = Account::new(
            &request.email,
            &request.username,
            password_hash,
            RefreshToken::hash(&confirmation_token),
        );
        let account = self.accounts.create(account).await?;

        log::info!("Confirmation token issued for account {}", account.id);

        Ok(Registration {
            account,
            confirmation_token,
        })
    }

    /// Confirms the email behind a registration token, creates the
    /// profile on first confirmation, and signs the user in.
    pub async fn confirm_email(&self, request: ConfirmEmailRequest) -> AppResult<AuthResponse> {
        request.validate()?;

        let account = self
            .accounts
            .find_by_confirmation_token_hash(&RefreshToken::hash(&request.token))
            .await?
            .ok_or_else(|| {
                AppError::Unauthorized("Invalid or already used confirmation token".to_string())
            })?;

        self.accounts.mark_confirmed(&account.id).await?;
        self.ensure_profile(&account).await?;

        log::info!("Email confirmed for account {}", account.id);

        self.issue_tokens(&account).await
    }

    /// Verifies credentials and signs the user in. The profile is created
    /// here when missing, which covers accounts confirmed before the
    /// profile store existed.
    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        request.validate()?;

        let account = self
            .accounts
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                AppError::Unauthorized("Incorrect email or password".to_string())
            })?;

        if !password::verify_password(&request.password, &account.password_hash)? {
            return Err(AppError::Unauthorized(
                "Incorrect email or password".to_string(),
            ));
        }

        if !account.email_confirmed {
            return Err(AppError::Unauthorized(
                "Email address has not been confirmed".to_string(),
            ));
        }

        self.ensure_profile(&account).await?;

        self.issue_tokens(&account).await
    }

    /// Exchanges a valid refresh token for a fresh pair, revoking the old
    /// one (rotation).
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<AuthResponse> {
        let claims = self.jwt.validate_refresh_token(refresh_token)?;

        let token_hash = RefreshToken::hash(refresh_token);
        let stored = self
            .refresh_tokens
            .find_by_token_hash(&token_hash)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Unknown refresh token".to_string()))?;

        if !stored.is_valid() {
            return Err(AppError::Unauthorized(
                "Refresh token revoked or expired".to_string(),
            ));
        }

        let account = self
            .accounts
            .find_by_id(&claims.sub)
            .await?
            .ok_or_else(|| {
                AppError::Unauthorized("Account associated with refresh token not found".to_string())
            })?;

        self.refresh_tokens
            .revoke_by_token_hash(&token_hash)
            .await?;

        self.issue_tokens(&account).await
    }

    /// Revokes the presented refresh token. The access token is simply
    /// discarded by the client and expires on its own.
    pub async fn logout(&self, refresh_token: &str) -> AppResult<()> {
        let token_hash = RefreshToken::hash(refresh_token);
        self.refresh_tokens
            .revoke_by_token_hash(&token_hash)
            .await?;

        Ok(())
    }

    async fn ensure_profile(&self, account: &Account) -> AppResult<Profile> {
        if let Some(profile) = self.profiles.find_by_id(&account.id).await? {
            return Ok(profile);
        }

        self.profiles
            .create(Profile::new(&account.id, &account.username))
            .await
    }

    async fn issue_tokens(&self, account: &Account) -> AppResult<AuthResponse> {
        let token = self.jwt.create_token(account)?;
        let refresh_token = self.jwt.create_refresh_token(&account.id)?;

        let expires_at =
            Utc::now() + Duration::hours(self.jwt.refresh_expiration_hours());
        self.refresh_tokens
            .create(RefreshToken::new(
                &account.id,
                RefreshToken::hash(&refresh_token),
                expires_at,
            ))
            .await?;

        Ok(AuthResponse {
            token,
            refresh_token,
            username: account.username.clone(),
            email: account.email.clone(),
        })
    }
}
