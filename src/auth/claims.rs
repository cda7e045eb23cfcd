use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::Account;

/// The session context carried by every authenticated request.
///
/// The original client kept a username cookie as its "logged in" flag;
/// here the same information travels in signed claims and is injected
/// into handlers via the [`Session`](crate::auth::Session) extractor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (account id)
    pub username: String,
    pub exp: usize, // Expiration time (as UTC timestamp)
    pub iat: usize, // Issued at (as UTC timestamp)
}

impl Claims {
    pub fn new(account: &Account, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours);

        Self {
            sub: account.id.clone(),
            username: account.username.clone(),
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub sub: String,        // account id
    pub jti: String,        // unique token id, makes every issued token distinct
    pub token_type: String, // "refresh"
    pub exp: usize,
    pub iat: usize,
}

impl RefreshClaims {
    pub fn new(account_id: &str, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours);

        Self {
            sub: account_id.to_string(),
            jti: uuid::Uuid::new_v4().to_string(),
            token_type: "refresh".to_string(),
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        }
    }
}
