use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-side half of a session: the stored, hashed refresh token.
/// Logout revokes it; the access token simply expires.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RefreshToken {
    pub user_id: String,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub revoked: bool,
}

impl RefreshToken {
    pub fn new(user_id: &str, token_hash: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.to_string(),
            token_hash,
            expires_at,
            created_at: Utc::now(),
            revoked: false,
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.revoked && self.expires_at > Utc::now()
    }

    /// Tokens are stored hashed so a leaked collection cannot be replayed.
    pub fn hash(token: &str) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}
