use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A credential-store account. Holds the login identity and password
/// hash; display data lives on the [`Profile`](super::Profile).
///
/// Accounts start unconfirmed; the confirmation token hash is cleared
/// once the email is confirmed.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Account {
    pub id: String,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub email_confirmed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_token_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Account {
    pub fn new(
        email: &str,
        username: &str,
        password_hash: String,
        confirmation_token_hash: String,
    ) -> Self {
        Account {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            username: username.to_string(),
            password_hash,
            email_confirmed: false,
            confirmation_token_hash: Some(confirmation_token_hash),
            created_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_account_is_unconfirmed() {
        let account = Account::new(
            "kid@example.com",
            "SuperLearner123",
            "hash".to_string(),
            "token-hash".to_string(),
        );

        assert!(!account.email_confirmed);
        assert_eq!(
            account.confirmation_token_hash.as_deref(),
            Some("token-hash")
        );
        assert!(account.created_at.is_some());
    }

    #[test]
    fn account_serializes_for_storage() {
        let account = Account::new("kid@example.com", "kid", "secret-hash".into(), "t".into());
        let json = serde_json::to_string(&account).unwrap();

        // The hash is persisted (repositories need it), which is why
        // handlers never serialize Account into a response body.
        assert!(json.contains("email_confirmed"));
        assert!(json.contains("secret-hash"));
    }
}
