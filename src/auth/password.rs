use crate::errors::AppResult;

/// Hash a password for storage with bcrypt.
pub fn hash_password(password: &str) -> AppResult<String> {
    Ok(bcrypt::hash(password, bcrypt::DEFAULT_COST)?)
}

/// Check a candidate password against a stored bcrypt hash.
pub fn verify_password(password: &str, password_hash: &str) -> AppResult<bool> {
    Ok(bcrypt::verify(password, password_hash)?)
}
