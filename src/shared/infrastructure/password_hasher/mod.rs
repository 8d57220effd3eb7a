pub mod argon2_hasher;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordHashError {
    #[error("failed to hash password: {0}")]
    Hash(String),

    #[error("malformed password hash: {0}")]
    MalformedHash(String),
}

/// One-way password hashing with salted, self-describing output (PHC string).
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plain: &str) -> Result<String, PasswordHashError>;

    /// `Ok(false)` on mismatch; `Err` only when `hash` cannot be parsed.
    fn verify(&self, plain: &str, hash: &str) -> Result<bool, PasswordHashError>;
}
