use thiserror::Error;

/// Argon2 failures other than a simple password mismatch.
#[derive(Error, Debug)]
pub enum PasswordError {
    /// Hashing a new password failed
    #[error("Failed to hash password: {0}")]
    Hash(String),
    /// The stored value is not a PHC hash string
    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
    /// Verification failed for a reason other than a mismatch
    #[error("Failed to verify password: {0}")]
    Verify(String),
}
