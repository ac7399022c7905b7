//! Authentication primitives shared by the services and the bearer extractor.

/// Argon2id password hashing
pub mod password;
/// HS256 bearer tokens
pub mod token;
