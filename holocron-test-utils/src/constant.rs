//! Test configuration constants.

/// Secret used to sign bearer tokens in tests. Not a real credential.
pub static TEST_JWT_SECRET: &str = "test-jwt-secret";

/// Password given to users created by fixtures.
pub static TEST_PASSWORD: &str = "test-password";
