use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    TokenError(#[from] jsonwebtoken::errors::Error),
    #[error("Failed to hash fixture password: {0}")]
    PasswordHash(String),
}
