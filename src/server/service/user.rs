use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::user::CreateUserDto,
    server::{
        data::user::UserRepository,
        error::{api::ApiError, Error},
        model::db::UserModel,
        util::password::hash_password,
    },
};

/// Registers & lists users
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns every user ordered by ID
    pub async fn get_users(&self) -> Result<Vec<UserModel>, Error> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users)
    }

    /// Registers a new active user with a hashed password
    ///
    /// Empty strings count as missing for the email & password.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The created user
    /// - `Err(Error::ApiError(ApiError::MissingCredentials))` - Email or password missing
    /// - `Err(Error::ApiError(ApiError::EmailAlreadyRegistered))` - Email belongs to another user
    /// - `Err(Error::PasswordError)` - Hashing the password failed
    /// - `Err(Error::TaskJoinError)` - The hashing task panicked
    /// - `Err(Error::DbErr)` - Database error
    pub async fn create_user(&self, request: CreateUserDto) -> Result<UserModel, Error> {
        let user_repo = UserRepository::new(self.db);

        let (Some(email), Some(password)) = (
            request.email.filter(|email| !email.is_empty()),
            request.password.filter(|password| !password.is_empty()),
        ) else {
            return Err(ApiError::MissingCredentials.into());
        };

        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(ApiError::EmailAlreadyRegistered(email).into());
        }

        // Argon2id is memory-hard, keep it off the async workers
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password)).await??;

        // A concurrent registration can still win the race past the lookup above
        match user_repo
            .create(request.first_name, email.clone(), password_hash)
            .await
        {
            Ok(user) => {
                tracing::info!("Registered user ID {}", user.id);

                Ok(user)
            }
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(ApiError::EmailAlreadyRegistered(email).into())
                }
                _ => Err(err.into()),
            },
        }
    }
}
