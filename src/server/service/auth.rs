use sea_orm::DatabaseConnection;

use crate::{
    model::user::{ProtectedDto, TokenDto, TokenParams},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, password::PasswordError, Error},
        util::{
            password::verify_password,
            token::{Claims, TokenKeys},
        },
    },
};

/// Issues bearer tokens & resolves their claims to users
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenKeys,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenKeys) -> Self {
        Self { db, tokens }
    }

    /// Exchanges an email & password for a signed bearer token
    ///
    /// Unknown emails, wrong passwords, missing parameters and unusable stored passwords all
    /// produce the same [`AuthError::BadCredentials`].
    ///
    /// # Returns
    /// - `Ok(TokenDto)` - Token & the ID of the user it was issued for
    /// - `Err(Error::AuthError(AuthError::BadCredentials))` - Credentials did not match a user
    /// - `Err(Error::DbErr)` - Database error
    /// - `Err(Error::TokenError)` - Signing the token failed
    /// - `Err(Error::TaskJoinError)` - The password verification task panicked
    pub async fn issue_token(&self, params: TokenParams) -> Result<TokenDto, Error> {
        let (Some(username), Some(password)) = (params.username, params.password) else {
            return Err(AuthError::BadCredentials.into());
        };

        let Some(user) = UserRepository::new(self.db)
            .find_by_email(&username)
            .await?
        else {
            return Err(AuthError::BadCredentials.into());
        };

        let Some(stored_password) = user.password.clone() else {
            return Err(AuthError::BadCredentials.into());
        };

        let verified =
            tokio::task::spawn_blocking(move || verify_password(&password, &stored_password))
                .await?;

        match verified {
            Ok(true) => (),
            Ok(false) => return Err(AuthError::BadCredentials.into()),
            Err(PasswordError::MalformedHash(reason)) => {
                tracing::warn!(
                    "User ID {} has a stored password that is not a valid hash, rejecting login: {}",
                    user.id,
                    reason
                );

                return Err(AuthError::BadCredentials.into());
            }
            Err(err) => return Err(err.into()),
        }

        let token = self.tokens.issue(user.id, user.email)?;

        Ok(TokenDto {
            token,
            user_id: user.id,
        })
    }

    /// Resolves the identity behind verified token claims
    ///
    /// The user must still exist; a token outliving its user is rejected.
    pub async fn get_protected(&self, claims: &Claims) -> Result<ProtectedDto, Error> {
        let user_id = claims.user_id()?;

        let Some(user) = UserRepository::new(self.db).get_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(ProtectedDto {
            id: user.id,
            username: user.email,
        })
    }
}
