use sea_orm::DatabaseConnection;

use crate::server::{config::Config, error::Error, util::token::TokenKeys};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the keys used to sign & verify bearer tokens
pub fn build_token_keys(config: &Config) -> TokenKeys {
    if config.jwt_secret_is_default {
        tracing::warn!(
            "JWT_SECRET_KEY is not set, signing tokens with the development secret; \
            set JWT_SECRET_KEY before deploying"
        );
    }

    TokenKeys::new(
        config.jwt_secret.as_bytes(),
        chrono::Duration::minutes(config.jwt_expiration_minutes),
    )
}
