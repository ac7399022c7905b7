//! Declarative test builder.
//!
//! The builder pattern allows chaining configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use migration::{Migrator, MigratorTrait};
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Fixtures queued on the builder are inserted in declaration order, so the first person
/// declared receives ID 1, the second ID 2 and so on.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_catalog_tables: bool,
    run_migrations: bool,

    people: Vec<String>,
    planets: Vec<String>,
    users: Vec<(String, String)>, // (email, password)
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_catalog_tables: false,
            run_migrations: false,
            people: Vec::new(),
            planets: Vec::new(),
            users: Vec::new(),
        }
    }

    /// Add every catalog table to the test database.
    ///
    /// Creates `user`, `people`, `planets` and `favorites`, in that order so the favorites
    /// foreign keys resolve.
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    /// Build the schema by running every migration instead of deriving tables from entities.
    ///
    /// Fixtures then insert into the migrated tables, so tests also check that the migrations
    /// agree with the entity definitions.
    pub fn with_migrations(mut self) -> Self {
        self.run_migrations = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holocron_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holocron_test_utils::TestError> {
    /// let test = TestBuilder::new().with_table(People).build().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock person with the given name.
    pub fn with_mock_person(mut self, name: impl Into<String>) -> Self {
        self.people.push(name.into());
        self
    }

    /// Insert a mock planet with the given name.
    pub fn with_mock_planet(mut self, name: impl Into<String>) -> Self {
        self.planets.push(name.into());
        self
    }

    /// Insert a user whose password is stored as an Argon2id hash.
    pub fn with_user(mut self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.users.push((email.into(), password.into()));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment
    /// - `Err(TestError::DbErr)` - Table creation, migration or fixture insertion failed
    /// - `Err(TestError::PasswordHash)` - Hashing a fixture password failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_catalog_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::People),
                schema.create_table_from_entity(entity::prelude::Planets),
                schema.create_table_from_entity(entity::prelude::Favorites),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        if self.run_migrations {
            Migrator::up(&setup.db, None).await?;
        }

        for name in self.people {
            setup.catalog().insert_mock_person(&name).await?;
        }

        for name in self.planets {
            setup.catalog().insert_mock_planet(&name).await?;
        }

        for (email, password) in self.users {
            setup.user().insert_user(&email, &password).await?;
        }

        Ok(setup)
    }
}
