pub use sea_orm_migration::prelude::*;

mod m20230819_000001_user;
mod m20230819_000002_people;
mod m20230819_000003_planets;
mod m20230819_000004_favorites;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20230819_000001_user::Migration),
            Box::new(m20230819_000002_people::Migration),
            Box::new(m20230819_000003_planets::Migration),
            Box::new(m20230819_000004_favorites::Migration),
        ]
    }
}
