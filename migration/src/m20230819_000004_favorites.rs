use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20230819_000001_user::User, m20230819_000002_people::People,
    m20230819_000003_planets::Planets,
};

static IDX_FAVORITES_PEOPLE_ID: &str = "idx-favorites-people_id";
static IDX_FAVORITES_PLANETS_ID: &str = "idx-favorites-planets_id";
static FK_FAVORITES_USER_ID: &str = "fk-favorites-user_id";
static FK_FAVORITES_PEOPLE_ID: &str = "fk-favorites-people_id";
static FK_FAVORITES_PLANETS_ID: &str = "fk-favorites-planets_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline since SQLite cannot add them to an existing table
        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorites::Id))
                    .col(string_len_null(Favorites::Name, 80))
                    .col(integer_null(Favorites::UserId))
                    .col(integer_null(Favorites::PeopleId))
                    .col(integer_null(Favorites::PlanetsId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_USER_ID)
                            .from(Favorites::Table, Favorites::UserId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_PEOPLE_ID)
                            .from(Favorites::Table, Favorites::PeopleId)
                            .to(People::Table, People::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_PLANETS_ID)
                            .from(Favorites::Table, Favorites::PlanetsId)
                            .to(Planets::Table, Planets::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITES_PEOPLE_ID)
                    .table(Favorites::Table)
                    .col(Favorites::PeopleId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITES_PLANETS_ID)
                    .table(Favorites::Table)
                    .col(Favorites::PlanetsId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITES_PLANETS_ID)
                    .table(Favorites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITES_PEOPLE_ID)
                    .table(Favorites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Favorites {
    Table,
    Id,
    Name,
    UserId,
    PeopleId,
    PlanetsId,
}
