use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "people")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(250))", nullable)]
    pub name: Option<String>,
    pub birth_year: Option<i32>,
    #[sea_orm(column_type = "String(StringLen::N(250))", nullable)]
    pub eye_color: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(250))", nullable)]
    pub gender: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(250))", nullable)]
    pub hair_color: Option<String>,
    pub height: Option<i32>,
    pub mass: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorites::Entity")]
    Favorites,
}

impl Related<super::favorites::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorites.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
