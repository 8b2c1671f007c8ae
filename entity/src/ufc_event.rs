use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ufc_events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub event_name: String,
    pub event_date: DateTimeUtc,
    #[sea_orm(column_type = "Text", nullable)]
    pub event_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub event_description: Option<String>,
    pub event_location: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
