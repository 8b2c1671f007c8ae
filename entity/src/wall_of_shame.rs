use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "wall_of_shame")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub message_id: String,
    pub author_id: String,
    pub author: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub author_url: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub channel_name: String,
    pub channel_id: String,
    pub created_at: DateTimeUtc,
    pub guild_name: String,
    pub guild_id: String,
    /// JSON array of attachment URLs.
    #[sea_orm(column_type = "Text")]
    pub attachment_urls: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
