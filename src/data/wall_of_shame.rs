//! Wall of shame data repository.
//!
//! Stores archived Discord messages together with author, channel and guild details
//! captured at archive time.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use crate::{
    error::{internal::InternalError, AppError},
    model::wall_of_shame::{CreateWallOfShameParam, WallOfShameEntry},
};

pub struct WallOfShameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WallOfShameRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Archives a message.
    ///
    /// Attachment URLs are stored as a JSON array string.
    ///
    /// # Returns
    /// - `Ok(WallOfShameEntry)` - The stored entry
    /// - `Err(AppError::DbErr)` - Database error, including a duplicate message id
    pub async fn create(&self, param: CreateWallOfShameParam) -> Result<WallOfShameEntry, AppError> {
        let attachment_urls =
            serde_json::to_string(&param.attachment_urls).map_err(InternalError::from)?;

        let entity = entity::wall_of_shame::ActiveModel {
            id: ActiveValue::NotSet,
            message_id: ActiveValue::Set(param.message_id.to_string()),
            author_id: ActiveValue::Set(param.author_id.to_string()),
            author: ActiveValue::Set(param.author),
            author_url: ActiveValue::Set(param.author_url),
            content: ActiveValue::Set(param.content),
            channel_name: ActiveValue::Set(param.channel_name),
            channel_id: ActiveValue::Set(param.channel_id.to_string()),
            created_at: ActiveValue::Set(param.created_at),
            guild_name: ActiveValue::Set(param.guild_name),
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            attachment_urls: ActiveValue::Set(attachment_urls),
        }
        .insert(self.db)
        .await?;

        WallOfShameEntry::from_entity(entity)
    }

    /// Gets the archived entry for a message, if it has been archived.
    pub async fn get_by_message_id(
        &self,
        message_id: u64,
    ) -> Result<Option<WallOfShameEntry>, AppError> {
        let entity = entity::prelude::WallOfShame::find()
            .filter(entity::wall_of_shame::Column::MessageId.eq(message_id.to_string()))
            .one(self.db)
            .await?;

        entity.map(WallOfShameEntry::from_entity).transpose()
    }
}
