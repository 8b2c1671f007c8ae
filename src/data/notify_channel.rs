//! Repository for channels subscribed to UFC notifications.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{data::is_unique_violation, error::AppError, model::notify_channel::NotifyChannel};

pub struct NotifyChannelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotifyChannelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Subscribes a channel. Subscribing twice is a no-op.
    ///
    /// # Returns
    /// - `Ok(true)` - The channel was added
    /// - `Ok(false)` - The channel was already subscribed
    /// - `Err(DbErr)` - Database error
    pub async fn add(&self, channel_id: u64) -> Result<bool, DbErr> {
        if self.exists(channel_id).await? {
            return Ok(false);
        }

        let result = entity::ufc_notify_channel::ActiveModel {
            id: ActiveValue::NotSet,
            channel_id: ActiveValue::Set(channel_id.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await;

        match result {
            Ok(_) => Ok(true),
            Err(e) if is_unique_violation(&e) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Unsubscribes a channel.
    ///
    /// # Returns
    /// - `Ok(true)` - The channel was removed
    /// - `Ok(false)` - The channel was not subscribed
    /// - `Err(DbErr)` - Database error
    pub async fn remove(&self, channel_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::UfcNotifyChannel::delete_many()
            .filter(entity::ufc_notify_channel::Column::ChannelId.eq(channel_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn exists(&self, channel_id: u64) -> Result<bool, DbErr> {
        let entity = entity::prelude::UfcNotifyChannel::find()
            .filter(entity::ufc_notify_channel::Column::ChannelId.eq(channel_id.to_string()))
            .one(self.db)
            .await?;

        Ok(entity.is_some())
    }

    /// Gets every subscribed channel in subscription order.
    ///
    /// Rows whose channel id is not a valid snowflake are logged and skipped.
    pub async fn get_all(&self) -> Result<Vec<NotifyChannel>, AppError> {
        let entities = entity::prelude::UfcNotifyChannel::find()
            .order_by_asc(entity::ufc_notify_channel::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .filter_map(|entity| {
                let row_id = entity.id;
                NotifyChannel::from_entity(entity)
                    .inspect_err(|e| {
                        tracing::warn!("Skipping UFC notify channel row {}: {}", row_id, e)
                    })
                    .ok()
            })
            .collect())
    }
}
