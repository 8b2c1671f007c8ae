//! Notification channel factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Registers a channel for UFC notifications.
///
/// # Arguments
/// - `db` - Database connection
/// - `channel_id` - Discord channel ID
pub async fn create_notify_channel(
    db: &DatabaseConnection,
    channel_id: u64,
) -> Result<entity::ufc_notify_channel::Model, DbErr> {
    entity::ufc_notify_channel::ActiveModel {
        id: ActiveValue::NotSet,
        channel_id: ActiveValue::Set(channel_id.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
