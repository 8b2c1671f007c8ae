//! Wall of shame factory for creating archived message entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Archives a message with placeholder author, channel and guild data.
///
/// # Arguments
/// - `db` - Database connection
/// - `message_id` - Discord message ID of the archived message
pub async fn create_wall_of_shame_entry(
    db: &DatabaseConnection,
    message_id: u64,
) -> Result<entity::wall_of_shame::Model, DbErr> {
    let id = next_id();

    entity::wall_of_shame::ActiveModel {
        id: ActiveValue::NotSet,
        message_id: ActiveValue::Set(message_id.to_string()),
        author_id: ActiveValue::Set(id.to_string()),
        author: ActiveValue::Set(format!("user{}", id)),
        author_url: ActiveValue::Set(None),
        content: ActiveValue::Set("something dumb".to_string()),
        channel_name: ActiveValue::Set("general".to_string()),
        channel_id: ActiveValue::Set("1".to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        guild_name: ActiveValue::Set("Test Guild".to_string()),
        guild_id: ActiveValue::Set("2".to_string()),
        attachment_urls: ActiveValue::Set("[]".to_string()),
    }
    .insert(db)
    .await
}
