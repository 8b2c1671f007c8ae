//! Domain models for UFC notification channels.

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_snowflake_from_string};

/// A Discord channel that receives UFC notifications.
#[derive(Debug, Clone, PartialEq)]
pub struct NotifyChannel {
    pub id: i32,
    pub channel_id: u64,
    pub created_at: DateTime<Utc>,
}

impl NotifyChannel {
    /// Converts an entity model to a notify channel domain model.
    ///
    /// # Returns
    /// - `Err(AppError::InternalErr)` - The stored channel id is not a number or is 0
    pub fn from_entity(entity: entity::ufc_notify_channel::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            channel_id: parse_snowflake_from_string(entity.channel_id)?,
            created_at: entity.created_at,
        })
    }
}
