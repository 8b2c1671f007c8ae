//! Domain models for archived ("wall of shame") messages.

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_snowflake_from_string};

/// A message archived with the `wos` command.
#[derive(Debug, Clone, PartialEq)]
pub struct WallOfShameEntry {
    pub id: i32,
    pub message_id: u64,
    pub author_id: u64,
    pub author: String,
    pub author_url: Option<String>,
    pub content: String,
    pub channel_name: String,
    pub channel_id: u64,
    /// When the archived message was originally posted.
    pub created_at: DateTime<Utc>,
    pub guild_name: String,
    pub guild_id: u64,
    pub attachment_urls: Vec<String>,
}

impl WallOfShameEntry {
    /// Converts an entity model at the repository boundary.
    ///
    /// Attachment URLs are stored as a JSON array; an unreadable value yields an empty list.
    pub fn from_entity(entity: entity::wall_of_shame::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            message_id: parse_snowflake_from_string(entity.message_id)?,
            author_id: parse_snowflake_from_string(entity.author_id)?,
            author: entity.author,
            author_url: entity.author_url,
            content: entity.content,
            channel_name: entity.channel_name,
            channel_id: parse_snowflake_from_string(entity.channel_id)?,
            created_at: entity.created_at,
            guild_name: entity.guild_name,
            guild_id: parse_snowflake_from_string(entity.guild_id)?,
            attachment_urls: serde_json::from_str(&entity.attachment_urls).unwrap_or_default(),
        })
    }
}

/// Parameters for archiving a message.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateWallOfShameParam {
    pub message_id: u64,
    pub author_id: u64,
    pub author: String,
    pub author_url: Option<String>,
    pub content: String,
    pub channel_name: String,
    pub channel_id: u64,
    pub created_at: DateTime<Utc>,
    pub guild_name: String,
    pub guild_id: u64,
    pub attachment_urls: Vec<String>,
}
