//! Wall of shame archiving.

use sea_orm::DatabaseConnection;
use serenity::all::{GuildId, Message};

use crate::{
    data::{is_unique_violation, wall_of_shame::WallOfShameRepository},
    error::AppError,
    model::wall_of_shame::{CreateWallOfShameParam, WallOfShameEntry},
};

/// Result of archiving a message.
#[derive(Debug, Clone, PartialEq)]
pub enum ArchiveOutcome {
    Archived(WallOfShameEntry),
    AlreadyArchived,
}

pub struct WallOfShameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WallOfShameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores the message unless it is already on the wall.
    pub async fn archive(&self, param: CreateWallOfShameParam) -> Result<ArchiveOutcome, AppError> {
        let repo = WallOfShameRepository::new(self.db);

        if repo.get_by_message_id(param.message_id).await?.is_some() {
            tracing::debug!("Message {} is already archived", param.message_id);
            return Ok(ArchiveOutcome::AlreadyArchived);
        }

        let message_id = param.message_id;
        let entry = match repo.create(param).await {
            Ok(entry) => entry,
            Err(AppError::DbErr(e)) if is_unique_violation(&e) => {
                tracing::debug!("Message {} was archived concurrently", message_id);
                return Ok(ArchiveOutcome::AlreadyArchived);
            }
            Err(e) => return Err(e),
        };

        tracing::info!(
            "Archived message {} by {} from #{} in {}",
            entry.message_id,
            entry.author,
            entry.channel_name,
            entry.guild_name
        );

        Ok(ArchiveOutcome::Archived(entry))
    }
}

/// Captures an archived message's details.
///
/// `guild_id` is passed separately because messages fetched over HTTP carry none.
pub fn param_from_message(
    message: &Message,
    guild_id: GuildId,
    guild_name: String,
    channel_name: String,
) -> CreateWallOfShameParam {
    CreateWallOfShameParam {
        message_id: message.id.get(),
        author_id: message.author.id.get(),
        author: message.author.name.clone(),
        author_url: message.author.avatar_url(),
        content: message.content.clone(),
        channel_name,
        channel_id: message.channel_id.get(),
        created_at: message.timestamp.to_utc(),
        guild_name,
        guild_id: guild_id.get(),
        attachment_urls: message
            .attachments
            .iter()
            .map(|attachment| attachment.url.clone())
            .collect(),
    }
}

/// Reply sent after archiving a message by `author`.
pub fn archived_reply(author: &str, wall_url: &str) -> String {
    format!(
        "Yep, that shit was so dumb, {}, it's going on the [Wall of Shame]({})!",
        author, wall_url
    )
}
