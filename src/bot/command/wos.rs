//! `wos`: archives the replied-to message on the wall of shame.

use serenity::all::{Context, GuildId, Message};

use crate::{
    bot::handler::Handler,
    error::command::CommandError,
    service::wall_of_shame::{archived_reply, param_from_message, ArchiveOutcome, WallOfShameService},
};

const ALREADY_ARCHIVED: &str = "That message is already on the Wall of Shame.";

pub async fn archive(handler: &Handler, ctx: &Context, msg: &Message) -> Result<(), CommandError> {
    let Some(reference_id) = msg
        .message_reference
        .as_ref()
        .and_then(|reference| reference.message_id)
    else {
        return Err(CommandError::NotAReply);
    };

    let guild_id = msg.guild_id.ok_or(CommandError::GuildOnly)?;

    let target = match &msg.referenced_message {
        Some(message) => (**message).clone(),
        None => msg.channel_id.message(&ctx.http, reference_id).await?,
    };

    let guild_name = guild_name(ctx, guild_id).await;
    let channel_name = match msg.channel_id.name(ctx).await {
        Ok(name) => name,
        Err(e) => {
            tracing::warn!("Failed to fetch name of channel {}: {}", msg.channel_id, e);
            msg.channel_id.to_string()
        }
    };

    let param = param_from_message(&target, guild_id, guild_name, channel_name);
    let outcome = WallOfShameService::new(&handler.db).archive(param).await?;

    let entry = match outcome {
        ArchiveOutcome::Archived(entry) => entry,
        ArchiveOutcome::AlreadyArchived => {
            msg.channel_id.say(&ctx.http, ALREADY_ARCHIVED).await?;
            return Ok(());
        }
    };

    msg.channel_id
        .say(
            &ctx.http,
            archived_reply(&entry.author, &handler.config.wall_of_shame_url),
        )
        .await?;

    if let Err(e) = msg.delete(ctx).await {
        tracing::warn!(
            "Failed to delete wos command message {} in channel {}: {}",
            msg.id,
            msg.channel_id,
            e
        );
    }

    Ok(())
}

async fn guild_name(ctx: &Context, guild_id: GuildId) -> String {
    if let Some(name) = ctx.cache.guild(guild_id).map(|guild| guild.name.clone()) {
        return name;
    }

    match guild_id.to_partial_guild(&ctx.http).await {
        Ok(guild) => guild.name,
        Err(e) => {
            tracing::warn!("Failed to fetch name of guild {}: {}", guild_id, e);
            guild_id.to_string()
        }
    }
}
