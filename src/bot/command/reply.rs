//! Canned response commands.

use serenity::all::{Context, Message};

use crate::{
    bot::handler::Handler, data::canned_response::CannedResponseRepository,
    error::command::CommandError,
};

use super::admin::require_admin;

/// `addreply <text>`: stores a new canned response.
pub async fn add_reply(
    handler: &Handler,
    ctx: &Context,
    msg: &Message,
    text: Option<&str>,
) -> Result<(), CommandError> {
    require_admin(ctx, msg).await?;

    let text = text.ok_or_else(|| {
        CommandError::Usage(format!("{}addreply <text>", handler.config.prefix))
    })?;

    let id = CannedResponseRepository::new(&handler.db)
        .create(text)
        .await?;

    tracing::info!("Canned response {} added by {}", id, msg.author.id);

    msg.channel_id
        .say(&ctx.http, format!("Added canned response #{}.", id))
        .await?;

    Ok(())
}
