use serenity::all::{Context, Message};

use crate::{
    bot::{command, command::Command, handler::Handler},
    data::canned_response::CannedResponseRepository,
};

/// Handles a message in any channel the bot can read.
///
/// Bots (including this one) are ignored. Prefix commands are dispatched; otherwise a
/// mention of the bot gets a random canned reply.
pub async fn handle_message(handler: &Handler, ctx: Context, msg: Message) {
    let bot_id = ctx.cache.current_user().id;
    if msg.author.bot || msg.author.id == bot_id {
        return;
    }

    if let Some(command) = Command::parse(&handler.config.prefix, &msg.content) {
        command::execute(handler, &ctx, &msg, command).await;
        return;
    }

    if !msg.mentions_user_id(bot_id) {
        return;
    }

    let response = match CannedResponseRepository::new(&handler.db).random().await {
        Ok(Some(response)) => response,
        Ok(None) => {
            tracing::debug!("No canned responses stored, ignoring mention");
            return;
        }
        Err(e) => {
            tracing::error!("Failed to load canned response: {}", e);
            return;
        }
    };

    if let Err(e) = msg.reply(&ctx.http, response).await {
        tracing::error!(
            "Failed to send canned reply in channel {}: {}",
            msg.channel_id,
            e
        );
    }
}
