use serenity::all::{Context, Guild, UserId};

use crate::{bot::handler::Handler, service::elevation::ElevationService};

/// Handles a guild becoming available or being joined.
///
/// Runs role elevation for the configured admin user. Guilds arrive here both at
/// startup and when the bot is added to a new one.
pub async fn handle_guild_create(
    handler: &Handler,
    ctx: Context,
    guild: Guild,
    is_new: Option<bool>,
) {
    tracing::debug!(
        "Guild create event: {} ({}) - new: {:?}",
        guild.name,
        guild.id,
        is_new
    );

    let Some(admin_user_id) = handler.config.admin_user_id else {
        return;
    };

    let bot_id = ctx.cache.current_user().id;
    let service = ElevationService::new(&ctx.http);

    match service
        .elevate(guild.id, UserId::new(admin_user_id), bot_id)
        .await
    {
        Ok(outcome) => tracing::debug!(
            "Elevation in guild {} ({}): {:?}",
            guild.name,
            guild.id,
            outcome
        ),
        Err(e) => tracing::error!(
            "Failed to elevate user {} in guild {} ({}): {}",
            admin_user_id,
            guild.name,
            guild.id,
            e
        ),
    }
}
