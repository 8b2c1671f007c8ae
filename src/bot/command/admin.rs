//! Administrator check for privileged commands.

use serenity::all::{Context, Message};

use crate::{error::command::CommandError, util::permissions::member_permissions};

/// Whether the author of `msg` administers the guild it was sent in.
///
/// The guild owner counts, as does any member whose roles (including @everyone)
/// grant ADMINISTRATOR. Messages outside a guild never do.
pub async fn is_admin(ctx: &Context, msg: &Message) -> Result<bool, CommandError> {
    let Some(guild_id) = msg.guild_id else {
        return Ok(false);
    };

    let guild = ctx.http.get_guild(guild_id).await?;

    let member_roles = match &msg.member {
        Some(member) => member.roles.clone(),
        None => ctx.http.get_member(guild_id, msg.author.id).await?.roles,
    };

    let permissions = member_permissions(
        guild_id,
        guild.owner_id,
        &guild.roles,
        msg.author.id,
        &member_roles,
    );

    Ok(permissions.administrator())
}

pub async fn require_admin(ctx: &Context, msg: &Message) -> Result<(), CommandError> {
    if is_admin(ctx, msg).await? {
        Ok(())
    } else {
        Err(CommandError::NotAdministrator)
    }
}
