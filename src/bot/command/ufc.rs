//! UFC notification commands.

use chrono::Utc;
use serenity::all::{Context, Message};

use crate::{
    bot::handler::Handler,
    data::notify_channel::NotifyChannelRepository,
    error::command::CommandError,
    service::ufc_notification::{UfcNotificationService, WEEK_HEADER},
};

use super::admin::require_admin;

/// `ufcadd <channel_id>`: subscribes a channel to UFC notifications.
pub async fn add_channel(
    handler: &Handler,
    ctx: &Context,
    msg: &Message,
    arg: Option<&str>,
) -> Result<(), CommandError> {
    require_admin(ctx, msg).await?;
    let channel_id = parse_channel_arg(&handler.config.prefix, "ufcadd", arg)?;

    let added = NotifyChannelRepository::new(&handler.db)
        .add(channel_id)
        .await?;

    if added {
        tracing::info!(
            "Channel {} subscribed to UFC notifications by {}",
            channel_id,
            msg.author.id
        );
    }

    msg.channel_id
        .say(&ctx.http, add_reply(channel_id, added))
        .await?;

    Ok(())
}

/// `ufcrem <channel_id>`: unsubscribes a channel from UFC notifications.
pub async fn remove_channel(
    handler: &Handler,
    ctx: &Context,
    msg: &Message,
    arg: Option<&str>,
) -> Result<(), CommandError> {
    require_admin(ctx, msg).await?;
    let channel_id = parse_channel_arg(&handler.config.prefix, "ufcrem", arg)?;

    let removed = NotifyChannelRepository::new(&handler.db)
        .remove(channel_id)
        .await?;

    if removed {
        tracing::info!(
            "Channel {} unsubscribed from UFC notifications by {}",
            channel_id,
            msg.author.id
        );
    }

    msg.channel_id
        .say(&ctx.http, remove_reply(channel_id, removed))
        .await?;

    Ok(())
}

/// `ufc`: posts this week's events into the invoking channel.
pub async fn list_week(handler: &Handler, ctx: &Context, msg: &Message) -> Result<(), CommandError> {
    let service = UfcNotificationService::new(&handler.db, &ctx.http, handler.config.ufc_timezone);
    let events = service.events_this_week(Utc::now()).await?;

    if events.is_empty() {
        msg.channel_id
            .say(&ctx.http, "No UFC events scheduled this week.")
            .await?;
        return Ok(());
    }

    service
        .post_events(msg.channel_id, WEEK_HEADER, &events)
        .await?;

    Ok(())
}

fn parse_channel_arg(prefix: &str, command: &str, arg: Option<&str>) -> Result<u64, CommandError> {
    let arg = arg.ok_or_else(|| CommandError::Usage(format!("{}{} <channel_id>", prefix, command)))?;

    arg.parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .ok_or(CommandError::InvalidChannelId)
}

fn add_reply(channel_id: u64, added: bool) -> String {
    if added {
        format!("Channel (`{}`) has been added to UFC notifications.", channel_id)
    } else {
        format!(
            "Channel (`{}`) is already receiving UFC notifications.",
            channel_id
        )
    }
}

fn remove_reply(channel_id: u64, removed: bool) -> String {
    if removed {
        format!(
            "Channel (`{}`) has been removed from UFC notifications.",
            channel_id
        )
    } else {
        format!(
            "Channel (`{}`) was not receiving UFC notifications.",
            channel_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_shows_usage() {
        let err = parse_channel_arg("!", "ufcadd", None).unwrap_err();

        assert_eq!(err.to_string(), "Usage: !ufcadd <channel_id>");
    }

    #[test]
    fn rejects_non_numeric_channel() {
        let err = parse_channel_arg("!", "ufcrem", Some("#general")).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid channel ID. Please provide a valid integer."
        );
        assert!(matches!(
            parse_channel_arg("!", "ufcrem", Some("0")),
            Err(CommandError::InvalidChannelId)
        ));
    }

    #[test]
    fn parses_channel_id() {
        assert_eq!(
            parse_channel_arg("!", "ufcadd", Some("123456789012345678")).unwrap(),
            123456789012345678
        );
    }

    #[test]
    fn formats_replies() {
        assert_eq!(
            add_reply(42, true),
            "Channel (`42`) has been added to UFC notifications."
        );
        assert_eq!(
            add_reply(42, false),
            "Channel (`42`) is already receiving UFC notifications."
        );
        assert_eq!(
            remove_reply(42, true),
            "Channel (`42`) has been removed from UFC notifications."
        );
        assert_eq!(
            remove_reply(42, false),
            "Channel (`42`) was not receiving UFC notifications."
        );
    }
}
