//! Prefix commands.
//!
//! Commands are matched by prefix against the message content, so `!ufcadd 123` and
//! `!ufcadd123` both run `ufcadd`. Longer names are tried first so `ufc` never shadows
//! `ufcadd` or `ufcrem`.
//!
//! - `admin` - Administrator check for privileged commands
//! - `reply` - Canned response management
//! - `ufc` - UFC notification channels and listings
//! - `wos` - Wall of shame archiving

pub mod admin;
pub mod reply;
pub mod ufc;
pub mod wos;

use serenity::all::{Context, Message};

use crate::{bot::handler::Handler, error::command::CommandError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    UfcAdd(Option<String>),
    UfcRem(Option<String>),
    Ufc,
    Wos,
    AddReply(Option<String>),
}

impl Command {
    /// Parses `content` as a command invoked with `prefix`.
    ///
    /// Returns `None` when the content does not start with the prefix followed by a
    /// known command name.
    pub fn parse(prefix: &str, content: &str) -> Option<Command> {
        let body = content.trim_start().strip_prefix(prefix)?;

        let (name, rest) = [
            "addreply", "ufcadd", "ufcrem", "help", "wos", "ufc",
        ]
        .iter()
        .find_map(|name| body.strip_prefix(*name).map(|rest| (*name, rest)))?;

        let first_arg = rest.split_whitespace().next().map(str::to_string);
        let text_arg = Some(rest.trim())
            .filter(|text| !text.is_empty())
            .map(str::to_string);

        Some(match name {
            "addreply" => Command::AddReply(text_arg),
            "ufcadd" => Command::UfcAdd(first_arg),
            "ufcrem" => Command::UfcRem(first_arg),
            "help" => Command::Help,
            "wos" => Command::Wos,
            _ => Command::Ufc,
        })
    }
}

/// Lists the available commands rendered with `prefix`.
pub fn help_text(prefix: &str) -> String {
    let commands = [
        format!("`{}help` - Show this help message.", prefix),
        format!(
            "`{}ufcadd <channel_id>` - Add provided discord channel id to UFC notifications (admin only).",
            prefix
        ),
        format!(
            "`{}ufcrem <channel_id>` - Remove provided discord channel id from UFC notifications (admin only).",
            prefix
        ),
        format!("`{}ufc` - Show this week's UFC events.", prefix),
        format!(
            "`{}wos` - Add a replied-to message to the Wall of Shame (reply to a message and use this command).",
            prefix
        ),
        format!(
            "`{}addreply <text>` - Add a random reply for when the bot is mentioned (admin only).",
            prefix
        ),
    ];

    format!("**Available Commands:**\n{}", commands.join("\n"))
}

/// Runs a parsed command and replies with its error text when it fails.
pub async fn execute(handler: &Handler, ctx: &Context, msg: &Message, command: Command) {
    tracing::debug!(
        "Command {:?} from {} in channel {}",
        command,
        msg.author.id,
        msg.channel_id
    );

    let prefix = handler.config.prefix.as_str();

    let result = match command {
        Command::Help => msg
            .channel_id
            .say(&ctx.http, help_text(prefix))
            .await
            .map(|_| ())
            .map_err(CommandError::from),
        Command::UfcAdd(arg) => ufc::add_channel(handler, ctx, msg, arg.as_deref()).await,
        Command::UfcRem(arg) => ufc::remove_channel(handler, ctx, msg, arg.as_deref()).await,
        Command::Ufc => ufc::list_week(handler, ctx, msg).await,
        Command::Wos => wos::archive(handler, ctx, msg).await,
        Command::AddReply(text) => reply::add_reply(handler, ctx, msg, text.as_deref()).await,
    };

    let Err(err) = result else {
        return;
    };

    if let CommandError::Internal(ref source) = err {
        tracing::error!(
            "Command failed in channel {} for {}: {}",
            msg.channel_id,
            msg.author.id,
            source
        );
    }

    if let Err(e) = msg.channel_id.say(&ctx.http, err.to_string()).await {
        tracing::error!(
            "Failed to send command error to channel {}: {}",
            msg.channel_id,
            e
        );
    }
}
