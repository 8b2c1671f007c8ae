use thiserror::Error;

use crate::error::AppError;

/// User-facing command failures.
///
/// The display text of each variant is sent back to the channel the command was
/// invoked in.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The author lacks the administrator permission.
    #[error("You need to be an administrator to use this command.")]
    NotAdministrator,

    /// The command was invoked without its required argument.
    #[error("Usage: {0}")]
    Usage(String),

    /// The channel argument is not a valid snowflake.
    #[error("Invalid channel ID. Please provide a valid integer.")]
    InvalidChannelId,

    /// The command needs a guild and was used in a direct message.
    #[error("This command only works in a server.")]
    GuildOnly,

    /// `wos` was used without replying to a message.
    #[error("You need to reply to a message, dumbass")]
    NotAReply,

    /// Unexpected failure while running the command. Details are logged, not shown.
    #[error("Something went wrong, try again later.")]
    Internal(#[from] AppError),
}

impl From<sea_orm::DbErr> for CommandError {
    fn from(err: sea_orm::DbErr) -> Self {
        CommandError::Internal(AppError::DbErr(err))
    }
}

impl From<serenity::Error> for CommandError {
    fn from(err: serenity::Error) -> Self {
        CommandError::Internal(AppError::from(err))
    }
}
