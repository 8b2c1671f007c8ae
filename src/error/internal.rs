use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse a stored Discord id back into a snowflake.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A stored Discord id is 0, which no snowflake can be.
    #[error("Stored ID '{0}' is not a valid Discord snowflake")]
    ZeroId(String),

    /// Failure to serialize attachment URLs for archiving.
    #[error("Failed to encode attachment URLs: {0}")]
    AttachmentEncoding(#[from] serde_json::Error),
}
