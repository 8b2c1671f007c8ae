//! Discord gateway integration.
//!
//! The bot owns the gateway connection and dispatches events to the handlers in
//! `handler`. Its HTTP client is shared with the scheduled UFC jobs so they can post
//! without a second connection.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild availability, used to trigger role elevation
//! - `GUILD_MESSAGES` - Messages in guild channels
//! - `MESSAGE_CONTENT` - Message text, needed for prefix commands (privileged intent)
//! - `GUILD_MEMBERS` - Member lookups for elevation (privileged intent)
//!
//! Both privileged intents must be enabled in the Discord Developer Portal.

pub mod command;
pub mod handler;
pub mod start;
