//! SeaORM entity definitions for the bot's tables.

pub mod prelude;

pub mod canned_response;
pub mod ufc_event;
pub mod ufc_notify_channel;
pub mod wall_of_shame;
