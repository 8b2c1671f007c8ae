//! Background jobs.
//!
//! - `presence` - Status endpoint poller started from the first ready event
//! - `ufc` - Cron jobs for the feed sync and the daily and weekly notifications

pub mod presence;
pub mod ufc;
