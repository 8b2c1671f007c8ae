//! UFC event notifications.
//!
//! Posts stored events to every subscribed channel. Windows are computed in the
//! configured time zone so "today" and "this week" match what the server members see.
//!
//! - `embed` - Embed formatting for a single event

pub mod embed;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use sea_orm::DatabaseConnection;
use serenity::{
    all::{ChannelId, CreateEmbed, CreateMessage},
    http::Http,
};

use crate::{
    data::{notify_channel::NotifyChannelRepository, ufc_event::UfcEventRepository},
    error::AppError,
    model::ufc_event::UfcEvent,
};

use self::embed::build_event_embed;

/// Discord rejects messages with more embeds than this.
const MAX_EMBEDS_PER_MESSAGE: usize = 10;

pub const TODAY_HEADER: &str = "**UFC today!**";
pub const WEEK_HEADER: &str = "**UFC events this week:**";

pub struct UfcNotificationService<'a> {
    db: &'a DatabaseConnection,
    http: &'a Http,
    tz: Tz,
}

impl<'a> UfcNotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection, http: &'a Http, tz: Tz) -> Self {
        Self { db, http, tz }
    }

    /// Gets the events whose local start date is the local date of `now`.
    pub async fn events_today(&self, now: DateTime<Utc>) -> Result<Vec<UfcEvent>, AppError> {
        let (start, end) = day_window(now, self.tz);
        Ok(UfcEventRepository::new(self.db)
            .get_between(start, end)
            .await?)
    }

    /// Gets the events from the local Monday of `now`'s week until the next Monday.
    pub async fn events_this_week(&self, now: DateTime<Utc>) -> Result<Vec<UfcEvent>, AppError> {
        let (start, end) = week_window(now, self.tz);
        Ok(UfcEventRepository::new(self.db)
            .get_between(start, end)
            .await?)
    }

    /// Posts today's events to every subscribed channel.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of channels that received every message
    /// - `Err(AppError)` - Events or channels could not be loaded
    pub async fn notify_today(&self, now: DateTime<Utc>) -> Result<usize, AppError> {
        let events = self.events_today(now).await?;
        self.broadcast(TODAY_HEADER, &events).await
    }

    /// Posts this week's events to every subscribed channel.
    pub async fn notify_week(&self, now: DateTime<Utc>) -> Result<usize, AppError> {
        let events = self.events_this_week(now).await?;
        self.broadcast(WEEK_HEADER, &events).await
    }

    /// Posts a listing of `events` into a single channel.
    pub async fn post_events(
        &self,
        channel_id: ChannelId,
        header: &str,
        events: &[UfcEvent],
    ) -> Result<(), AppError> {
        let embeds: Vec<CreateEmbed> = events
            .iter()
            .map(|event| build_event_embed(event, self.tz))
            .collect();

        for (index, chunk) in embeds.chunks(MAX_EMBEDS_PER_MESSAGE).enumerate() {
            let mut message = CreateMessage::new().embeds(chunk.to_vec());
            if index == 0 {
                message = message.content(header);
            }

            channel_id.send_message(self.http, message).await?;
        }

        Ok(())
    }

    async fn broadcast(&self, header: &str, events: &[UfcEvent]) -> Result<usize, AppError> {
        if events.is_empty() {
            tracing::debug!("No UFC events to post");
            return Ok(0);
        }

        let channels = NotifyChannelRepository::new(self.db).get_all().await?;
        if channels.is_empty() {
            tracing::debug!("No channels subscribed to UFC notifications");
            return Ok(0);
        }

        let mut delivered = 0;
        for channel in channels {
            match self
                .post_events(ChannelId::new(channel.channel_id), header, events)
                .await
            {
                Ok(()) => delivered += 1,
                Err(e) => tracing::error!(
                    "Failed to post UFC events to channel {}: {}",
                    channel.channel_id,
                    e
                ),
            }
        }

        tracing::info!(
            "Posted {} UFC event(s) to {} channel(s)",
            events.len(),
            delivered
        );

        Ok(delivered)
    }
}

/// Start of the local day containing `now` until the start of the next local day, in UTC.
pub fn day_window(now: DateTime<Utc>, tz: Tz) -> (DateTime<Utc>, DateTime<Utc>) {
    let today = now.with_timezone(&tz).date_naive();
    let tomorrow = today.succ_opt().unwrap_or(today);

    (local_midnight(today, tz), local_midnight(tomorrow, tz))
}

/// Start of the local Monday of `now`'s week until the following Monday, in UTC.
pub fn week_window(now: DateTime<Utc>, tz: Tz) -> (DateTime<Utc>, DateTime<Utc>) {
    let today = now.with_timezone(&tz).date_naive();
    let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);
    let next_monday = monday + Duration::days(7);

    (local_midnight(monday, tz), local_midnight(next_monday, tz))
}

/// Midnight of `date` in `tz`. A skipped midnight (DST gap) resolves to the first
/// valid instant after it.
fn local_midnight(date: NaiveDate, tz: Tz) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);

    tz.from_local_datetime(&midnight)
        .earliest()
        .or_else(|| {
            tz.from_local_datetime(&(midnight + Duration::hours(1)))
                .earliest()
        })
        .map(|local| local.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&midnight))
}
