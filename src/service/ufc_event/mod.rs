//! UFC event feed synchronization.
//!
//! Downloads the iCalendar feed, keeps the events starting in the current month and
//! upserts them by name. Earlier and later months are left to the runs in those months.

pub mod calendar;

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::ufc_event::UfcEventRepository,
    error::AppError,
    model::ufc_event::{SyncSummary, UpsertUfcEventParam},
    util::parse::first_url,
};

use self::calendar::{parse_calendar, CalendarEvent};

pub struct UfcEventService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
}

impl<'a> UfcEventService<'a> {
    pub fn new(db: &'a DatabaseConnection, http_client: &'a reqwest::Client) -> Self {
        Self { db, http_client }
    }

    /// Fetches the feed at `calendar_url` and stores this month's events.
    ///
    /// # Returns
    /// - `Ok(SyncSummary)` - Counts of inserted, updated and unchanged events
    /// - `Err(AppError::ReqwestErr)` - Feed could not be downloaded
    /// - `Err(AppError::CalendarErr)` - Feed is not a readable calendar
    /// - `Err(AppError::DbErr)` - Database error while storing
    pub async fn sync(&self, calendar_url: &str) -> Result<SyncSummary, AppError> {
        let document = self
            .http_client
            .get(calendar_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let events = parse_calendar(&document)?;

        tracing::debug!("Fetched {} events from {}", events.len(), calendar_url);

        self.store_month(events, Utc::now()).await
    }

    /// Upserts the events whose start falls in the calendar month of `now`.
    pub async fn store_month(
        &self,
        events: Vec<CalendarEvent>,
        now: DateTime<Utc>,
    ) -> Result<SyncSummary, AppError> {
        let repo = UfcEventRepository::new(self.db);
        let (start, end) = month_window(now);
        let mut summary = SyncSummary::default();

        for event in events
            .into_iter()
            .filter(|event| event.start >= start && event.start <= end)
        {
            let name = event.summary.clone();
            let outcome = repo.upsert(to_upsert_param(event)).await?;

            tracing::debug!("UFC event '{}': {:?}", name, outcome);
            summary.record(outcome);
        }

        Ok(summary)
    }
}

/// Converts a feed event into upsert parameters. The URL is the first link in the
/// description.
pub fn to_upsert_param(event: CalendarEvent) -> UpsertUfcEventParam {
    let event_url = event
        .description
        .as_deref()
        .and_then(first_url)
        .map(str::to_string);

    UpsertUfcEventParam {
        event_name: event.summary,
        event_date: event.start,
        event_url,
        event_description: event.description,
        event_location: event.location,
    }
}

/// First and last second of the UTC calendar month containing `now`, both inclusive.
pub fn month_window(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let first = NaiveDate::from_ymd_opt(now.year(), now.month(), 1).unwrap_or(now.date_naive());
    let next_month = first
        .checked_add_months(chrono::Months::new(1))
        .unwrap_or(first);

    let start = Utc.from_utc_datetime(&first.and_time(chrono::NaiveTime::MIN));
    let end = Utc.from_utc_datetime(&next_month.and_time(chrono::NaiveTime::MIN))
        - Duration::seconds(1);

    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ufc_event::UpsertOutcome;
    use test_utils::builder::TestBuilder;

    fn event(summary: &str, start: DateTime<Utc>) -> CalendarEvent {
        CalendarEvent {
            summary: summary.to_string(),
            start,
            description: Some(format!(
                "{} main card\nhttps://www.ufc.com/event/{}",
                summary,
                summary.to_lowercase().replace(' ', "-")
            )),
            location: Some("UFC APEX, Las Vegas".to_string()),
        }
    }

    #[test]
    fn month_window_covers_whole_month() {
        let now = Utc.with_ymd_and_hms(2024, 2, 14, 12, 30, 0).unwrap();

        let (start, end) = month_window(now);

        assert_eq!(start, Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 59).unwrap());
    }

    #[test]
    fn month_window_handles_december() {
        let now = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();

        let (start, end) = month_window(now);

        assert_eq!(start, Utc.with_ymd_and_hms(2024, 12, 1, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap());
    }

    #[test]
    fn param_takes_first_description_url() {
        let start = Utc.with_ymd_and_hms(2024, 4, 14, 2, 0, 0).unwrap();

        let param = to_upsert_param(event("UFC 300", start));

        assert_eq!(
            param.event_url.as_deref(),
            Some("https://www.ufc.com/event/ufc-300")
        );
        assert_eq!(param.event_name, "UFC 300");
        assert_eq!(param.event_date, start);
    }

    #[test]
    fn param_without_description_has_no_url() {
        let mut without = event("UFC 301", Utc::now());
        without.description = None;

        assert_eq!(to_upsert_param(without).event_url, None);
    }

    /// Tests storing only the current month's events and reporting outcomes.
    ///
    /// Expected: Ok with events outside the month ignored, repeats unchanged
    #[tokio::test]
    async fn stores_current_month_only() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::UfcEvent)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let http_client = reqwest::Client::new();
        let service = UfcEventService::new(db, &http_client);

        let now = Utc.with_ymd_and_hms(2024, 4, 10, 0, 0, 0).unwrap();
        let events = vec![
            event("UFC 299", Utc.with_ymd_and_hms(2024, 3, 31, 23, 59, 59).unwrap()),
            event("UFC 300", Utc.with_ymd_and_hms(2024, 4, 14, 2, 0, 0).unwrap()),
            event("UFC Fight Night", Utc.with_ymd_and_hms(2024, 4, 30, 23, 59, 59).unwrap()),
            event("UFC 301", Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap()),
        ];

        let first = service.store_month(events.clone(), now).await?;
        assert_eq!(
            first,
            SyncSummary {
                inserted: 2,
                updated: 0,
                unchanged: 0
            }
        );

        let mut moved = events;
        moved[1].start = Utc.with_ymd_and_hms(2024, 4, 13, 22, 0, 0).unwrap();
        let second = service.store_month(moved, now).await?;
        assert_eq!(
            second,
            SyncSummary {
                inserted: 0,
                updated: 1,
                unchanged: 1
            }
        );

        let repo = UfcEventRepository::new(db);
        assert!(repo.get_by_name("UFC 299").await?.is_none());
        assert!(repo.get_by_name("UFC 301").await?.is_none());
        assert_eq!(
            repo.upsert(to_upsert_param(event(
                "UFC Fight Night",
                Utc.with_ymd_and_hms(2024, 4, 30, 23, 59, 59).unwrap()
            )))
            .await?,
            UpsertOutcome::Unchanged
        );

        Ok(())
    }
}
