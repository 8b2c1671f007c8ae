use std::sync::Arc;

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::http::Http;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    config::Config,
    error::AppError,
    service::{ufc_event::UfcEventService, ufc_notification::UfcNotificationService},
};

/// Feed sync: 04:00 on the first of every month.
pub const SYNC_SCHEDULE: &str = "0 0 4 1 * *";
/// Weekly listing: Mondays at 00:05.
pub const WEEKLY_SCHEDULE: &str = "0 5 0 * * Mon";

/// Daily notification at `hour`:00.
pub fn daily_schedule(hour: u32) -> String {
    format!("0 0 {} * * *", hour)
}

/// Starts the UFC jobs.
///
/// All schedules are evaluated in the configured UFC time zone. The feed is also
/// synced once right away so a fresh database has this month's events.
///
/// # Arguments
/// - `db`: Database connection
/// - `discord_http`: Discord HTTP client for posting notifications
/// - `http_client`: HTTP client for downloading the feed
/// - `config`: Application configuration
pub async fn start_scheduler(
    db: DatabaseConnection,
    discord_http: Arc<Http>,
    http_client: reqwest::Client,
    config: &Config,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;
    let tz = config.ufc_timezone;
    let calendar_url = config.ufc_calendar_url.clone();

    let job_db = db.clone();
    let job_client = http_client.clone();
    let job_url = calendar_url.clone();
    let sync_job = Job::new_async_tz(SYNC_SCHEDULE, tz, move |_uuid, _lock| {
        let db = job_db.clone();
        let http_client = job_client.clone();
        let calendar_url = job_url.clone();

        Box::pin(async move {
            sync_events(&db, &http_client, &calendar_url).await;
        })
    })?;

    let job_db = db.clone();
    let job_http = discord_http.clone();
    let daily_job = Job::new_async_tz(
        daily_schedule(config.ufc_daily_hour).as_str(),
        tz,
        move |_uuid, _lock| {
            let db = job_db.clone();
            let http = job_http.clone();

            Box::pin(async move {
                let service = UfcNotificationService::new(&db, &http, tz);
                if let Err(e) = service.notify_today(Utc::now()).await {
                    tracing::error!("Error posting today's UFC events: {}", e);
                }
            })
        },
    )?;

    let job_db = db.clone();
    let job_http = discord_http.clone();
    let weekly_job = Job::new_async_tz(WEEKLY_SCHEDULE, tz, move |_uuid, _lock| {
        let db = job_db.clone();
        let http = job_http.clone();

        Box::pin(async move {
            let service = UfcNotificationService::new(&db, &http, tz);
            if let Err(e) = service.notify_week(Utc::now()).await {
                tracing::error!("Error posting this week's UFC events: {}", e);
            }
        })
    })?;

    scheduler.add(sync_job).await?;
    scheduler.add(daily_job).await?;
    scheduler.add(weekly_job).await?;
    scheduler.start().await?;

    tracing::info!(
        "UFC scheduler started (time zone {}, daily at {:02}:00)",
        tz,
        config.ufc_daily_hour
    );

    tokio::spawn(async move {
        sync_events(&db, &http_client, &calendar_url).await;
    });

    Ok(scheduler)
}

async fn sync_events(db: &DatabaseConnection, http_client: &reqwest::Client, calendar_url: &str) {
    tracing::info!("Running monthly UFC event check");

    match UfcEventService::new(db, http_client).sync(calendar_url).await {
        Ok(summary) => tracing::info!(
            "UFC events synced ({} this month): {} inserted, {} updated, {} unchanged",
            summary.total(),
            summary.inserted,
            summary.updated,
            summary.unchanged
        ),
        Err(e) => tracing::error!("Error syncing UFC events from {}: {}", calendar_url, e),
    }
}
