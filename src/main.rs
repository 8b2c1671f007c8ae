mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod util;

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError};

const DEFAULT_LOG_FILTER: &str = "info,ringside=debug";

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;

    let (bot_client, discord_http) =
        bot::start::init_bot(&config, db.clone(), http_client.clone()).await?;

    // Kept alive for the lifetime of the bot
    let _scheduler = if config.ufc_monitoring {
        Some(scheduler::ufc::start_scheduler(db, discord_http, http_client, &config).await?)
    } else {
        tracing::info!("UFC monitoring disabled");
        None
    };

    let shard_manager = bot_client.shard_manager.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            return;
        }

        tracing::info!("Shutting down");
        shard_manager.shutdown_all().await;
    });

    bot::start::start_bot(bot_client).await
}
