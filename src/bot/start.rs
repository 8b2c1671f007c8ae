use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::{
    all::{Client, GatewayIntents},
    http::Http,
};

use crate::{bot::handler::Handler, config::Config, error::AppError};

/// Builds the Discord client without connecting.
///
/// # Arguments
/// - `config` - Application configuration
/// - `db` - Database connection handed to the event handler
/// - `http_client` - Shared HTTP client for the presence poller
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client to start and its HTTP handle for the scheduler
/// - `Err(AppError::DiscordErr)` - The client could not be built
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
    http_client: reqwest::Client,
) -> Result<(Client, Arc<Http>), AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MEMBERS;

    let handler = Handler::new(db, http_client, config.clone());

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Connects to the gateway and processes events until shutdown.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
