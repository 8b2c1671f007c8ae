use std::sync::{atomic::AtomicBool, Arc};

use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Guild, Message, Ready};
use serenity::async_trait;
use tokio::sync::Mutex;

use crate::{config::Config, model::presence::Presence, scheduler::presence::PresenceState};

pub mod guild;
pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub http_client: reqwest::Client,
    pub config: Config,
    pub default_presence: Presence,
    pub presence: Arc<Mutex<PresenceState>>,
    /// Set once the status poller has been spawned.
    pub poller_started: AtomicBool,
}

impl Handler {
    pub fn new(db: DatabaseConnection, http_client: reqwest::Client, config: Config) -> Self {
        let default_presence = Presence::Streaming {
            name: config.presence_name.clone(),
            url: config.presence_url.clone(),
        };

        Self {
            db,
            http_client,
            presence: Arc::new(Mutex::new(PresenceState::new(default_presence.clone()))),
            default_presence,
            config,
            poller_started: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(self, ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(self, ctx, guild, is_new).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(self, ctx, message).await;
    }
}
