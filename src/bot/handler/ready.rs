//! Ready event handler.
//!
//! Fired after every (re)connection. Sets the default presence and, on the first
//! ready only, starts the status poller.

use std::sync::atomic::Ordering;

use serenity::all::{Context, Ready};

use crate::{bot::handler::Handler, scheduler::presence::run_status_poller};

pub async fn handle_ready(handler: &Handler, ctx: Context, ready: Ready) {
    tracing::info!(
        "{} ({}) is connected to Discord in {} guild(s)",
        ready.user.name,
        ready.user.id,
        ready.guilds.len()
    );

    handler
        .presence
        .lock()
        .await
        .reset(ctx.shard.clone(), handler.default_presence.clone());

    let Some(status_url) = handler.config.status_url.clone() else {
        return;
    };

    if handler.poller_started.swap(true, Ordering::SeqCst) {
        return;
    }

    tracing::info!(
        "Polling presence status from {} every {}s",
        status_url,
        handler.config.status_poll_seconds
    );

    tokio::spawn(run_status_poller(
        handler.presence.clone(),
        handler.http_client.clone(),
        status_url,
        handler.default_presence.clone(),
        handler.config.status_poll_seconds,
    ));
}
