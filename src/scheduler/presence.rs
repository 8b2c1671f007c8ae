use std::{sync::Arc, time::Duration};

use serenity::gateway::ShardMessenger;
use tokio::sync::Mutex;

use crate::{
    model::presence::Presence,
    service::presence::{PresenceService, PresenceTracker},
};

/// Presence shared between the ready handler and the poller.
///
/// The shard messenger is replaced on every ready so updates reach the live
/// connection after a reconnect.
pub struct PresenceState {
    shard: Option<ShardMessenger>,
    tracker: PresenceTracker,
}

impl PresenceState {
    pub fn new(initial: Presence) -> Self {
        Self {
            shard: None,
            tracker: PresenceTracker::new(initial),
        }
    }

    /// Shows `default` on `shard` and makes it the presence later polls compare against.
    pub fn reset(&mut self, shard: ShardMessenger, default: Presence) {
        shard.set_activity(Some(default.to_activity()));
        self.shard = Some(shard);
        self.tracker = PresenceTracker::new(default);
    }

    /// Shows `presence` unless it is already displayed.
    pub fn apply(&mut self, presence: Presence) {
        let Some(changed) = self.tracker.update(presence) else {
            return;
        };

        match &self.shard {
            Some(shard) => {
                shard.set_activity(Some(changed.to_activity()));
                tracing::info!("Presence changed to {:?}", changed);
            }
            None => tracing::debug!("No gateway connection yet, presence {:?} deferred", changed),
        }
    }
}

/// Polls `status_url` forever and applies the presence it reports.
///
/// Failed polls keep the current presence.
pub async fn run_status_poller(
    state: Arc<Mutex<PresenceState>>,
    http_client: reqwest::Client,
    status_url: String,
    default: Presence,
    poll_seconds: u64,
) {
    let service = PresenceService::new(&http_client, &status_url, &default);
    let mut interval = tokio::time::interval(Duration::from_secs(poll_seconds));

    loop {
        interval.tick().await;

        match service.fetch().await {
            Ok(presence) => state.lock().await.apply(presence),
            Err(e) => tracing::warn!("Failed to fetch presence status from {}: {}", status_url, e),
        }
    }
}
