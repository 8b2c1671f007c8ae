//! Embed formatting for UFC event posts.

use chrono_tz::Tz;
use serenity::all::CreateEmbed;

use crate::model::ufc_event::UfcEvent;

/// Red used by the UFC brand.
pub const UFC_COLOR: u32 = 0xd20a0a;

/// Field values shown for one event, separate from the serenity builder so the
/// formatting can be checked directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventEmbedContent {
    pub title: String,
    pub description: String,
    pub url: Option<String>,
    pub event_date: String,
    pub location: String,
}

impl EventEmbedContent {
    pub fn from_event(event: &UfcEvent, tz: Tz) -> Self {
        Self {
            title: event.event_name.clone(),
            description: event
                .event_description
                .as_deref()
                .unwrap_or_default()
                .trim()
                .to_string(),
            url: event.event_url.clone(),
            event_date: event
                .event_date
                .with_timezone(&tz)
                .format("%Y-%m-%d %H:%M:%S %Z")
                .to_string(),
            location: event
                .event_location
                .clone()
                .filter(|location| !location.trim().is_empty())
                .unwrap_or_else(|| "N/A".to_string()),
        }
    }

    pub fn into_embed(self) -> CreateEmbed {
        let mut embed = CreateEmbed::new()
            .title(self.title)
            .color(UFC_COLOR)
            .field("Event Date:", self.event_date, false)
            .field("Location:", self.location, false);

        if !self.description.is_empty() {
            embed = embed.description(self.description);
        }

        if let Some(url) = self.url {
            embed = embed.url(url);
        }

        embed
    }
}

/// Builds the embed for a single event with its start shown in `tz`.
pub fn build_event_embed(event: &UfcEvent, tz: Tz) -> CreateEmbed {
    EventEmbedContent::from_event(event, tz).into_embed()
}
