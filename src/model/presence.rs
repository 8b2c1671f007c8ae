//! Models for the bot's displayed presence.

use serde::Deserialize;
use serenity::all::ActivityData;

/// JSON payload returned by the status endpoint.
///
/// ```json
/// { "status": "3 players online", "url": "https://twitch.tv/example" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusPayload {
    pub status: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// The activity the bot should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presence {
    Streaming { name: String, url: String },
    Custom(String),
}

impl Presence {
    /// Picks the presence for a status payload, falling back to `default` when the
    /// status text is blank.
    pub fn from_payload(payload: StatusPayload, default: &Presence) -> Presence {
        let status = payload.status.trim();
        if status.is_empty() {
            return default.clone();
        }

        match payload.url.filter(|url| !url.trim().is_empty()) {
            Some(url) => Presence::Streaming {
                name: status.to_string(),
                url,
            },
            None => Presence::Custom(status.to_string()),
        }
    }

    /// Converts into the serenity activity to display.
    ///
    /// Streaming URLs Discord refuses to parse degrade to a custom status.
    pub fn to_activity(&self) -> ActivityData {
        match self {
            Presence::Streaming { name, url } => ActivityData::streaming(name.as_str(), url.as_str())
                .unwrap_or_else(|_| ActivityData::custom(name.as_str())),
            Presence::Custom(text) => ActivityData::custom(text.as_str()),
        }
    }
}
