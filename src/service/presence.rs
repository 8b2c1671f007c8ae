//! Presence status polling.

use crate::{
    error::AppError,
    model::presence::{Presence, StatusPayload},
};

pub struct PresenceService<'a> {
    http_client: &'a reqwest::Client,
    status_url: &'a str,
    default: &'a Presence,
}

impl<'a> PresenceService<'a> {
    pub fn new(http_client: &'a reqwest::Client, status_url: &'a str, default: &'a Presence) -> Self {
        Self {
            http_client,
            status_url,
            default,
        }
    }

    /// Fetches the status endpoint and works out the presence it asks for.
    ///
    /// # Returns
    /// - `Ok(Presence)` - Presence to display
    /// - `Err(AppError::ReqwestErr)` - Request failed, returned an error status or
    ///   the body was not a status payload
    pub async fn fetch(&self) -> Result<Presence, AppError> {
        let payload: StatusPayload = self
            .http_client
            .get(self.status_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(Presence::from_payload(payload, self.default))
    }
}

/// Remembers the last presence applied so unchanged polls are skipped.
#[derive(Debug, Default)]
pub struct PresenceTracker {
    current: Option<Presence>,
}

impl PresenceTracker {
    pub fn new(initial: Presence) -> Self {
        Self {
            current: Some(initial),
        }
    }

    /// Records `next` and returns it if it differs from what is displayed.
    pub fn update(&mut self, next: Presence) -> Option<&Presence> {
        if self.current.as_ref() == Some(&next) {
            return None;
        }

        self.current = Some(next);
        self.current.as_ref()
    }
}
