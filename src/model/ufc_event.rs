//! Domain models for UFC event data operations.

use chrono::{DateTime, Utc};

/// A scheduled UFC event stored from the calendar feed.
#[derive(Debug, Clone, PartialEq)]
pub struct UfcEvent {
    pub id: i32,
    /// Event title, unique across stored events.
    pub event_name: String,
    pub event_date: DateTime<Utc>,
    pub event_url: Option<String>,
    pub event_description: Option<String>,
    pub event_location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UfcEvent {
    /// Converts an entity model to a UFC event domain model at the repository boundary.
    pub fn from_entity(entity: entity::ufc_event::Model) -> Self {
        Self {
            id: entity.id,
            event_name: entity.event_name,
            event_date: entity.event_date,
            event_url: entity.event_url,
            event_description: entity.event_description,
            event_location: entity.event_location,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for inserting or updating an event by name.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertUfcEventParam {
    pub event_name: String,
    pub event_date: DateTime<Utc>,
    pub event_url: Option<String>,
    pub event_description: Option<String>,
    pub event_location: Option<String>,
}

impl UpsertUfcEventParam {
    /// Whether the stored event differs from these parameters in any field.
    pub fn differs_from(&self, stored: &UfcEvent) -> bool {
        self.event_date != stored.event_date
            || self.event_url != stored.event_url
            || self.event_description != stored.event_description
            || self.event_location != stored.event_location
    }
}

/// What an upsert did to the stored row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
    Unchanged,
}

/// Counts of upsert outcomes for one feed synchronization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncSummary {
    pub inserted: usize,
    pub updated: usize,
    pub unchanged: usize,
}

impl SyncSummary {
    pub fn record(&mut self, outcome: UpsertOutcome) {
        match outcome {
            UpsertOutcome::Inserted => self.inserted += 1,
            UpsertOutcome::Updated => self.updated += 1,
            UpsertOutcome::Unchanged => self.unchanged += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.inserted + self.updated + self.unchanged
    }
}
