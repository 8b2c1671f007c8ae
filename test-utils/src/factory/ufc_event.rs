//! UFC event factory for creating test event entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test UFC events with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::ufc_event::UfcEventFactory;
///
/// let event = UfcEventFactory::new(&db)
///     .event_name("UFC Fight Night")
///     .event_location(None)
///     .build()
///     .await?;
/// ```
pub struct UfcEventFactory<'a> {
    db: &'a DatabaseConnection,
    event_name: String,
    event_date: DateTime<Utc>,
    event_url: Option<String>,
    event_description: Option<String>,
    event_location: Option<String>,
}

impl<'a> UfcEventFactory<'a> {
    /// Creates a new UfcEventFactory with default values.
    ///
    /// Defaults:
    /// - event_name: `"UFC {id}"`
    /// - event_date: one day from now
    /// - event_url: `"https://www.ufc.com/event/ufc-{id}"`
    /// - event_description: `"Main card"`
    /// - event_location: `"Las Vegas, NV"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            event_name: format!("UFC {}", id),
            event_date: Utc::now() + Duration::days(1),
            event_url: Some(format!("https://www.ufc.com/event/ufc-{}", id)),
            event_description: Some("Main card".to_string()),
            event_location: Some("Las Vegas, NV".to_string()),
        }
    }

    pub fn event_name(mut self, event_name: impl Into<String>) -> Self {
        self.event_name = event_name.into();
        self
    }

    pub fn event_date(mut self, event_date: DateTime<Utc>) -> Self {
        self.event_date = event_date;
        self
    }

    pub fn event_url(mut self, event_url: Option<String>) -> Self {
        self.event_url = event_url;
        self
    }

    pub fn event_description(mut self, event_description: Option<String>) -> Self {
        self.event_description = event_description;
        self
    }

    pub fn event_location(mut self, event_location: Option<String>) -> Self {
        self.event_location = event_location;
        self
    }

    /// Builds and inserts the event entity into the database.
    pub async fn build(self) -> Result<entity::ufc_event::Model, DbErr> {
        let now = Utc::now();

        entity::ufc_event::ActiveModel {
            id: ActiveValue::NotSet,
            event_name: ActiveValue::Set(self.event_name),
            event_date: ActiveValue::Set(self.event_date),
            event_url: ActiveValue::Set(self.event_url),
            event_description: ActiveValue::Set(self.event_description),
            event_location: ActiveValue::Set(self.event_location),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a UFC event with default values.
///
/// Shorthand for `UfcEventFactory::new(db).build().await`.
pub async fn create_ufc_event(db: &DatabaseConnection) -> Result<entity::ufc_event::Model, DbErr> {
    UfcEventFactory::new(db).build().await
}
