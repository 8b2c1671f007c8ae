//! UFC event data repository for database operations.
//!
//! Events are keyed by name. The calendar sync upserts them, and the notification
//! jobs read them back by date range.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::ufc_event::{UfcEvent, UpsertOutcome, UpsertUfcEventParam};

/// Repository providing database operations for stored UFC events.
pub struct UfcEventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UfcEventRepository<'a> {
    /// Creates a new UfcEventRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets an event by its exact name.
    ///
    /// # Returns
    /// - `Ok(Some(UfcEvent))` - Event found
    /// - `Ok(None)` - No event with that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_name(&self, event_name: &str) -> Result<Option<UfcEvent>, DbErr> {
        let entity = entity::prelude::UfcEvent::find()
            .filter(entity::ufc_event::Column::EventName.eq(event_name))
            .one(self.db)
            .await?;

        Ok(entity.map(UfcEvent::from_entity))
    }

    /// Inserts the event, or updates the stored row with the same name when any
    /// detail differs.
    ///
    /// `created_at` is preserved on update; `updated_at` only moves when a field
    /// actually changed.
    ///
    /// # Returns
    /// - `Ok(UpsertOutcome)` - Whether the row was inserted, updated or left alone
    /// - `Err(DbErr)` - Database error during query or write
    pub async fn upsert(&self, param: UpsertUfcEventParam) -> Result<UpsertOutcome, DbErr> {
        let existing = self.get_by_name(&param.event_name).await?;
        let now = Utc::now();

        match existing {
            Some(existing) if !param.differs_from(&existing) => Ok(UpsertOutcome::Unchanged),
            Some(existing) => {
                entity::ufc_event::ActiveModel {
                    id: ActiveValue::Unchanged(existing.id),
                    event_name: ActiveValue::Unchanged(existing.event_name),
                    event_date: ActiveValue::Set(param.event_date),
                    event_url: ActiveValue::Set(param.event_url),
                    event_description: ActiveValue::Set(param.event_description),
                    event_location: ActiveValue::Set(param.event_location),
                    created_at: ActiveValue::Unchanged(existing.created_at),
                    updated_at: ActiveValue::Set(now),
                }
                .update(self.db)
                .await?;

                Ok(UpsertOutcome::Updated)
            }
            None => {
                entity::ufc_event::ActiveModel {
                    id: ActiveValue::NotSet,
                    event_name: ActiveValue::Set(param.event_name),
                    event_date: ActiveValue::Set(param.event_date),
                    event_url: ActiveValue::Set(param.event_url),
                    event_description: ActiveValue::Set(param.event_description),
                    event_location: ActiveValue::Set(param.event_location),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                }
                .insert(self.db)
                .await?;

                Ok(UpsertOutcome::Inserted)
            }
        }
    }

    /// Gets events starting in `[start, end)`, earliest first.
    pub async fn get_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<UfcEvent>, DbErr> {
        let entities = entity::prelude::UfcEvent::find()
            .filter(entity::ufc_event::Column::EventDate.gte(start))
            .filter(entity::ufc_event::Column::EventDate.lt(end))
            .order_by_asc(entity::ufc_event::Column::EventDate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(UfcEvent::from_entity).collect())
    }
}
