//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! table the bot uses. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.

pub mod canned_response;
pub mod notify_channel;
pub mod ufc_event;
pub mod wall_of_shame;

use sea_orm::{DbErr, SqlErr};

/// Returns true if `err` came from a unique index rejecting an insert.
///
/// Used where two concurrent commands can both pass an existence check and race to
/// insert the same row.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

#[cfg(test)]
mod test;
