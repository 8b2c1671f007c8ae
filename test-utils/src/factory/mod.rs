//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let event = factory::create_ufc_event(&db).await?;
//!     let channel = factory::create_notify_channel(&db, 123).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let event = factory::ufc_event::UfcEventFactory::new(&db)
//!     .event_name("UFC 300: Pereira vs. Hill")
//!     .event_date(Utc.with_ymd_and_hms(2024, 4, 14, 2, 0, 0).unwrap())
//!     .build()
//!     .await?;
//! ```

pub mod canned_response;
pub mod helpers;
pub mod ufc_event;
pub mod ufc_notify_channel;
pub mod wall_of_shame;

pub use canned_response::create_canned_response;
pub use ufc_event::create_ufc_event;
pub use ufc_notify_channel::create_notify_channel;
pub use wall_of_shame::create_wall_of_shame_entry;
