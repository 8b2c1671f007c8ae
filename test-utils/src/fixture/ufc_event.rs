//! UFC event fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::ufc_event;

/// Default test event name.
pub const DEFAULT_NAME: &str = "UFC 300: Pereira vs. Hill";

/// Default test event URL.
pub const DEFAULT_URL: &str = "https://www.ufc.com/event/ufc-300";

/// Default test event location.
pub const DEFAULT_LOCATION: &str = "T-Mobile Arena, Las Vegas, NV";

/// Creates a UFC event entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - event_name: `"UFC 300: Pereira vs. Hill"`
/// - event_date: `2024-04-14 02:00:00 UTC`
/// - event_url: `"https://www.ufc.com/event/ufc-300"`
/// - event_description: a multi-line fight card
/// - event_location: `"T-Mobile Arena, Las Vegas, NV"`
pub fn entity() -> ufc_event::Model {
    let date = Utc.with_ymd_and_hms(2024, 4, 14, 2, 0, 0).unwrap();

    ufc_event::Model {
        id: 1,
        event_name: DEFAULT_NAME.to_string(),
        event_date: date,
        event_url: Some(DEFAULT_URL.to_string()),
        event_description: Some(format!(
            "  Pereira vs. Hill\nGaethje vs. Holloway\n{}  ",
            DEFAULT_URL
        )),
        event_location: Some(DEFAULT_LOCATION.to_string()),
        created_at: date,
        updated_at: date,
    }
}
