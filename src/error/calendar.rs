use thiserror::Error;

/// Errors raised while parsing an iCalendar feed.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CalendarError {
    /// The document does not contain a `BEGIN:VCALENDAR` block.
    #[error("Feed is not an iCalendar document")]
    NotACalendar,

    /// A `DTSTART` value does not match any supported date format.
    #[error("Unsupported DTSTART value '{0}'")]
    InvalidDate(String),

    /// A `BEGIN:VEVENT` block was never closed.
    #[error("Unterminated VEVENT block")]
    UnterminatedEvent,
}
