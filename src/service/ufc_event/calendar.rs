//! Minimal iCalendar (RFC 5545) reader for the UFC event feed.
//!
//! Only the parts of the format the feed actually uses are understood: line folding,
//! `NAME;PARAMS:VALUE` content lines, text escapes and `VEVENT` blocks with
//! `SUMMARY`, `DTSTART`, `DESCRIPTION` and `LOCATION`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::calendar::CalendarError;

/// One `VEVENT` read from the feed.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub summary: String,
    pub start: DateTime<Utc>,
    pub description: Option<String>,
    pub location: Option<String>,
}

/// A single unfolded content line.
#[derive(Debug, PartialEq)]
struct ContentLine<'a> {
    name: String,
    params: Vec<(&'a str, &'a str)>,
    value: &'a str,
}

impl<'a> ContentLine<'a> {
    fn param(&self, name: &str) -> Option<&'a str> {
        self.params
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| *value)
    }
}

#[derive(Default)]
struct PendingEvent {
    summary: Option<String>,
    start: Option<DateTime<Utc>>,
    description: Option<String>,
    location: Option<String>,
}

/// Parses every `VEVENT` in an iCalendar document.
///
/// Events missing `SUMMARY` or a usable `DTSTART` are skipped with a warning. Properties
/// of components nested inside an event, such as `VALARM`, are ignored.
///
/// # Returns
/// - `Ok(Vec<CalendarEvent>)` - Events in document order
/// - `Err(CalendarError::NotACalendar)` - No `BEGIN:VCALENDAR` line
/// - `Err(CalendarError::UnterminatedEvent)` - A `VEVENT` is never closed
pub fn parse_calendar(document: &str) -> Result<Vec<CalendarEvent>, CalendarError> {
    let lines = unfold(document);

    if !lines
        .iter()
        .any(|line| line.trim().eq_ignore_ascii_case("BEGIN:VCALENDAR"))
    {
        return Err(CalendarError::NotACalendar);
    }

    let mut events = Vec::new();
    let mut pending: Option<PendingEvent> = None;
    // Components opened inside the pending event, such as VALARM.
    let mut nested = 0usize;

    for line in &lines {
        let Some(line) = split_content_line(line) else {
            continue;
        };

        match line.name.as_str() {
            "BEGIN" if pending.is_some() => {
                if nested == 0 && line.value.eq_ignore_ascii_case("VEVENT") {
                    return Err(CalendarError::UnterminatedEvent);
                }
                nested += 1;
            }
            "BEGIN" if line.value.eq_ignore_ascii_case("VEVENT") => {
                pending = Some(PendingEvent::default());
            }
            "END" if nested > 0 => nested -= 1,
            "END" if line.value.eq_ignore_ascii_case("VEVENT") => {
                if let Some(event) = pending.take().and_then(finish_event) {
                    events.push(event);
                }
            }
            "END" if line.value.eq_ignore_ascii_case("VCALENDAR") && pending.is_some() => {
                return Err(CalendarError::UnterminatedEvent);
            }
            _ if nested > 0 => {}
            _ => {
                if let Some(event) = pending.as_mut() {
                    apply_property(event, &line);
                }
            }
        }
    }

    if pending.is_some() {
        return Err(CalendarError::UnterminatedEvent);
    }

    Ok(events)
}

fn apply_property(event: &mut PendingEvent, line: &ContentLine<'_>) {
    match line.name.as_str() {
        "SUMMARY" => event.summary = Some(unescape(line.value)),
        "DESCRIPTION" => event.description = Some(unescape(line.value)),
        "LOCATION" => event.location = Some(unescape(line.value)),
        "DTSTART" => match parse_dtstart(line) {
            Ok(start) => event.start = Some(start),
            Err(e) => tracing::warn!("Skipping DTSTART in calendar feed: {}", e),
        },
        _ => {}
    }
}

fn finish_event(event: PendingEvent) -> Option<CalendarEvent> {
    let summary = event.summary.filter(|s| !s.trim().is_empty());

    match (summary, event.start) {
        (Some(summary), Some(start)) => Some(CalendarEvent {
            summary: summary.trim().to_string(),
            start,
            description: event.description.filter(|d| !d.trim().is_empty()),
            location: event.location.filter(|l| !l.trim().is_empty()),
        }),
        (summary, _) => {
            tracing::warn!(
                "Skipping calendar event without SUMMARY or DTSTART (summary: {:?})",
                summary
            );
            None
        }
    }
}

/// Joins folded lines. A line starting with a space or tab continues the previous one.
fn unfold(document: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for raw in document.split('\n') {
        let raw = raw.strip_suffix('\r').unwrap_or(raw);

        match (raw.strip_prefix([' ', '\t']), lines.last_mut()) {
            (Some(continuation), Some(previous)) => previous.push_str(continuation),
            _ => lines.push(raw.to_string()),
        }
    }

    lines
}

/// Splits `NAME;KEY=VALUE;...:VALUE`. Quoted parameter values may contain `:` and `;`.
fn split_content_line(line: &str) -> Option<ContentLine<'_>> {
    let mut in_quotes = false;
    let mut separators = Vec::new();
    let mut colon = None;

    for (index, ch) in line.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => separators.push(index),
            ':' if !in_quotes => {
                colon = Some(index);
                break;
            }
            _ => {}
        }
    }

    let colon = colon?;
    let head = &line[..colon];
    let value = &line[colon + 1..];

    let name_end = separators.first().copied().unwrap_or(colon);
    let name = head[..name_end].trim().to_ascii_uppercase();
    if name.is_empty() {
        return None;
    }

    let params = separators
        .iter()
        .enumerate()
        .filter_map(|(i, &start)| {
            let end = separators.get(i + 1).copied().unwrap_or(colon);
            let (key, value) = line[start + 1..end].split_once('=')?;
            Some((key.trim(), value.trim().trim_matches('"')))
        })
        .collect();

    Some(ContentLine {
        name,
        params,
        value,
    })
}

/// Reverses TEXT escaping: `\n`, `\N`, `\,`, `\;` and `\\`.
fn unescape(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') | Some('N') => result.push('\n'),
            Some(other) => result.push(other),
            None => result.push('\\'),
        }
    }

    result
}

/// Parses a `DTSTART` line into UTC.
///
/// Supported forms:
/// - `YYYYMMDDTHHMMSSZ` - UTC
/// - `YYYYMMDDTHHMMSS` with `TZID` - local time in that zone
/// - `YYYYMMDDTHHMMSS` without `TZID` - floating, read as UTC
/// - `YYYYMMDD` (usually `VALUE=DATE`) - midnight UTC
fn parse_dtstart(line: &ContentLine<'_>) -> Result<DateTime<Utc>, CalendarError> {
    let value = line.value.trim();
    let invalid = || CalendarError::InvalidDate(value.to_string());

    let is_date = line
        .param("VALUE")
        .is_some_and(|kind| kind.eq_ignore_ascii_case("DATE"))
        || value.len() == 8;

    if is_date {
        let date = NaiveDate::parse_from_str(value, "%Y%m%d").map_err(|_| invalid())?;
        let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(invalid)?;
        return Ok(Utc.from_utc_datetime(&midnight));
    }

    if let Some(utc) = value.strip_suffix(['Z', 'z']) {
        let naive = NaiveDateTime::parse_from_str(utc, "%Y%m%dT%H%M%S").map_err(|_| invalid())?;
        return Ok(Utc.from_utc_datetime(&naive));
    }

    let naive = NaiveDateTime::parse_from_str(value, "%Y%m%dT%H%M%S").map_err(|_| invalid())?;

    match line.param("TZID").and_then(|tzid| tzid.parse::<Tz>().ok()) {
        Some(tz) => tz
            .from_local_datetime(&naive)
            .earliest()
            .map(|local| local.with_timezone(&Utc))
            .ok_or_else(invalid),
        None => Ok(Utc.from_utc_datetime(&naive)),
    }
}
