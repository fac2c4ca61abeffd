use crate::airport::{AirportCode, parse_code};
use crate::error::{SearchError, SearchResult};
use crate::time::MinuteOfDay;
use crate::window::TimeWindow;
use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub date: NaiveDate,
}

impl SearchQuery {
    pub fn parse(
        origin: &str,
        destination: &str,
        date: &str,
        today: NaiveDate,
    ) -> SearchResult<SearchQuery> {
        let origin =
            parse_code(origin).ok_or_else(|| SearchError::InvalidAirport(origin.to_string()))?;
        let destination = parse_code(destination)
            .ok_or_else(|| SearchError::InvalidAirport(destination.to_string()))?;
        if origin == destination {
            return Err(SearchError::SameAirport(origin.to_string()));
        }

        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| SearchError::InvalidDate(date.to_string()))?;
        if date < today {
            return Err(SearchError::PastDate(date));
        }

        Ok(SearchQuery {
            origin,
            destination,
            date,
        })
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {} on {}", self.origin, self.destination, self.date)
    }
}

/// Validates a filter bound typed by the user. `-`, `any` and the empty string leave the
/// bound open; anything else must be a real clock time and comes back as `HH:MM`.
pub fn parse_bound(value: &str) -> SearchResult<Option<String>> {
    let value = value.trim();
    if value.is_empty() || value == "-" || value.eq_ignore_ascii_case("any") {
        return Ok(None);
    }
    let invalid = || SearchError::InvalidTime(value.to_string());
    let (hours, minutes) = value.split_once(':').ok_or_else(invalid)?;
    if !(1..=2).contains(&hours.len())
        || minutes.len() != 2
        || !hours.chars().chain(minutes.chars()).all(|c| c.is_ascii_digit())
    {
        return Err(invalid());
    }
    let hours = hours.parse::<u32>().map_err(|_| invalid())?;
    let minutes = minutes.parse::<u32>().map_err(|_| invalid())?;
    if hours >= 24 || minutes >= 60 {
        return Err(invalid());
    }
    Ok(Some(MinuteOfDay(hours * 60 + minutes).to_string()))
}

/// Builds a window from two user-typed bounds. Both open clears the filter; a single
/// bound is rejected rather than silently filtering nothing.
pub fn parse_window(start: &str, end: &str) -> SearchResult<TimeWindow> {
    match (parse_bound(start)?, parse_bound(end)?) {
        (Some(bound), None) | (None, Some(bound)) => Err(SearchError::HalfWindow(bound)),
        (start, end) => Ok(TimeWindow::new(start.as_deref(), end.as_deref())),
    }
}
