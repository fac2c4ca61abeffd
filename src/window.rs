//! Time-of-day filtering for flights, including windows and flights that cross midnight.
//!
//! Everything here works on wall-clock `HH:MM` strings without dates or timezones.
//! A malformed time never panics: it simply fails to match a bounded window.

use crate::time::{MinuteOfDay, to_minute_of_day};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which calendar day a flight lands on, relative to its departure.
///
/// There is no date to compare, so a flight is `NextDay` when its arrival clock time is
/// strictly earlier than its departure clock time. A flight of 24h or more that lands at
/// the same clock time it left is therefore reported as `SameDay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayShift {
    SameDay,
    NextDay,
}

impl DayShift {
    pub fn classify(departure: &str, arrival: &str) -> DayShift {
        match (to_minute_of_day(departure), to_minute_of_day(arrival)) {
            (Some(dep), Some(arr)) if arr < dep => DayShift::NextDay,
            _ => DayShift::SameDay,
        }
    }

    pub fn badge(&self) -> Option<&'static str> {
        match self {
            DayShift::SameDay => None,
            DayShift::NextDay => Some("+1"),
        }
    }
}

pub fn is_overnight_flight(departure: &str, arrival: &str) -> bool {
    DayShift::classify(departure, arrival) == DayShift::NextDay
}

// empty and whitespace-only bounds count as absent
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

// a blank flight time is malformed, only a missing or empty one is absent
fn given(time: Option<&str>) -> Option<&str> {
    time.filter(|t| !t.is_empty())
}

/// Checks a clock time against a closed `[start, end]` window.
///
/// A missing or empty time and absent bounds impose no constraint. When `start > end` the window wraps through
/// midnight, so `22:00-06:00` matches both `23:30` and `05:59`.
pub fn is_time_in_range(time: Option<&str>, start: Option<&str>, end: Option<&str>) -> bool {
    let (Some(time), Some(start), Some(end)) = (given(time), present(start), present(end))
    else {
        return true;
    };

    match (
        to_minute_of_day(time),
        to_minute_of_day(start),
        to_minute_of_day(end),
    ) {
        (Some(t), Some(s), Some(e)) if s <= e => s <= t && t <= e,
        (Some(t), Some(s), Some(e)) => t >= s || t <= e,
        _ => false,
    }
}

/// Checks a flight's arrival against an arrival window.
///
/// Only the arrival clock time is compared. A `06:00-12:00` filter means "lands in the
/// morning", whether that morning is the departure day or the next one.
pub fn is_arrival_time_in_range(
    departure: Option<&str>,
    arrival: Option<&str>,
    start: Option<&str>,
    end: Option<&str>,
) -> bool {
    let (Some(arrival), Some(_), Some(_)) = (given(arrival), present(start), present(end))
    else {
        return true;
    };

    // the arrival day never shifts the comparison
    match departure.map(|dep| DayShift::classify(dep, arrival)) {
        Some(DayShift::NextDay) => is_time_in_range(Some(arrival), start, end),
        Some(DayShift::SameDay) | None => is_time_in_range(Some(arrival), start, end),
    }
}

/// Block time between departure and arrival, assuming a `NextDay` arrival lands within
/// the following 24 hours.
pub fn duration_minutes(departure: &str, arrival: &str) -> Option<u32> {
    let dep = to_minute_of_day(departure)?;
    let arr = to_minute_of_day(arrival)?;
    match DayShift::classify(departure, arrival) {
        DayShift::SameDay => arr.0.checked_sub(dep.0),
        DayShift::NextDay => arr
            .0
            .checked_add(MinuteOfDay::MINUTES_PER_DAY)
            .and_then(|arr| arr.checked_sub(dep.0)),
    }
}

/// A user-facing time filter with optional bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl TimeWindow {
    pub fn new(start: Option<&str>, end: Option<&str>) -> TimeWindow {
        TimeWindow {
            start: present(start).map(str::to_string),
            end: present(end).map(str::to_string),
        }
    }

    pub fn any() -> TimeWindow {
        TimeWindow::default()
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() || self.end.is_none()
    }

    pub fn wraps_midnight(&self) -> bool {
        match (
            self.start.as_deref().and_then(to_minute_of_day),
            self.end.as_deref().and_then(to_minute_of_day),
        ) {
            (Some(s), Some(e)) => s > e,
            _ => false,
        }
    }

    pub fn contains(&self, time: Option<&str>) -> bool {
        is_time_in_range(time, self.start.as_deref(), self.end.as_deref())
    }

    pub fn contains_arrival(&self, departure: Option<&str>, arrival: Option<&str>) -> bool {
        is_arrival_time_in_range(
            departure,
            arrival,
            self.start.as_deref(),
            self.end.as_deref(),
        )
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.start, &self.end) {
            (Some(start), Some(end)) => write!(f, "{}-{}", start, end),
            _ => write!(f, "any"),
        }
    }
}
