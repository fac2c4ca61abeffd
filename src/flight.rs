use crate::airport::AirportCode;
use crate::window::{DayShift, duration_minutes};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub type OfferId = Arc<str>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub carrier: Arc<str>,
    pub flight_number: Arc<str>,
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub departure_time: String,
    pub arrival_time: String,
}

/// A bookable itinerary: one or more segments sold at a single price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: OfferId,
    pub segments: Vec<Segment>,
    pub price: f64,
    pub currency: Arc<str>,
    pub duration_minutes: Option<u32>,
}

impl Offer {
    pub fn departure_time(&self) -> Option<&str> {
        self.segments.first().map(|s| s.departure_time.as_str())
    }

    pub fn arrival_time(&self) -> Option<&str> {
        self.segments.last().map(|s| s.arrival_time.as_str())
    }

    pub fn origin(&self) -> Option<&AirportCode> {
        self.segments.first().map(|s| &s.origin)
    }

    pub fn destination(&self) -> Option<&AirportCode> {
        self.segments.last().map(|s| &s.destination)
    }

    pub fn stops(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }

    pub fn day_shift(&self) -> DayShift {
        match (self.departure_time(), self.arrival_time()) {
            (Some(dep), Some(arr)) => DayShift::classify(dep, arr),
            _ => DayShift::SameDay,
        }
    }

    /// Explicit duration from the data when present, otherwise derived from the clock times.
    pub fn total_minutes(&self) -> Option<u32> {
        self.duration_minutes.or_else(|| {
            self.departure_time()
                .zip(self.arrival_time())
                .and_then(|(dep, arr)| duration_minutes(dep, arr))
        })
    }

    pub fn flight_numbers(&self) -> String {
        self.segments
            .iter()
            .map(|s| format!("{}{}", s.carrier, s.flight_number))
            .collect::<Vec<_>>()
            .join("/")
    }

    pub fn route(&self) -> String {
        let mut codes = self
            .segments
            .iter()
            .map(|s| s.origin.to_string())
            .collect::<Vec<_>>();
        if let Some(last) = self.destination() {
            codes.push(last.to_string());
        }
        codes.join("-")
    }
}
