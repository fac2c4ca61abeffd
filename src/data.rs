use crate::airport::AirportCode;
use crate::error::SearchResult;
use crate::flight::{Offer, Segment};
use crate::query::SearchQuery;
use crate::source::FlightSource;
use crate::time::clock_of;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// One leg as it appears in the mock data. Every field is optional; gaps are filled in
/// during normalization.
#[derive(Debug, Default, Deserialize)]
pub struct RawLeg {
    pub airline: Option<String>,
    pub flight_number: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub departure: Option<String>,
    pub arrival: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawFlight {
    pub id: Option<String>,
    #[serde(flatten)]
    pub leg: RawLeg,
    pub price: Option<f64>,
    pub currency: Option<String>,
    /// Block time in minutes, when the data knows it.
    pub duration: Option<u32>,
    #[serde(default)]
    pub legs: Vec<RawLeg>,
}

#[derive(Deserialize)]
struct Scenario {
    flights: Vec<RawFlight>,
}

const DEFAULT_CURRENCY: &str = "EUR";

fn normalize_time(value: Option<&str>) -> String {
    match value {
        Some(value) => clock_of(value).unwrap_or(value.trim()).to_string(),
        None => String::new(),
    }
}

fn normalize_leg(leg: &RawLeg) -> Option<Segment> {
    let code = |c: &Option<String>| -> Option<AirportCode> {
        c.as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(|c| Arc::from(c.to_ascii_uppercase()))
    };
    Some(Segment {
        carrier: Arc::from(leg.airline.as_deref().unwrap_or("").trim()),
        flight_number: Arc::from(leg.flight_number.as_deref().unwrap_or("").trim()),
        origin: code(&leg.from)?,
        destination: code(&leg.to)?,
        departure_time: normalize_time(leg.departure.as_deref()),
        arrival_time: normalize_time(leg.arrival.as_deref()),
    })
}

/// Turns a raw mock record into an [`Offer`].
///
/// Connecting offers list their `legs`; direct ones carry a single leg inline. Records
/// without a usable route are dropped. Unreadable times are kept as-is, the time filters
/// cope with them.
pub fn normalize(raw: &RawFlight, index: usize) -> Option<Offer> {
    let id: Arc<str> = match &raw.id {
        Some(id) => Arc::from(id.as_str()),
        None => Arc::from(format!("OF_{}", index + 1)),
    };

    let segments = if raw.legs.is_empty() {
        normalize_leg(&raw.leg).into_iter().collect::<Vec<_>>()
    } else {
        let segments = raw.legs.iter().filter_map(normalize_leg).collect::<Vec<_>>();
        if segments.len() != raw.legs.len() {
            warn!(offer = %id, "dropping offer with an incomplete leg");
            return None;
        }
        segments
    };

    if segments.is_empty() {
        warn!(offer = %id, "dropping offer without origin or destination");
        return None;
    }

    Some(Offer {
        id,
        segments,
        price: raw.price.unwrap_or(0.0),
        currency: Arc::from(raw.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)),
        duration_minutes: raw.duration,
    })
}

/// Offers read from a scenario file, served without any network access.
pub struct MockSource {
    pub offers: Vec<Offer>,
}

impl MockSource {
    pub fn from_json(data: &str) -> SearchResult<Self> {
        let scenario: Scenario = serde_json::from_str(data)?;
        let offers = scenario
            .flights
            .iter()
            .enumerate()
            .filter_map(|(i, raw)| normalize(raw, i))
            .collect::<Vec<_>>();
        debug!(
            raw = scenario.flights.len(),
            kept = offers.len(),
            "normalized scenario"
        );
        Ok(MockSource { offers })
    }

    pub fn load_from_file(path: &Path) -> SearchResult<Self> {
        let data = std::fs::read_to_string(path)?;
        let source = Self::from_json(&data)?;
        info!(path = %path.display(), offers = source.offers.len(), "loaded scenario");
        Ok(source)
    }
}

impl FlightSource for MockSource {
    fn search(&self, query: &SearchQuery) -> SearchResult<Vec<Offer>> {
        let found = self
            .offers
            .iter()
            .filter(|o| o.origin() == Some(&query.origin))
            .filter(|o| o.destination() == Some(&query.destination))
            .cloned()
            .collect::<Vec<_>>();
        debug!(%query, found = found.len(), "mock search");
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::filter_by_window;
    use crate::window::TimeWindow;
    use chrono::NaiveDate;

    const SCENARIO: &str = r#"{
        "flights": [
            {"id": "LO1", "airline": "LO", "flight_number": "3901", "from": "krk", "to": "waw",
             "departure": "2025-06-02T08:00:00", "arrival": "2025-06-02T09:05:00", "price": 89.5},
            {"airline": "FR", "flight_number": "1", "from": "KRK", "to": "WAW",
             "departure": "23:10", "arrival": "00:20"},
            {"id": "BROKEN", "from": "KRK", "departure": "10:00", "arrival": "11:00"},
            {"id": "CONN", "price": 410, "currency": "USD", "duration": 655, "legs": [
                {"airline": "LO", "flight_number": "3902", "from": "KRK", "to": "WAW",
                 "departure": "18:00", "arrival": "19:00"},
                {"airline": "LO", "flight_number": "26", "from": "WAW", "to": "JFK",
                 "departure": "20:30", "arrival": "soon"}
            ]},
            {"id": "HALF", "legs": [{"from": "KRK", "to": "WAW"}, {"from": "WAW"}]}
        ]
    }"#;

    fn query(origin: &str, destination: &str) -> SearchQuery {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        SearchQuery::parse(origin, destination, "2025-06-02", today).unwrap()
    }

    #[test]
    fn test_normalizes_direct_flight() {
        let source = MockSource::from_json(SCENARIO).unwrap();
        let offer = &source.offers[0];

        assert_eq!("LO1", &*offer.id);
        assert_eq!("KRK-WAW", offer.route());
        assert_eq!(Some("08:00"), offer.departure_time());
        assert_eq!(Some("09:05"), offer.arrival_time());
        assert_eq!(89.5, offer.price);
        assert_eq!("EUR", &*offer.currency);
    }

    #[test]
    fn test_fills_in_defaults() {
        let source = MockSource::from_json(SCENARIO).unwrap();
        let offer = &source.offers[1];

        assert_eq!("OF_2", &*offer.id);
        assert_eq!(0.0, offer.price);
        assert_eq!(Some(70), offer.total_minutes());
    }

    #[test]
    fn test_drops_records_without_route() {
        let source = MockSource::from_json(SCENARIO).unwrap();
        let ids = source.offers.iter().map(|o| o.id.to_string()).collect::<Vec<_>>();

        assert_eq!(vec!["LO1", "OF_2", "CONN"], ids);
    }

    #[test]
    fn test_keeps_unreadable_times() {
        let source = MockSource::from_json(SCENARIO).unwrap();
        let offer = &source.offers[2];

        assert_eq!(1, offer.stops());
        assert_eq!(Some("soon"), offer.arrival_time());
        assert_eq!(Some(655), offer.total_minutes());
        assert_eq!("USD", &*offer.currency);
    }

    #[test]
    fn test_search_matches_route_ends() {
        let source = MockSource::from_json(SCENARIO).unwrap();

        let direct = source.search(&query("KRK", "WAW")).unwrap();
        assert_eq!(2, direct.len());

        let connecting = source.search(&query("krk", "jfk")).unwrap();
        assert_eq!(1, connecting.len());
        assert_eq!("CONN", &*connecting[0].id);

        assert!(source.search(&query("WAW", "KRK")).unwrap().is_empty());
    }

    #[test]
    fn test_zoned_timestamps_keep_their_clock() {
        let raw = RawFlight {
            leg: RawLeg {
                from: Some("KRK".to_string()),
                to: Some("LHR".to_string()),
                departure: Some("2025-06-02T23:00Z".to_string()),
                arrival: Some("2025-06-03T02:00+01:00".to_string()),
                ..RawLeg::default()
            },
            ..RawFlight::default()
        };
        let offer = normalize(&raw, 0).unwrap();

        assert_eq!(Some("23:00"), offer.departure_time());
        assert_eq!(Some("02:00"), offer.arrival_time());
        assert!(TimeWindow::new(Some("00:00"), Some("03:00")).contains_arrival(
            offer.departure_time(),
            offer.arrival_time()
        ));
    }

    #[test]
    fn test_bundled_scenario() {
        let source = MockSource::from_json(include_str!("../data/flights.json")).unwrap();
        assert_eq!(11, source.offers.len());

        let london = source.search(&query("KRK", "LHR")).unwrap();
        let night = TimeWindow::new(Some("00:00"), Some("03:00"));
        let kept = filter_by_window(&london, &TimeWindow::any(), &night);
        assert_eq!(vec!["BA5363"], kept.iter().map(|o| o.id.to_string()).collect::<Vec<_>>());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            MockSource::from_json("{\"flights\": 3}"),
            Err(crate::error::SearchError::Json(_))
        ));
    }
}
