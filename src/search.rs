use crate::flight::Offer;
use crate::query::SearchQuery;
use crate::time::to_minute_of_day;
use crate::window::TimeWindow;
use clap::ValueEnum;
use std::cmp::Ordering;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    #[default]
    Price,
    Duration,
    Departure,
    Arrival,
}

pub enum Event {
    Searched {
        query: SearchQuery,
        offers: Vec<Offer>,
    },
    SearchFailed(String),
    DepartureWindow(TimeWindow),
    ArrivalWindow(TimeWindow),
    MaxStops(Option<usize>),
    Sort(SortKey),
    ClearFilters,
}

/// Everything the results view shows. Only [`SearchState::apply`] produces a new state.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: Option<SearchQuery>,
    pub offers: Vec<Offer>,
    pub departure: TimeWindow,
    pub arrival: TimeWindow,
    pub max_stops: Option<usize>,
    pub sort: SortKey,
    pub error: Option<String>,
}

impl SearchState {
    pub fn apply(self, event: Event) -> SearchState {
        match event {
            Event::Searched { query, offers } => {
                debug!(%query, offers = offers.len(), "search completed");
                SearchState {
                    query: Some(query),
                    offers,
                    error: None,
                    ..self
                }
            }
            Event::SearchFailed(error) => SearchState {
                offers: vec![],
                error: Some(error),
                ..self
            },
            Event::DepartureWindow(departure) => SearchState { departure, ..self },
            Event::ArrivalWindow(arrival) => SearchState { arrival, ..self },
            Event::MaxStops(max_stops) => SearchState { max_stops, ..self },
            Event::Sort(sort) => SearchState { sort, ..self },
            Event::ClearFilters => SearchState {
                departure: TimeWindow::any(),
                arrival: TimeWindow::any(),
                max_stops: None,
                ..self
            },
        }
    }

    /// Offers that pass every active filter, in the chosen order.
    pub fn visible(&self) -> Vec<&Offer> {
        let mut offers = filter_by_window(&self.offers, &self.departure, &self.arrival)
            .into_iter()
            .filter(|o| self.max_stops.map_or(true, |max| o.stops() <= max))
            .collect::<Vec<_>>();
        // stable, so ties keep file order
        offers.sort_by(|a, b| compare(self.sort, a, b));
        offers
    }
}

/// Keeps the offers whose first departure and final arrival fall inside the given windows,
/// preserving their order.
pub fn filter_by_window<'a>(
    offers: &'a [Offer],
    departure: &TimeWindow,
    arrival: &TimeWindow,
) -> Vec<&'a Offer> {
    offers
        .iter()
        .filter(|o| departure.contains(o.departure_time()))
        .filter(|o| arrival.contains_arrival(o.departure_time(), o.arrival_time()))
        .collect()
}

// missing values sort last
fn by_option<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare(key: SortKey, a: &Offer, b: &Offer) -> Ordering {
    match key {
        SortKey::Price => a.price.total_cmp(&b.price),
        SortKey::Duration => by_option(a.total_minutes(), b.total_minutes()),
        SortKey::Departure => by_option(
            a.departure_time().and_then(to_minute_of_day),
            b.departure_time().and_then(to_minute_of_day),
        ),
        SortKey::Arrival => by_option(
            a.arrival_time().and_then(to_minute_of_day),
            b.arrival_time().and_then(to_minute_of_day),
        ),
    }
}
