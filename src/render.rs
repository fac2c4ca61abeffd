use crate::flight::Offer;
use crate::search::SearchState;
use colored::Colorize;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
pub struct OfferRow {
    #[tabled(rename = "Flight")]
    pub flight: String,
    #[tabled(rename = "Route")]
    pub route: String,
    #[tabled(rename = "Departs")]
    pub departs: String,
    #[tabled(rename = "Arrives")]
    pub arrives: String,
    #[tabled(rename = "Duration")]
    pub duration: String,
    #[tabled(rename = "Stops")]
    pub stops: String,
    #[tabled(rename = "Price")]
    pub price: String,
}

pub fn format_duration(minutes: Option<u32>) -> String {
    match minutes {
        Some(m) => format!("{}h {:02}m", m / 60, m % 60),
        None => "?".to_string(),
    }
}

impl From<&Offer> for OfferRow {
    fn from(offer: &Offer) -> Self {
        let arrives = offer.arrival_time().unwrap_or("?").to_string();
        let arrives = match offer.day_shift().badge() {
            Some(badge) => format!("{} {}", arrives, badge.yellow().bold()),
            None => arrives,
        };
        OfferRow {
            flight: offer.flight_numbers(),
            route: offer.route(),
            departs: offer.departure_time().unwrap_or("?").to_string(),
            arrives,
            duration: format_duration(offer.total_minutes()),
            stops: match offer.stops() {
                0 => "direct".to_string(),
                n => n.to_string(),
            },
            price: format!("{:.2} {}", offer.price, offer.currency),
        }
    }
}

pub fn table(offers: &[&Offer]) -> String {
    let rows = offers.iter().map(|o| OfferRow::from(*o)).collect::<Vec<_>>();
    let mut table = Table::new(&rows);
    table.with(Style::rounded());
    table.with(Alignment::left());
    table.to_string()
}

/// One line describing the query, active filters and how many offers survive them.
pub fn status(state: &SearchState, shown: usize) -> String {
    let query = match &state.query {
        Some(query) => query.to_string(),
        None => "no search yet".to_string(),
    };
    let mut filters = vec![];
    if !state.departure.is_unbounded() {
        filters.push(format!("dep {}{}", state.departure, overnight(state.departure.wraps_midnight())));
    }
    if !state.arrival.is_unbounded() {
        filters.push(format!("arr {}{}", state.arrival, overnight(state.arrival.wraps_midnight())));
    }
    if let Some(max) = state.max_stops {
        filters.push(format!("stops <= {}", max));
    }
    let filters = if filters.is_empty() {
        "no filters".to_string()
    } else {
        filters.join(", ")
    };
    format!(
        "{} | {} | {} of {} offers, sorted by {:?}",
        query,
        filters,
        shown,
        state.offers.len(),
        state.sort
    )
}

fn overnight(wraps: bool) -> &'static str {
    if wraps { " (overnight)" } else { "" }
}
