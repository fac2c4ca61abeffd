use crate::data::MockSource;
use crate::error::{SearchError, SearchResult};
use crate::flight::Offer;
use crate::query::SearchQuery;
use clap::ValueEnum;
use std::path::Path;

pub trait FlightSource {
    fn search(&self, query: &SearchQuery) -> SearchResult<Vec<Offer>>;
}

/// Placeholder for a real flight API.
pub struct LiveSource;

impl FlightSource for LiveSource {
    fn search(&self, _query: &SearchQuery) -> SearchResult<Vec<Offer>> {
        Err(SearchError::LiveUnavailable)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Mock,
    Live,
}

impl Mode {
    pub fn open(self, scenario: &Path) -> SearchResult<Box<dyn FlightSource>> {
        match self {
            Mode::Mock => Ok(Box::new(MockSource::load_from_file(scenario)?)),
            Mode::Live => Ok(Box::new(LiveSource)),
        }
    }
}
