//! Flight search over mock data with time-of-day filters that understand midnight.

pub mod airport;
pub mod data;
pub mod error;
pub mod flight;
pub mod query;
pub mod render;
pub mod search;
pub mod source;
pub mod time;
pub mod window;
