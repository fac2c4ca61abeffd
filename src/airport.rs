use std::sync::Arc;

pub type AirportCode = Arc<str>;

/// Uppercases a three-letter IATA code, rejecting anything else.
pub fn parse_code(code: &str) -> Option<AirportCode> {
    let code = code.trim();
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(Arc::from(code.to_ascii_uppercase()))
    } else {
        None
    }
}
