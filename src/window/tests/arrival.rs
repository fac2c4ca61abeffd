use crate::window::TimeWindow;
use crate::window::is_arrival_time_in_range;
use crate::window::tests::utils::arrival_in_range;

#[test]
fn test_overnight_arrival_matches_morning_window() {
    assert!(arrival_in_range("23:00", "01:00", "00:00", "02:00"));
}

#[test]
fn test_overnight_arrival_outside_window() {
    assert!(!arrival_in_range("23:00", "03:00", "00:00", "02:00"));
    assert!(!arrival_in_range("14:00", "13:55", "00:00", "03:00"));
}

#[test]
fn test_same_day_arrival() {
    assert!(arrival_in_range("08:00", "10:30", "06:00", "12:00"));
    assert!(!arrival_in_range("08:00", "12:30", "06:00", "12:00"));
}

#[test]
fn test_arrival_day_is_ignored() {
    // both land at 07:00, one on the departure day and one the day after
    assert!(arrival_in_range("05:00", "07:00", "06:00", "12:00"));
    assert!(arrival_in_range("22:00", "07:00", "06:00", "12:00"));
}

#[test]
fn test_wrapping_arrival_window() {
    assert!(arrival_in_range("20:00", "23:30", "22:00", "06:00"));
    assert!(arrival_in_range("22:30", "01:15", "22:00", "06:00"));
    assert!(!arrival_in_range("09:00", "11:00", "22:00", "06:00"));
}

#[test]
fn test_absent_inputs_allow_all() {
    assert!(is_arrival_time_in_range(Some("10:00"), Some("11:00"), Some(""), Some("")));
    assert!(is_arrival_time_in_range(Some("10:00"), None, Some("00:00"), Some("01:00")));
    assert!(is_arrival_time_in_range(Some("10:00"), Some("11:00"), None, Some("01:00")));
}

#[test]
fn test_missing_departure_still_filters() {
    assert!(is_arrival_time_in_range(None, Some("11:00"), Some("10:00"), Some("12:00")));
    assert!(!is_arrival_time_in_range(None, Some("13:00"), Some("10:00"), Some("12:00")));
}

#[test]
fn test_malformed_arrival_never_matches() {
    assert!(!arrival_in_range("10:00", "1100", "10:00", "12:00"));
    assert!(!arrival_in_range("10:00", "   ", "10:00", "12:00"));
}

#[test]
fn test_time_window_normalizes_empty_bounds() {
    let window = TimeWindow::new(Some(""), Some("06:00"));
    assert_eq!(None, window.start);
    assert_eq!(Some("06:00".to_string()), window.end);
    assert!(window.is_unbounded());
    assert!(window.contains(Some("23:00")));
}

#[test]
fn test_time_window_wraps_midnight() {
    let window = TimeWindow::new(Some("22:00"), Some("06:00"));
    assert!(window.wraps_midnight());
    assert!(window.contains(Some("02:00")));
    assert!(window.contains_arrival(Some("21:00"), Some("02:00")));
    assert!(!window.contains_arrival(Some("09:00"), Some("12:00")));
    assert_eq!("22:00-06:00", window.to_string());
    assert!(!TimeWindow::new(Some("06:00"), Some("22:00")).wraps_midnight());
}

#[test]
fn test_time_window_any() {
    let window = TimeWindow::any();
    assert!(window.is_unbounded());
    assert!(window.contains(Some("garbage")));
    assert_eq!("any", window.to_string());
}
