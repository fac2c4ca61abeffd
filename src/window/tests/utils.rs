use proptest::prelude::Strategy;

pub fn clock(minute_of_day: u32) -> String {
    format!("{:02}:{:02}", minute_of_day / 60, minute_of_day % 60)
}

pub fn in_range(time: &str, start: &str, end: &str) -> bool {
    crate::window::is_time_in_range(Some(time), Some(start), Some(end))
}

pub fn arrival_in_range(departure: &str, arrival: &str, start: &str, end: &str) -> bool {
    crate::window::is_arrival_time_in_range(Some(departure), Some(arrival), Some(start), Some(end))
}

pub fn arb_minute() -> impl Strategy<Value = u32> {
    0..1440u32
}

pub fn arb_clock() -> impl Strategy<Value = String> {
    arb_minute().prop_map(clock)
}
