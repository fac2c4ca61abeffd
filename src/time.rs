use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, Hash, Serialize, Deserialize, PartialOrd)]
pub struct MinuteOfDay(pub u32);

impl MinuteOfDay {
    pub const MINUTES_PER_DAY: u32 = 1440;
}

/// Converts an `HH:MM` clock string into minutes since midnight.
///
/// Anything after a second `:` (seconds) is ignored. Hours and minutes are not range
/// checked, so `"25:99"` gives 1599. Returns `None` when either component is missing,
/// empty, or contains anything but ASCII digits, so signed values such as `"+5:00"` and
/// `"-1:00"` are both rejected.
pub fn to_minute_of_day(time: &str) -> Option<MinuteOfDay> {
    let mut parts = time.split(':');
    let hours = digits(parts.next()?)?;
    let minutes = digits(parts.next()?)?;
    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .map(MinuteOfDay)
}

fn digits(part: &str) -> Option<u32> {
    let part = part.trim();
    if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    part.parse::<u32>().ok()
}

/// Picks the `HH:MM` part out of either a bare clock time or an ISO-like
/// `YYYY-MM-DDTHH:MM[:SS][.fff][zone]` timestamp.
///
/// Takes one or two hour digits and exactly two minute digits; whatever follows
/// (seconds, fractions, `Z`, `+02:00`) is ignored.
pub fn clock_of(value: &str) -> Option<&str> {
    let value = value.trim();
    let clock = match value.split_once(['T', ' ']) {
        Some((_, rest)) => rest.trim_start(),
        None => value,
    };
    let hours = clock.chars().take_while(|c| c.is_ascii_digit()).count();
    if !(1..=2).contains(&hours) {
        return None;
    }
    let rest = clock[hours..].strip_prefix(':')?;
    let minutes = rest.get(..2)?;
    if !minutes.chars().all(|c| c.is_ascii_digit())
        || rest[2..].starts_with(|c: char| c.is_ascii_digit())
    {
        return None;
    }
    Some(&clock[..hours + 3])
}

impl std::fmt::Display for MinuteOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}
