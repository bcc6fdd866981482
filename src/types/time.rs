//! Calendar helpers for drawing timestamps
//!
//! Drawing dates are kept as [`NaiveDateTime`] and editing times as
//! [`Duration`]. The two constructors below take explicit calendar
//! components so generated programs stay readable and diffable.

pub use chrono::{Duration, NaiveDateTime};
use chrono::{Datelike, NaiveDate, Timelike};

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Build a timestamp from calendar components
///
/// Out-of-range components yield the Unix epoch rather than panicking.
pub fn datetime(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    millis: u32,
) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_milli_opt(hour, minute, second, millis))
        .unwrap_or_default()
}

/// Build a duration from day/hour/minute/second/millisecond components
pub fn duration(days: i64, hours: i64, minutes: i64, seconds: i64, millis: i64) -> Duration {
    Duration::milliseconds(
        days * MILLIS_PER_DAY
            + hours * MILLIS_PER_HOUR
            + minutes * MILLIS_PER_MINUTE
            + seconds * MILLIS_PER_SECOND
            + millis,
    )
}

/// Split a timestamp into the arguments of [`datetime`]
pub fn datetime_components(value: &NaiveDateTime) -> (i32, u32, u32, u32, u32, u32, u32) {
    (
        value.year(),
        value.month(),
        value.day(),
        value.hour(),
        value.minute(),
        value.second(),
        value.nanosecond() / 1_000_000,
    )
}

/// Split a duration into the arguments of [`duration`]
///
/// All components carry the sign of the duration. Sub-millisecond
/// precision is dropped.
pub fn duration_components(value: &Duration) -> (i64, i64, i64, i64, i64) {
    let total = value.num_milliseconds();
    let days = total / MILLIS_PER_DAY;
    let rest = total % MILLIS_PER_DAY;
    let hours = rest / MILLIS_PER_HOUR;
    let rest = rest % MILLIS_PER_HOUR;
    let minutes = rest / MILLIS_PER_MINUTE;
    let rest = rest % MILLIS_PER_MINUTE;
    (days, hours, minutes, rest / MILLIS_PER_SECOND, rest % MILLIS_PER_SECOND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datetime_components_round_trip() {
        let value = datetime(2024, 2, 29, 13, 45, 7, 250);
        assert_eq!(datetime_components(&value), (2024, 2, 29, 13, 45, 7, 250));
    }

    #[test]
    fn test_invalid_datetime_falls_back_to_epoch() {
        assert_eq!(datetime(2023, 2, 30, 0, 0, 0, 0), NaiveDateTime::default());
    }

    #[test]
    fn test_duration_components_round_trip() {
        let value = duration(3, 4, 5, 6, 7);
        let (d, h, m, s, ms) = duration_components(&value);
        assert_eq!((d, h, m, s, ms), (3, 4, 5, 6, 7));
        assert_eq!(duration(d, h, m, s, ms), value);
    }

    #[test]
    fn test_negative_duration_components() {
        let value = -duration(0, 1, 30, 0, 0);
        let (d, h, m, s, ms) = duration_components(&value);
        assert_eq!((d, h, m, s, ms), (0, -1, -30, 0, 0));
        assert_eq!(duration(d, h, m, s, ms), value);
    }
}
