pub mod appointment;
pub mod holiday;
pub mod schedule;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Half-open timestamp bounds covering every day in `[start, end]`.
pub(crate) fn day_bounds(start: NaiveDate, end: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let after_end = end.succ_opt().unwrap_or(NaiveDate::MAX);
    (start.and_time(NaiveTime::MIN), after_end.and_time(NaiveTime::MIN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_bounds_cover_whole_days() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 16).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 22).unwrap();

        let (lower, upper) = day_bounds(start, end);

        assert_eq!(lower.to_string(), "2024-03-16 00:00:00");
        assert_eq!(upper.to_string(), "2024-03-23 00:00:00");
    }
}
