//! Human-readable timestamps for the item timeline.

use chrono::{DateTime, Datelike, Utc};

/// Format a publication date relative to `now`.
///
/// Recent dates collapse to "just now" / "5m ago" / "2h ago" / "3d ago";
/// anything a week or more old becomes an absolute month/day, with the
/// year appended only when it differs from the current one. Dates in the
/// future (clock skew between feed and client) read as "just now".
pub fn relative_date(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(date);

    if elapsed.num_seconds() < 60 {
        return "just now".to_string();
    }
    if elapsed.num_minutes() < 60 {
        return format!("{}m ago", elapsed.num_minutes());
    }
    if elapsed.num_hours() < 24 {
        return format!("{}h ago", elapsed.num_hours());
    }
    if elapsed.num_days() < 7 {
        return format!("{}d ago", elapsed.num_days());
    }

    if date.year() == now.year() {
        date.format("%b %-d").to_string()
    } else {
        date.format("%b %-d, %Y").to_string()
    }
}

/// [`relative_date`] against the current clock.
pub fn relative_to_now(date: DateTime<Utc>) -> String {
    relative_date(date, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap()
    }

    #[test]
    fn under_a_minute_is_just_now() {
        assert_eq!(relative_date(now() - Duration::seconds(30), now()), "just now");
    }

    #[test]
    fn minutes_and_hours_and_days() {
        assert_eq!(relative_date(now() - Duration::minutes(5), now()), "5m ago");
        assert_eq!(relative_date(now() - Duration::hours(2), now()), "2h ago");
        assert_eq!(relative_date(now() - Duration::days(3), now()), "3d ago");
    }

    #[test]
    fn a_week_or_more_becomes_absolute() {
        assert_eq!(relative_date(now() - Duration::days(10), now()), "Jul 27");
    }

    #[test]
    fn absolute_dates_in_other_years_carry_the_year() {
        let old = Utc.with_ymd_and_hms(2025, 12, 30, 8, 0, 0).unwrap();
        assert_eq!(relative_date(old, now()), "Dec 30, 2025");
    }

    #[test]
    fn future_dates_read_as_just_now() {
        assert_eq!(relative_date(now() + Duration::minutes(10), now()), "just now");
    }
}
