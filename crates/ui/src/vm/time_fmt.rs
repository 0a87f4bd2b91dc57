use chrono::{DateTime, Utc};

#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Whole minutes and seconds between two instants, e.g. `4m 05s`.
#[must_use]
pub fn format_elapsed(from: DateTime<Utc>, to: DateTime<Utc>) -> String {
    let seconds = (to - from).num_seconds().max(0);
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    format!("{minutes}m {remainder:02}s")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use quiz_core::time::fixed_now;

    #[test]
    fn formats_fixed_timestamp() {
        assert_eq!(format_datetime(fixed_now()), "2023-11-14 22:13 UTC");
    }

    #[test]
    fn elapsed_never_goes_negative() {
        let now = fixed_now();
        assert_eq!(format_elapsed(now, now + Duration::seconds(245)), "4m 05s");
        assert_eq!(format_elapsed(now, now - Duration::seconds(3)), "0m 00s");
    }
}
