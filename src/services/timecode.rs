use chrono::{Duration, NaiveDate};

/// Formats a second count as a zero-padded `HH:MM:SS` wall-clock string by
/// adding it as a duration to a fixed epoch. Inputs of 24h and beyond wrap
/// around the day boundary (90000 -> "01:00:00"); very long media keep the
/// upstream platform's historical behavior.
pub fn format_time(seconds: i64) -> String {
    let epoch = NaiveDate::from_ymd_opt(1900, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("static epoch is a valid date");
    let moment = epoch + Duration::seconds(seconds);
    moment.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_zero() {
        assert_eq!(format_time(0), "00:00:00");
    }

    #[test]
    fn format_time_mixed_units() {
        assert_eq!(format_time(3661), "01:01:01");
    }

    #[test]
    fn format_time_just_under_a_day() {
        assert_eq!(format_time(86399), "23:59:59");
    }

    #[test]
    fn format_time_wraps_past_a_day() {
        assert_eq!(format_time(86400), "00:00:00");
        assert_eq!(format_time(90000), "01:00:00");
    }

    #[test]
    fn format_time_pads_single_digits() {
        assert_eq!(format_time(61), "00:01:01");
    }
}
