//! Session clock helpers.

use chrono::{DateTime, Local};
use std::time::{Duration, SystemTime};

/// Format the current time as H:MM:SS (24-hour format) in local time
pub fn format_current_time() -> String {
    format_time(SystemTime::now())
}

/// Format a SystemTime as H:MM:SS (24-hour format) in local time
pub fn format_time(time: SystemTime) -> String {
    let datetime: DateTime<Local> = time.into();
    // %-H is not portable to every strftime, so strip the zero by hand
    let formatted = datetime.format("%H:%M:%S").to_string();
    if formatted.starts_with('0') && !formatted[1..].starts_with(':') {
        formatted[1..].to_string()
    } else {
        formatted
    }
}

/// Human form of a session length, e.g. `0.042s` or `3s`
pub fn format_elapsed(elapsed: Duration) -> String {
    if elapsed < Duration::from_secs(1) {
        format!("{:.3}s", elapsed.as_secs_f64())
    } else {
        format!("{}s", elapsed.as_secs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_clock_format(formatted: &str) {
        // Length can be 7 (H:MM:SS) or 8 (HH:MM:SS) depending on hour
        assert!(formatted.len() >= 7 && formatted.len() <= 8);
        assert_eq!(formatted.matches(':').count(), 2);

        let parts: Vec<&str> = formatted.split(':').collect();
        let hours: u32 = parts[0].parse().expect("Hours should be valid number");
        let minutes: u32 = parts[1].parse().expect("Minutes should be valid number");
        let seconds: u32 = parts[2].parse().expect("Seconds should be valid number");
        assert!(hours < 24);
        assert!(minutes < 60);
        assert!(seconds < 60);
    }

    #[test]
    fn test_format_time_basic() {
        assert_clock_format(&format_time(SystemTime::now()));
    }

    #[test]
    fn test_format_current_time_is_valid_format() {
        assert_clock_format(&format_current_time());
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_millis(42)), "0.042s");
        assert_eq!(format_elapsed(Duration::from_millis(3500)), "3s");
        assert_eq!(format_elapsed(Duration::from_millis(1999)), "1s");
        assert_eq!(format_elapsed(Duration::ZERO), "0.000s");
    }
}
