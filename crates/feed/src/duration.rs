// ABOUTME: Duration formatting for itunes:duration values.
// ABOUTME: Renders whole seconds as M:SS, MM:SS, H:MM:SS or HH:MM:SS.

/// Formats a duration in seconds the way podcast directories display it.
/// Negative input is treated as zero.
pub fn format_duration(seconds: i64) -> String {
    let total = seconds.max(0);
    let hours = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;

    match (hours, mins) {
        (h, m) if h > 9 => format!("{:02}:{:02}:{:02}", h, m, secs),
        (h, m) if h > 0 => format!("{}:{:02}:{:02}", h, m, secs),
        (_, m) if m > 9 => format!("{:02}:{:02}", m, secs),
        (_, m) => format!("{}:{:02}", m, secs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_and_seconds() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(330), "5:30");
        assert_eq!(format_duration(2730), "45:30");
    }

    #[test]
    fn test_hours() {
        assert_eq!(format_duration(3723), "1:02:03");
        assert_eq!(format_duration(36_000), "10:00:00");
    }

    #[test]
    fn test_negative_clamps_to_zero() {
        assert_eq!(format_duration(-5), "0:00");
    }
}
