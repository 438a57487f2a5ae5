// ABOUTME: Canonical date formatting for RSS pubDate and lastBuildDate values.
// ABOUTME: Renders RFC 1123 with a numeric zone, e.g. "Mon, 02 Jan 2006 15:04:05 -0700".

use chrono::{DateTime, TimeZone, Utc};

/// chrono pattern for RFC 1123 with a numeric offset.
pub const RFC1123Z: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Formats a timestamp in the canonical feed date format, keeping its offset.
pub fn format_rfc1123z<Tz>(dt: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    dt.format(RFC1123Z).to_string()
}

/// Formats the given timestamp, or the current UTC time when none is supplied.
pub fn format_or_now(dt: Option<DateTime<Utc>>) -> String {
    format_rfc1123z(&dt.unwrap_or_else(Utc::now))
}
