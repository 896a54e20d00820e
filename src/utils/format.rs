//! Formatting utilities.

use chrono::{DateTime, TimeZone};

/// Render a timestamp the way `date` prints it: `Tue Mar 05 2024 14:07:09 GMT+0100`.
///
/// Names are always English, independent of the host locale.
pub fn format_timestamp<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    time.format("%a %b %d %Y %H:%M:%S GMT%z").to_string()
}
