//! Field encoders for CUP records.

use crate::cup_types::{Distance, Magnitude, TaskDuration, TimeOfDay};
use crate::error::{CupError, Result};

/// Which coordinate axis a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

/// Quote a text field. Empty text yields an empty field without quotes.
pub fn escape(field: &str) -> String {
    if field.is_empty() {
        return String::new();
    }

    // backslashes first, quote escaping inserts new ones
    let escaped = field.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

/// Encode decimal degrees as `DDMM.MMM` + `N`/`S` or `DDDMM.MMM` + `E`/`W`.
pub fn format_coordinate(value: f64, axis: Axis) -> Result<String> {
    let (hemisphere, width) = match axis {
        Axis::Latitude => {
            if !(-90.0..=90.0).contains(&value) {
                return Err(CupError::InvalidLatitude(value));
            }
            (if value < 0.0 { 'S' } else { 'N' }, 2)
        }
        Axis::Longitude => {
            if !(-180.0..=180.0).contains(&value) {
                return Err(CupError::InvalidLongitude(value));
            }
            (if value < 0.0 { 'W' } else { 'E' }, 3)
        }
    };

    let value = value.abs();
    let mut degrees = value.trunc() as u32;
    let mut millis = ((value - value.trunc()) * 60_000.0).round() as u32;
    if millis >= 60_000 {
        degrees += 1;
        millis -= 60_000;
    }

    Ok(format!(
        "{degrees:0width$}{:02}.{:03}{hemisphere}",
        millis / 1000,
        millis % 1000
    ))
}

pub fn format_latitude(value: f64) -> Result<String> {
    format_coordinate(value, Axis::Latitude)
}

pub fn format_longitude(value: f64) -> Result<String> {
    format_coordinate(value, Axis::Longitude)
}

/// Render a distance with its unit; absent distances become an empty field.
pub fn format_distance(distance: Option<&Distance>) -> String {
    let Some(distance) = distance else {
        return String::new();
    };

    match &distance.magnitude {
        Magnitude::Decimal(v) => format!("{v:.1}{}", distance.unit),
        Magnitude::Integer(v) => format!("{v}{}", distance.unit),
        Magnitude::Text(v) if v.is_empty() => String::new(),
        Magnitude::Text(v) => format!("{v}{}", distance.unit),
    }
}

/// Render a time of day as `HH:MM:SS`.
pub fn format_time(time: &TimeOfDay) -> String {
    match time {
        TimeOfDay::Structured(t) => t.format("%H:%M:%S").to_string(),
        TimeOfDay::Preformatted(s) => s.clone(),
    }
}

/// Render a duration as `HH:MM:SS`. Hours do not wrap at 24.
pub fn format_timedelta(duration: &TaskDuration) -> String {
    match duration {
        TaskDuration::Structured(d) => {
            let total = d.num_seconds();
            let sign = if total < 0 { "-" } else { "" };
            let total = total.unsigned_abs();
            let (hours, rem) = (total / 3600, total % 3600);
            let (minutes, seconds) = (rem / 60, rem % 60);
            format!("{sign}{hours:02}:{minutes:02}:{seconds:02}")
        }
        TaskDuration::Preformatted(s) => s.clone(),
    }
}

pub fn format_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}
