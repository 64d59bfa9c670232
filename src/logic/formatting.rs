//! Formatting and display logic
//!
//! Pure functions for formatting data for human-readable display.

use chrono::{DateTime, Local};

/// Format byte size to human-readable
///
/// # Examples
/// ```
/// use cloudtui::logic::formatting::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(512), "512 B");
/// assert_eq!(format_size(1536), "1.5 KB");
/// assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let units = ["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < units.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} {}", size, units[unit_index])
    }
}

/// Format an RFC 3339 timestamp as local "YYYY-MM-DD HH:MM"
///
/// Strings that do not parse are shortened by splitting on 'T'.
pub fn format_timestamp(timestamp: &str) -> String {
    if timestamp.is_empty() {
        return String::new();
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        return parsed
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string();
    }

    match timestamp.split_once('T') {
        Some((date, time)) => {
            let time = time.split(':').take(2).collect::<Vec<_>>().join(":");
            format!("{} {}", date, time)
        }
        None => timestamp.to_string(),
    }
}
