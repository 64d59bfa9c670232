//! UI state transition logic
//!
//! Pure functions for UI state cycling and transitions.

use crate::{DisplayMode, SortMode};

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 1500;

/// Cycle to the next display mode: Off → TimestampOnly → TimestampAndSize → Off
///
/// # Examples
/// ```
/// use cloudtui::DisplayMode;
/// use cloudtui::logic::ui::cycle_display_mode;
///
/// assert_eq!(cycle_display_mode(DisplayMode::Off), DisplayMode::TimestampOnly);
/// assert_eq!(cycle_display_mode(DisplayMode::TimestampOnly), DisplayMode::TimestampAndSize);
/// assert_eq!(cycle_display_mode(DisplayMode::TimestampAndSize), DisplayMode::Off);
/// ```
pub fn cycle_display_mode(current: DisplayMode) -> DisplayMode {
    match current {
        DisplayMode::Off => DisplayMode::TimestampOnly,
        DisplayMode::TimestampOnly => DisplayMode::TimestampAndSize,
        DisplayMode::TimestampAndSize => DisplayMode::Off,
    }
}

/// Cycle to the next sort mode: A-Z → Timestamp → Size → A-Z
pub fn cycle_sort_mode(current: SortMode) -> SortMode {
    match current {
        SortMode::Alphabetical => SortMode::LastModified,
        SortMode::LastModified => SortMode::FileSize,
        SortMode::FileSize => SortMode::Alphabetical,
    }
}

/// Whether a toast shown `elapsed_ms` ago should be removed
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}
