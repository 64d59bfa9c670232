//! Business Logic
//!
//! Pure functions that can be unit tested without a controller:
//! - errors: User-facing error messages
//! - formatting: Sizes and timestamps for the listing
//! - search: Client-side name matching
//! - sorting: Listing order
//! - ui: UI state transitions and cycling

pub mod errors;
pub mod formatting;
pub mod search;
pub mod sorting;
pub mod ui;
