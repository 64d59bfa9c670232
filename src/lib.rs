//! Cloud storage TUI library
//!
//! Exposes the API client, session handling and the dashboard controller
//! so they can be driven from tests without a terminal.

pub mod api;
pub mod config;
pub mod controller;
pub mod logic;
pub mod model;
pub mod session;
pub mod token_store;

/// File info display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Off,              // No timestamp or size
    TimestampOnly,    // Show timestamp only
    TimestampAndSize, // Show both size and timestamp
}

/// Sort mode for file listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    Alphabetical, // Sort alphabetically
    LastModified, // Sort by creation/upload time, newest first
    FileSize,     // Sort by file size, largest first
}

impl SortMode {
    pub fn as_str(&self) -> &str {
        match self {
            SortMode::Alphabetical => "A-Z",
            SortMode::LastModified => "Timestamp",
            SortMode::FileSize => "Size",
        }
    }
}
