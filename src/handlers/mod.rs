//! Event Handlers
//!
//! Terminal input is the only external event source; background completions
//! are drained by the controller itself in the main loop.
//! - keyboard: User keyboard input, dispatched by route and open dialog

pub mod keyboard;

// Re-export for convenience
pub use keyboard::handle_key;
