//! Search Model
//!
//! Raw input vs. the debounced value the listing is filtered by.
//! The quiet-period timer itself lives in the controller; this type only
//! records the state transitions.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    /// What the user has typed so far
    pub raw: String,
    /// Value the listing is filtered by
    pub debounced: String,
    /// True while `raw` is waiting for the quiet period to elapse
    pub pending: bool,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record new input; the caller (re)starts the timer
    pub fn input(&mut self, text: impl Into<String>) {
        self.raw = text.into();
        self.pending = true;
    }

    /// Quiet period elapsed: publish `raw`
    pub fn settle(&mut self) {
        self.debounced = self.raw.clone();
        self.pending = false;
    }

    pub fn clear(&mut self) {
        self.raw.clear();
        self.debounced.clear();
        self.pending = false;
    }

    pub fn is_active(&self) -> bool {
        !self.raw.is_empty() || !self.debounced.is_empty()
    }
}
