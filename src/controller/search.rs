//! Debounced search input
//!
//! Each input spawns a timer task and remembers its handle. A newer input
//! aborts the previous handle and bumps the generation, so a settle from an
//! older timer that already fired is ignored when it is handled.

use tracing::debug;

use super::{Controller, ControllerEvent};

impl Controller {
    pub fn update_search_input(&mut self, text: impl Into<String>) {
        self.model.search.input(text);

        self.cancel_search_timer();
        self.search_generation += 1;

        let generation = self.search_generation;
        let deadline = tokio::time::Instant::now() + self.debounce_delay;
        let tx = self.events_tx.clone();
        self.search_timer = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let _ = tx.send(ControllerEvent::SearchSettled { generation });
        }));
    }

    /// Append a character to the raw input (keyboard convenience)
    pub fn push_search_char(&mut self, c: char) {
        let mut text = self.model.search.raw.clone();
        text.push(c);
        self.update_search_input(text);
    }

    /// Remove the last character of the raw input (keyboard convenience)
    pub fn pop_search_char(&mut self) {
        let mut text = self.model.search.raw.clone();
        if text.pop().is_some() {
            self.update_search_input(text);
        }
    }

    pub fn clear_search(&mut self) {
        self.cancel_search_timer();
        self.search_generation += 1;
        self.model.search.clear();
    }

    pub fn search_generation(&self) -> u64 {
        self.search_generation
    }

    pub(super) fn cancel_search_timer(&mut self) {
        if let Some(handle) = self.search_timer.take() {
            handle.abort();
        }
    }

    pub(super) fn on_search_settled(&mut self, generation: u64) {
        if generation != self.search_generation || !self.model.search.pending {
            debug!(
                generation,
                current = self.search_generation,
                "Dropping superseded search settle"
            );
            return;
        }
        self.search_timer = None;
        self.model.search.settle();
        debug!(query = %self.model.search.debounced, "Search settled");
    }
}
