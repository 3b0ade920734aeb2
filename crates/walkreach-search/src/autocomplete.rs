//! Debounced, cancellable address autocomplete.
//!
//! Independent of the search pipeline but layered over the same geocoder.
//! Each keystroke claims a new generation; the debounce sleep and the
//! in-flight fetch both re-check the generation before publishing, so
//! suggestions are never rendered for input the user has already replaced.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::watch;

use walkreach_client::Geocoder;
use walkreach_core::Suggestion;

#[derive(Debug, Clone, Copy)]
pub struct AutocompleteConfig {
    /// Trimmed inputs shorter than this never trigger a fetch.
    pub min_chars: usize,
    /// Quiet period after the last keystroke before a fetch is issued.
    pub debounce: Duration,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self {
            min_chars: 3,
            debounce: Duration::from_millis(300),
        }
    }
}

/// One session's autocomplete loop. Owns its own generation counter; it
/// shares no cancellation state with the search pipeline.
pub struct AutocompleteController<G> {
    geocoder: G,
    config: AutocompleteConfig,
    generation: AtomicU64,
    suggestions: watch::Sender<Vec<Suggestion>>,
}

impl<G: Geocoder> AutocompleteController<G> {
    pub fn new(geocoder: G) -> Self {
        Self::with_config(geocoder, AutocompleteConfig::default())
    }

    pub fn with_config(geocoder: G, config: AutocompleteConfig) -> Self {
        let (suggestions, _) = watch::channel(Vec::new());
        Self {
            geocoder,
            config,
            generation: AtomicU64::new(0),
            suggestions,
        }
    }

    /// A receiver for the dropdown to observe the current suggestion list.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Suggestion>> {
        self.suggestions.subscribe()
    }

    /// Handles one keystroke's worth of input.
    ///
    /// Claiming a new generation up front is what cancels any pending
    /// debounce from earlier keystrokes. Below the character threshold the
    /// list is cleared immediately and no request is made; otherwise the
    /// fetch is issued after the debounce interval, and its result is
    /// dropped if the input changed while it was pending or in flight.
    pub async fn on_input(&self, text: &str) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let trimmed = text.trim();

        if trimmed.chars().count() < self.config.min_chars {
            self.publish(generation, Vec::new());
            return;
        }

        let query = trimmed.to_owned();
        tokio::time::sleep(self.config.debounce).await;
        if self.generation.load(Ordering::SeqCst) != generation {
            return;
        }

        let results = self.geocoder.suggest(&query).await;
        self.publish(generation, results);
    }

    /// Clears the dropdown and invalidates anything pending (blur/escape).
    pub fn dismiss(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.publish(generation, Vec::new());
    }

    fn publish(&self, generation: u64, results: Vec<Suggestion>) {
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(generation, "dropping suggestions for superseded input");
            return;
        }
        self.suggestions.send_replace(results);
    }
}

/// Pure keyboard-navigation state over the currently rendered suggestion
/// list. Carries no I/O; the caller re-syncs it whenever the list changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropdownState {
    count: usize,
    highlighted: Option<usize>,
}

impl DropdownState {
    /// Adopts a freshly rendered list of `count` rows, clearing the
    /// highlight.
    pub fn sync(&mut self, count: usize) {
        self.count = count;
        self.highlighted = None;
    }

    /// Moves the highlight down one row, wrapping past the end.
    pub fn highlight_next(&mut self) {
        if self.count == 0 {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            None => 0,
            Some(index) => (index + 1) % self.count,
        });
    }

    /// Moves the highlight up one row, wrapping past the start.
    pub fn highlight_previous(&mut self) {
        if self.count == 0 {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            None | Some(0) => self.count - 1,
            Some(index) => index - 1,
        });
    }

    /// The row a select keypress would pick, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.highlighted
    }

    /// Closes the dropdown.
    pub fn dismiss(&mut self) {
        self.count = 0;
        self.highlighted = None;
    }
}

#[cfg(test)]
#[path = "autocomplete_test.rs"]
mod tests;
