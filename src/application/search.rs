// src/application/search.rs
use std::time::Duration;

use tokio::sync::watch;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Debounces a free-text search box.
///
/// Every keystroke goes through [`set`](Self::set); [`settled`](Self::settled)
/// resolves once the input has been quiet for the debounce window. An empty
/// query settles immediately.
pub struct SearchDebouncer {
    window: Duration,
    input: watch::Sender<String>,
}

impl SearchDebouncer {
    pub fn new(window: Duration) -> Self {
        let (input, _) = watch::channel(String::new());
        Self { window, input }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn set(&self, query: impl Into<String>) {
        self.input.send_replace(query.into());
    }

    pub fn clear(&self) {
        self.set(String::new());
    }

    /// Latest raw input, not debounced.
    pub fn current(&self) -> String {
        self.input.borrow().clone()
    }

    pub async fn settled(&self) -> String {
        let mut rx = self.input.subscribe();
        loop {
            if rx.borrow_and_update().is_empty() {
                return String::new();
            }
            tokio::select! {
                changed = rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
                _ = tokio::time::sleep(self.window) => break,
            }
        }
        rx.borrow().clone()
    }
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
