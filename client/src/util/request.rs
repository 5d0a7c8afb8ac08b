//! Cancellable handles for page-scoped async work.
//!
//! DESIGN
//! ======
//! A [`TaskScope`] is tied to the reactive owner that created it and flips to
//! cancelled when that owner is cleaned up, so responses for an unmounted page
//! are dropped. A [`Generation`] counter lets a newer request supersede an
//! older one still in flight (debounced search, filter changes).

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Liveness flag shared between a page and its spawned tasks.
#[derive(Clone, Debug)]
pub struct TaskScope {
    alive: Arc<AtomicBool>,
}

impl Default for TaskScope {
    fn default() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }
}

impl TaskScope {
    /// A scope cancelled when the current reactive owner is disposed.
    pub fn for_current_owner() -> Self {
        let scope = Self::default();
        let on_drop = scope.clone();
        leptos::prelude::on_cleanup(move || on_drop.cancel());
        scope
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}

/// Monotonic request counter. Only the latest ticket is current.
#[derive(Clone, Debug, Default)]
pub struct Generation {
    latest: Arc<AtomicU64>,
}

impl Generation {
    /// Issue a new ticket, superseding every earlier one.
    pub fn next(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Supersede every outstanding ticket without issuing a new one.
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::Relaxed);
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::Relaxed) == ticket
    }
}
