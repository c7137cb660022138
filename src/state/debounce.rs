//! Button debounce gate.
//!
//! One gate guards every button: an accepted press on either button opens a
//! quiet window during which presses on *both* buttons are discarded.

use crate::config::DEBOUNCE_WINDOW_US;

/// Time-gap filter with a single shared clock.
pub struct DebounceGate {
    window_us: u64,
    last_accept_us: Option<u64>,
}

impl DebounceGate {
    /// Create a gate with the standard 200 ms window.
    pub const fn new() -> Self { Self::with_window(DEBOUNCE_WINDOW_US) }

    /// Create a gate with a custom window. No event has been accepted yet, so
    /// the first one always passes.
    pub const fn with_window(window_us: u64) -> Self {
        Self {
            window_us,
            last_accept_us: None,
        }
    }

    /// Returns true if an event at `now_us` passes the gate, and records it as
    /// the new reference point.
    ///
    /// Rejected events leave the clock untouched, so a burst of bounces does
    /// not keep extending the window.
    pub fn try_accept(
        &mut self,
        now_us: u64,
    ) -> bool {
        if let Some(last) = self.last_accept_us
            && now_us.saturating_sub(last) < self.window_us
        {
            return false;
        }

        self.last_accept_us = Some(now_us);
        true
    }

    /// Timestamp of the last accepted event.
    pub const fn last_accept_us(&self) -> Option<u64> { self.last_accept_us }
}

impl Default for DebounceGate {
    fn default() -> Self { Self::new() }
}
