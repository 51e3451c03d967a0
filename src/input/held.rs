//! Held-key tracking for terminal environments.
//!
//! Terminals generally do not emit key release events, so a key counts as
//! held from its last press until a short timeout expires. Repeat events
//! refresh the timestamp, which keeps a genuinely held key alive because
//! terminals auto-repeat faster than the timeout.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;

// A single tap must not read as a sustained hold.
const KEY_RELEASE_TIMEOUT_MS: u64 = 150;

const MAX_TRACKED: usize = 8;

#[derive(Debug, Clone)]
pub struct HeldKeys {
    held: ArrayVec<(KeyCode, Instant), MAX_TRACKED>,
    timeout: Duration,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_millis(KEY_RELEASE_TIMEOUT_MS))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            held: ArrayVec::new(),
            timeout,
        }
    }

    /// Record a press or auto-repeat, refreshing the release deadline.
    pub fn press(&mut self, code: KeyCode, now: Instant) {
        if let Some(entry) = self.held.iter_mut().find(|(c, _)| *c == code) {
            entry.1 = now;
            return;
        }
        if self.held.is_full() {
            // Drop the stalest entry rather than losing the new press.
            if let Some(oldest) = self
                .held
                .iter()
                .enumerate()
                .min_by_key(|(_, (_, t))| *t)
                .map(|(i, _)| i)
            {
                self.held.swap_remove(oldest);
            }
        }
        self.held.push((code, now));
    }

    /// Explicit release, for terminals that do report one.
    pub fn release(&mut self, code: KeyCode) {
        self.held.retain(|(c, _)| *c != code);
    }

    /// Drop keys whose release deadline has passed. Call once per frame.
    pub fn expire(&mut self, now: Instant) {
        let timeout = self.timeout;
        self.held
            .retain(|(_, t)| now.saturating_duration_since(*t) < timeout);
    }

    pub fn is_held(&self, code: KeyCode) -> bool {
        self.held.iter().any(|(c, _)| *c == code)
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}
