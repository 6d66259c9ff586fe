// SPDX-License-Identifier: MPL-2.0
//! Trailing-edge debouncing for text inputs.
//!
//! Each keystroke calls [`Debouncer::schedule`], which bumps a generation
//! counter and returns a task that sleeps for the delay and then emits the
//! token it was issued. When the token arrives, [`Debouncer::fire`] accepts
//! it only if no newer keystroke happened in between, so only the last
//! keystroke of a burst triggers work.
//!
//! # Example
//!
//! ```
//! use squad_desk::ui::state::Debouncer;
//! use std::time::Duration;
//!
//! let mut debouncer = Debouncer::new(Duration::from_millis(300));
//! let first = debouncer.trigger();
//! let second = debouncer.trigger();
//! assert!(!debouncer.fire(first));
//! assert!(debouncer.fire(second));
//! assert!(!debouncer.fire(second));
//! ```

use iced::Task;
use std::time::Duration;

/// Generation-token debouncer.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    generation: u64,
    pending: Option<u64>,
}

impl Debouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    /// Restarts the window and returns the token of the new pending call.
    pub fn trigger(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(self.generation);
        self.generation
    }

    /// Restarts the window and returns a task that emits `on_fire(token)`
    /// once the delay elapses.
    pub fn schedule<M, F>(&mut self, on_fire: F) -> Task<M>
    where
        M: Send + 'static,
        F: FnOnce(u64) -> M + Send + 'static,
    {
        let token = self.trigger();
        let delay = self.delay;
        // The timer is created on first poll, inside the executor.
        Task::perform(async move { tokio::time::sleep(delay).await }, move |()| {
            on_fire(token)
        })
    }

    /// Accepts `token` if it belongs to the latest pending call.
    ///
    /// A token is accepted at most once.
    pub fn fire(&mut self, token: u64) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Drops the pending call, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
