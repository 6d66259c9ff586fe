// SPDX-License-Identifier: MPL-2.0
//! Lifecycle of a page's remote data.
//!
//! A page loads lazily on first entry. While the request is in flight the
//! page shows a spinner driven by [`LoadState::elapsed`]; a failure keeps the
//! error around so the page can offer a retry.

use crate::application::port::DataError;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Idle,
    Loading {
        started_at: Instant,
    },
    Loaded,
    Failed {
        error: DataError,
        show_details: bool,
    },
}

/// Load status plus the spinner clock.
#[derive(Debug, Clone, Default)]
pub struct LoadState {
    phase: Phase,
    elapsed: Duration,
}

impl LoadState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if nothing was requested yet.
    #[must_use]
    pub fn needs_load(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    /// Marks a request as started. Returns `false` while one is in flight.
    pub fn begin(&mut self, now: Instant) -> bool {
        if self.is_loading() {
            return false;
        }
        self.phase = Phase::Loading { started_at: now };
        self.elapsed = Duration::ZERO;
        true
    }

    pub fn succeed(&mut self) {
        self.phase = Phase::Loaded;
    }

    pub fn fail(&mut self, error: DataError) {
        self.phase = Phase::Failed {
            error,
            show_details: false,
        };
    }

    /// Advances the spinner clock.
    pub fn tick(&mut self, now: Instant) {
        if let Phase::Loading { started_at } = self.phase {
            self.elapsed = now.saturating_duration_since(started_at);
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self.phase, Phase::Loaded)
    }

    /// Time spent loading as of the last tick.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub fn error(&self) -> Option<&DataError> {
        match &self.phase {
            Phase::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    #[must_use]
    pub fn details_visible(&self) -> bool {
        matches!(self.phase, Phase::Failed { show_details: true, .. })
    }

    pub fn toggle_details(&mut self) {
        if let Phase::Failed { show_details, .. } = &mut self.phase {
            *show_details = !*show_details;
        }
    }
}
