// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Notifications**: Toast display time and exit animation
//! - **Search**: Debounce window for search inputs
//! - **Modal**: Exit delay before a closed dialog is dropped
//! - **Data**: Simulated latency of the mock data source

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default time a toast stays on screen (in milliseconds).
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 5000;

/// Minimum non-zero toast duration. Zero is accepted and means "persist".
pub const MIN_NOTIFICATION_DURATION_MS: u64 = 500;

/// Maximum toast duration (one minute).
pub const MAX_NOTIFICATION_DURATION_MS: u64 = 60_000;

/// Default length of the toast exit animation (in milliseconds).
pub const DEFAULT_EXIT_ANIMATION_MS: u64 = 400;

/// Minimum exit animation length.
pub const MIN_EXIT_ANIMATION_MS: u64 = 0;

/// Maximum exit animation length.
pub const MAX_EXIT_ANIMATION_MS: u64 = 2000;

// ==========================================================================
// Search Defaults
// ==========================================================================

/// Default quiet period after the last keystroke before a search runs.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

/// Minimum debounce window.
pub const MIN_SEARCH_DEBOUNCE_MS: u64 = 0;

/// Maximum debounce window.
pub const MAX_SEARCH_DEBOUNCE_MS: u64 = 2000;

// ==========================================================================
// Modal Defaults
// ==========================================================================

/// Default delay between closing a modal and removing it (in milliseconds).
pub const DEFAULT_MODAL_EXIT_DELAY_MS: u64 = 200;

/// Minimum modal exit delay.
pub const MIN_MODAL_EXIT_DELAY_MS: u64 = 0;

/// Maximum modal exit delay.
pub const MAX_MODAL_EXIT_DELAY_MS: u64 = 1000;

// ==========================================================================
// Data Source Defaults
// ==========================================================================

/// Default simulated latency of the mock data source (in milliseconds).
pub const DEFAULT_MOCK_DELAY_MS: u64 = 800;

/// Maximum simulated latency.
pub const MAX_MOCK_DELAY_MS: u64 = 10_000;

// ==========================================================================
// Validation
// ==========================================================================

const _: () = {
    assert!(MIN_NOTIFICATION_DURATION_MS > 0);
    assert!(DEFAULT_NOTIFICATION_DURATION_MS >= MIN_NOTIFICATION_DURATION_MS);
    assert!(DEFAULT_NOTIFICATION_DURATION_MS <= MAX_NOTIFICATION_DURATION_MS);

    assert!(DEFAULT_EXIT_ANIMATION_MS >= MIN_EXIT_ANIMATION_MS);
    assert!(DEFAULT_EXIT_ANIMATION_MS <= MAX_EXIT_ANIMATION_MS);
    // A toast must be readable before it starts leaving.
    assert!(DEFAULT_EXIT_ANIMATION_MS < DEFAULT_NOTIFICATION_DURATION_MS);

    assert!(DEFAULT_SEARCH_DEBOUNCE_MS >= MIN_SEARCH_DEBOUNCE_MS);
    assert!(DEFAULT_SEARCH_DEBOUNCE_MS <= MAX_SEARCH_DEBOUNCE_MS);

    assert!(DEFAULT_MODAL_EXIT_DELAY_MS >= MIN_MODAL_EXIT_DELAY_MS);
    assert!(DEFAULT_MODAL_EXIT_DELAY_MS <= MAX_MODAL_EXIT_DELAY_MS);

    assert!(DEFAULT_MOCK_DELAY_MS <= MAX_MOCK_DELAY_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_debounce_is_shorter_than_a_toast() {
        assert!(DEFAULT_SEARCH_DEBOUNCE_MS < DEFAULT_NOTIFICATION_DURATION_MS);
    }

    #[test]
    fn modal_exit_fits_inside_toast_exit() {
        assert!(DEFAULT_MODAL_EXIT_DELAY_MS <= DEFAULT_EXIT_ANIMATION_MS);
    }
}
