// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains UI state logic separated from the page components,
//! following the principle of separation of concerns.

pub mod debounce;
pub mod load;

pub use debounce::Debouncer;
pub use load::LoadState;
