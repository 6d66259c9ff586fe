// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Pages
//!
//! - [`players`] - Team roster with position/status filters and player details
//! - [`drills`] - Drill library with category chips, favorites and the new-drill form
//! - [`schedule`] - Training sessions as a list or a navigable week
//! - [`attendance`] - Per-session attendance marks, live counts and history
//! - [`medical`] - Medical roster, checkups, status updates and history
//!
//! # Shared Infrastructure
//!
//! - [`sidebar`] - Navigation, collapse toggle and theme toggle
//! - [`notifications`] - Toast notification system for user feedback
//! - [`modal`] - Modal stack with focus trap and scroll lock
//! - [`forms`] - Required-field validation
//! - [`state`] - Reusable page state (load lifecycle, search debounce)
//! - [`components`] - Reusable UI components (filter bar, error display, cards)
//! - [`widgets`] - Custom Iced widgets (spinner, scroll lock)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theme`] - Theme colors and styling helpers
//! - [`theming`] - Light/Dark/System theme mode management

pub mod attendance;
pub mod components;
pub mod design_tokens;
pub mod drills;
pub mod forms;
pub mod medical;
pub mod modal;
pub mod notifications;
pub mod players;
pub mod schedule;
pub mod sidebar;
pub mod state;
pub mod styles;
pub mod theme;
pub mod theming;
pub mod widgets;
