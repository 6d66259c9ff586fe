// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (roster loaded, validation errors, etc.) without
//! blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct, severity and phases
//! - [`manager`] - `Manager` owning every live toast and its timer
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{NotificationManager, Severity};
//!
//! let mut manager = NotificationManager::new();
//! let handle = manager.show("Drill saved", Severity::Success, None);
//!
//! // Each tick advances phases; clicks send `Dismiss(handle)`.
//! manager.tick(std::time::Instant::now());
//! let toast_overlay = Toast::view_overlay(&manager).map(Message::Notification);
//! ```
//!
//! # Design Considerations
//!
//! - Single default duration (5s), zero keeps the toast until clicked
//! - No cap on simultaneous toasts; each has its own deadline
//! - Position: top-right corner

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Manager as NotificationManager, Message as NotificationMessage};
pub use notification::{Notification, NotificationHandle, NotificationId, Phase, Severity};
pub use toast::Toast;
