// SPDX-License-Identifier: MPL-2.0
//! Modal dialogs with scroll lock and focus trapping.
//!
//! # Components
//!
//! - [`session`] - `ModalManager` stack and per-dialog `ModalSession`
//! - [`focus`] - `FocusId` and the wrap-around `FocusRing`
//! - [`view`] - Backdrop and dialog card rendering

pub mod focus;
pub mod session;
pub mod view;

pub use focus::{FocusId, FocusRing};
pub use session::{ModalId, ModalManager, ModalSession};
