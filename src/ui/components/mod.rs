// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across the pages.
//!
//! # Components
//!
//! - [`filter_bar`] - Pick-lists, search box and the "all" choice used by
//!   every list page
//! - [`page`] - Page header, loading and failure states, cards and badges

pub mod filter_bar;
pub mod page;
