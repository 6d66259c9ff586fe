// SPDX-License-Identifier: MPL-2.0
//! List filtering for rosters, drills and schedules.
//!
//! # Available Types
//!
//! - [`ItemMetadata`] / [`FilterableItem`]: what an item exposes to filters
//! - [`FilterCriterion`]: one control's constraint (empty value = any)
//! - [`DurationBucket`]: short / medium / long drill durations
//! - [`ListFilterEngine`]: AND of criteria plus case-insensitive search

pub mod criterion;
pub mod duration;
pub mod engine;
pub mod item;

pub use criterion::{FilterCriterion, Predicate};
pub use duration::DurationBucket;
pub use engine::{ItemVisibility, ListFilterEngine};
pub use item::{FilterableItem, ItemMetadata, MetaValue};
