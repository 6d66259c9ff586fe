// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure types and business rules without I/O.
//!
//! # Modules
//!
//! - [`filter`]: List filtering ([`ListFilterEngine`](filter::ListFilterEngine),
//!   [`FilterCriterion`](filter::FilterCriterion), [`DurationBucket`](filter::DurationBucket))
//! - [`team`]: Team records ([`Player`](team::Player), [`Drill`](team::Drill),
//!   [`TrainingSession`](team::TrainingSession), attendance sheets, medical
//!   records and calendar weeks)

pub mod filter;
pub mod team;
