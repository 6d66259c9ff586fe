// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring pages stay independent of
//! whether data comes from fixtures or a remote API.
//!
//! # Available Ports
//!
//! - [`data`]: Team data loading (rosters, drills, sessions)

pub mod data;

pub use data::{DataError, DataResult, TeamDataSource};
