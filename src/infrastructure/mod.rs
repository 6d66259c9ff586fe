// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`mock`]: Fixture data after a fixed delay (implements [`TeamDataSource`])
//! - [`http`]: REST client over `reqwest` (implements [`TeamDataSource`])
//! - [`fixtures`]: Literal records used by the mock adapter
//!
//! [`TeamDataSource`]: crate::application::port::TeamDataSource

pub mod fixtures;
pub mod http;
pub mod mock;

pub use http::HttpDataSource;
pub use mock::{FailureHook, MockDataSource, Operation};
