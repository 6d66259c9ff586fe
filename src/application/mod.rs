// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports between pages and data adapters.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses ports through `Arc<dyn TeamDataSource>`
//!
//! [`TeamDataSource`]: port::TeamDataSource

pub mod port;
