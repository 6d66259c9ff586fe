// SPDX-License-Identifier: MPL-2.0
//! `squad_desk` is a team-management desk for coaches built with the Iced
//! GUI framework.
//!
//! It shows a team's roster, a filterable drill library and the training
//! schedule. Records come through the [`application::port::TeamDataSource`]
//! port, backed by built-in sample data or an HTTP server.

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod ui;
