// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! panel owns its form state, handles its own messages and reports what the
//! application must do through an `Event`.
//!
//! # Panels
//!
//! - [`add_data`] - Upload local files or add a web data source
//! - [`my_data`] - List of the items the user added
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod add_data;
pub mod design_tokens;
pub mod my_data;
pub mod notifications;
pub mod theming;
