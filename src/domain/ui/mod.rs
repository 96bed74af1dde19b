// SPDX-License-Identifier: MPL-2.0
//! UI domain types.
//!
//! This module contains UI-related state that is independent
//! of any presentation framework.

pub mod view_state;

pub use view_state::{ExplorerTab, ViewState};
