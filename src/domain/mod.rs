// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core catalog types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) so it can be
//! exercised without a window or a runtime.
//!
//! # Modules
//!
//! - [`catalog`]: Catalog types ([`CatalogItem`](catalog::CatalogItem),
//!   [`DataTypeOption`](catalog::DataTypeOption), [`CatalogError`](catalog::CatalogError))
//! - [`ui`]: UI state shared across panels ([`ViewState`](ui::ViewState))

pub mod catalog;
pub mod ui;
