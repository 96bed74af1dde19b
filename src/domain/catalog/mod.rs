// SPDX-License-Identifier: MPL-2.0
//! Catalog domain types.
//!
//! Items the user adds, the registry of data types they can be added as,
//! and the error value the catalog services hand back.

pub mod data_type;
pub mod error;
pub mod item;

pub use data_type::{data_types, DataTypeOption, DataTypes, AUTO_TYPE, OTHER_TYPE};
pub use error::CatalogError;
pub use item::{AddedMember, CatalogItem, CatalogItemId, SelectedFile};
