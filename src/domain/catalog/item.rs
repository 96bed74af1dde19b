// SPDX-License-Identifier: MPL-2.0
//! Catalog items and the values exchanged when adding them.

use super::error::CatalogError;
use std::path::PathBuf;
use std::time::SystemTime;

/// Unique identifier for a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CatalogItemId(u64);

impl CatalogItemId {
    /// Creates a new unique item ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for CatalogItemId {
    fn default() -> Self {
        Self::new()
    }
}

/// A data source entry that can live in the catalog.
///
/// Members created from a type start with an empty name and no URL; the
/// caller fills both in before asking the catalog to load the member.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub id: CatalogItemId,
    /// Data type value from the registry (e.g. `geojson`, `wms-getCapabilities`).
    pub type_value: String,
    pub name: String,
    pub url: Option<String>,
    /// Whether the user added this item (as opposed to the curated catalog).
    pub is_user_supplied: bool,
    pub added_at: SystemTime,
}

impl CatalogItem {
    /// Creates an empty, user-supplied member of the given type.
    pub fn new(type_value: impl Into<String>) -> Self {
        Self {
            id: CatalogItemId::new(),
            type_value: type_value.into(),
            name: String::new(),
            url: None,
            is_user_supplied: true,
            added_at: SystemTime::now(),
        }
    }

    /// Builder-style helper setting both name and URL.
    #[must_use]
    pub fn with_source(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.name = name.into();
        self.url = Some(url.into());
        self
    }
}

/// A local file chosen through the file dialog or dropped on the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    /// File name as displayed to the user.
    pub name: String,
}

impl SelectedFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { path, name }
    }

    /// Lower-cased extension without the dot, if any.
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        self.path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
    }
}

/// Outcome of adding a member to the user's data.
///
/// A failed add is *resolved* with [`AddedMember::Error`] once the catalog
/// has reported it, so callers must check the variant rather than rely on
/// the future failing.
#[derive(Debug, Clone, PartialEq)]
pub enum AddedMember {
    Item(CatalogItem),
    Error(CatalogError),
    Nothing,
}

impl AddedMember {
    /// Returns the added item, if any.
    #[must_use]
    pub fn into_item(self) -> Option<CatalogItem> {
        match self {
            AddedMember::Item(item) => Some(item),
            AddedMember::Error(_) | AddedMember::Nothing => None,
        }
    }
}
