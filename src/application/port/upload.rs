// SPDX-License-Identifier: MPL-2.0
//! Local file upload port.

use super::BoxFuture;
use crate::domain::catalog::{CatalogError, CatalogItem, DataTypeOption, SelectedFile};

/// Port for adding local files to the user's data.
///
/// Implementations hold their own handles to the catalog and view state.
pub trait FileUploader: Send + Sync {
    /// Creates one catalog item per file, interpreting the files as
    /// `data_type` (or detecting the type when it is `auto`).
    ///
    /// Resolves with the items that were added, in file order. The list may
    /// be empty when nothing could be added.
    ///
    /// # Errors
    ///
    /// Resolves with a [`CatalogError`] when the files cannot be read or
    /// their type cannot be determined.
    fn add_user_files(
        &self,
        files: Vec<SelectedFile>,
        data_type: DataTypeOption,
    ) -> BoxFuture<'static, Result<Vec<CatalogItem>, CatalogError>>;
}
