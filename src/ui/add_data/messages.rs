// SPDX-License-Identifier: MPL-2.0
//! Messages and events of the Add Data panel.

use super::state::Tab;
use crate::domain::catalog::{AddedMember, CatalogError, CatalogItem, DataTypeOption, SelectedFile};

/// Messages handled by [`State::handle_message`](super::State::handle_message).
#[derive(Debug, Clone)]
pub enum Message {
    SelectLocalOption(DataTypeOption),
    SelectRemoteOption(DataTypeOption),
    ChangeTab(Tab),
    /// The file input was pressed; the parent opens a file dialog.
    BrowseFiles,
    /// Files picked in the dialog or dropped on the window.
    FilesSelected(Vec<SelectedFile>),
    RemoteUrlChanged(String),
    /// The URL form was submitted (button or Enter).
    SubmitUrl,
    /// The upload service resolved.
    FilesAdded(Result<Vec<CatalogItem>, CatalogError>),
    /// The add-catalog-member service resolved.
    UrlAdded(Result<AddedMember, CatalogError>),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// Open a file picker restricted to these extensions (without the dot).
    BrowseFiles { extensions: Vec<String> },
    /// An item was added; the parent leaves the upload view and previews it.
    FileAddFinished(CatalogItem),
    /// An add failed; the finish-handler was not invoked.
    AddFailed(CatalogError),
}
