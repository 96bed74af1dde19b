// SPDX-License-Identifier: MPL-2.0
//! Error value produced by the catalog services.

use std::fmt;

/// Errors raised while creating, loading or adding a catalog item.
///
/// Besides being used as an `Err`, this type is also returned as a *value*
/// by `add_user_catalog_member` (see [`AddedMember::Error`](super::AddedMember)),
/// after the catalog has already reported it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The file or URL does not match any known data type.
    UnsupportedFileType(String),

    /// The URL is not absolute or uses an unsupported scheme.
    InvalidUrl(String),

    /// The type value is not in the registry.
    UnknownType(String),

    /// The file could not be read.
    Io(String),

    /// The item was created but failed to load.
    LoadFailed {
        /// Name of the item that failed.
        name: String,
        /// Reason reported by the loader.
        reason: String,
    },
}

impl CatalogError {
    /// Returns the i18n message key used when notifying the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CatalogError::UnsupportedFileType(_) => "error-add-data-unsupported-type",
            CatalogError::InvalidUrl(_) => "error-add-data-invalid-url",
            CatalogError::UnknownType(_) => "error-add-data-unknown-type",
            CatalogError::Io(_) => "error-add-data-io",
            CatalogError::LoadFailed { .. } => "error-add-data-load-failed",
        }
    }

    /// Fluent arguments referenced by the message of [`Self::i18n_key`].
    pub fn i18n_args(&self) -> Vec<(&'static str, String)> {
        match self {
            CatalogError::UnsupportedFileType(name) => vec![("name", name.clone())],
            CatalogError::InvalidUrl(url) => vec![("url", url.clone())],
            CatalogError::UnknownType(value) => vec![("type", value.clone())],
            CatalogError::Io(reason) => vec![("reason", reason.clone())],
            CatalogError::LoadFailed { name, reason } => {
                vec![("name", name.clone()), ("reason", reason.clone())]
            }
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::UnsupportedFileType(name) => {
                write!(f, "Could not determine the data type of {name}")
            }
            CatalogError::InvalidUrl(url) => write!(f, "Invalid URL: {url}"),
            CatalogError::UnknownType(value) => write!(f, "Unknown data type: {value}"),
            CatalogError::Io(msg) => write!(f, "I/O error: {msg}"),
            CatalogError::LoadFailed { name, reason } => {
                write!(f, "Failed to load {name}: {reason}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}
