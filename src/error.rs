// SPDX-License-Identifier: MPL-2.0
//! Application-level errors.
//!
//! Catalog operations report [`CatalogError`]; this type wraps it together
//! with the startup failures (config files, window creation).

use crate::domain::catalog::CatalogError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(CatalogError),
    /// The windowing backend failed to start or crashed.
    Ui(String),
}

impl Error {
    /// Returns the i18n key describing this error to the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Catalog(err) => err.i18n_key(),
            Error::Config(_) => "notification-config-load-error",
            Error::Io(_) | Error::Ui(_) => "error-add-data-io",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Ui(e) => write!(f, "UI Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<iced::Error> for Error {
    fn from(err: iced::Error) -> Self {
        Error::Ui(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let err: Error = std::io::Error::other("boom").into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn catalog_error_keeps_its_i18n_key() {
        let err: Error = CatalogError::InvalidUrl("ftp://x".into()).into();
        assert_eq!(err.i18n_key(), "error-add-data-invalid-url");
        assert!(format!("{}", err).starts_with("Catalog Error:"));
    }

    #[test]
    fn toml_parse_failure_is_config_error() {
        let err: Error = toml::from_str::<toml::Table>("not = [valid")
            .expect_err("invalid toml")
            .into();
        assert!(matches!(err, Error::Config(_)));
    }
}
