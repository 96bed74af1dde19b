// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`catalog`]: In-process user data group (implements [`FileUploader`] and
//!   [`CatalogMembers`])
//! - [`analytics`]: Usage events written to the log (implements [`Analytics`])
//!
//! [`FileUploader`]: crate::application::port::FileUploader
//! [`CatalogMembers`]: crate::application::port::CatalogMembers
//! [`Analytics`]: crate::application::port::Analytics

pub mod analytics;
pub mod catalog;

pub use analytics::TracingAnalytics;
pub use catalog::UserCatalog;

use crate::application::port::{NoopAnalytics, Services};
use std::sync::Arc;

/// Wires the default adapters into a [`Services`] bundle.
///
/// Returns the catalog handle as well so the caller can list what was added.
pub fn default_services(analytics_enabled: bool) -> (Services, UserCatalog) {
    let catalog = UserCatalog::new();
    let analytics: Arc<dyn crate::application::port::Analytics> = if analytics_enabled {
        Arc::new(TracingAnalytics)
    } else {
        Arc::new(NoopAnalytics)
    };
    let services = Services {
        uploader: Arc::new(catalog.clone()),
        members: Arc::new(catalog.clone()),
        analytics,
    };
    (services, catalog)
}
