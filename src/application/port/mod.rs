// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the UI remains independent of
//! how the catalog is actually stored or loaded.
//!
//! # Available Ports
//!
//! - [`upload`]: Adding local files to the user's data
//! - [`catalog`]: Creating, loading and adding catalog members
//! - [`analytics`]: Usage event logging
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles)
//! - Traits are `Send + Sync` so they can be shared with spawned tasks
//! - Long-running operations return a [`BoxFuture`] that the caller wraps in
//!   an Iced `Task`; the ports never block

pub mod analytics;
pub mod catalog;
pub mod upload;

pub use analytics::{Analytics, NoopAnalytics};
pub use catalog::{CatalogMembers, PendingItem};
pub use upload::FileUploader;

pub use futures_util::future::BoxFuture;

use std::fmt;
use std::sync::Arc;

/// Bundle of service handles passed down to panels.
///
/// Cloning is cheap: every port is reference counted.
#[derive(Clone)]
pub struct Services {
    pub uploader: Arc<dyn FileUploader>,
    pub members: Arc<dyn CatalogMembers>,
    pub analytics: Arc<dyn Analytics>,
}

impl fmt::Debug for Services {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}
