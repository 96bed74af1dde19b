// SPDX-License-Identifier: MPL-2.0
//! In-process adapter for the catalog ports.
//!
//! [`UserCatalog`] holds the "User-Added Data" group. It resolves data types
//! from the registry and validates URLs, but does not parse files or talk to
//! remote servers.

use crate::application::port::{BoxFuture, CatalogMembers, FileUploader, PendingItem};
use crate::domain::catalog::{
    data_types, AddedMember, CatalogError, CatalogItem, DataTypeOption, DataTypes, SelectedFile,
    AUTO_TYPE, OTHER_TYPE,
};
use futures_util::future::{self, FutureExt};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// URL schemes [`UserCatalog::load`] accepts.
const SUPPORTED_SCHEMES: [&str; 3] = ["http://", "https://", "file://"];

/// The user's data group, shared between the uploader and member ports.
///
/// Cloning yields another handle to the same group.
#[derive(Debug, Clone, Default)]
pub struct UserCatalog {
    group: Arc<Mutex<Vec<CatalogItem>>>,
}

impl UserCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the items added so far, oldest first.
    #[must_use]
    pub fn items(&self) -> Vec<CatalogItem> {
        lock(&self.group).clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.group).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        lock(&self.group).is_empty()
    }
}

fn lock(group: &Mutex<Vec<CatalogItem>>) -> MutexGuard<'_, Vec<CatalogItem>> {
    // The group is a plain list; a panic mid-push cannot leave it inconsistent.
    group.lock().unwrap_or_else(PoisonError::into_inner)
}

fn file_url(path: &Path) -> String {
    format!("file://{}", path.display())
}

/// Picks the type of a local file: the selected type, or the registry entry
/// matching its extension when `auto` is selected.
fn resolve_file_type(
    types: &DataTypes,
    file: &SelectedFile,
    selected: DataTypeOption,
) -> Result<&'static str, CatalogError> {
    if !selected.is_auto() {
        return Ok(selected.value);
    }
    file.extension()
        .and_then(|ext| types.find_local_by_extension(&ext))
        .map(|option| option.value)
        .ok_or_else(|| CatalogError::UnsupportedFileType(file.name.clone()))
}

/// Guesses the type of a URL.
///
/// A registered file extension on the last path segment wins. Otherwise the
/// `service=` query parameter, then whole path segments (`/wms`, `/wfs`,
/// `/wmts`, `/arcgis/rest/services`) identify a web service.
fn infer_url_type(types: &DataTypes, url: &str) -> Option<&'static str> {
    let lower = url.to_ascii_lowercase();
    let (before_fragment, _) = lower.split_once('#').unwrap_or((lower.as_str(), ""));
    let (address, query) = before_fragment
        .split_once('?')
        .unwrap_or((before_fragment, ""));
    let path = match address.split_once("://") {
        Some((_, rest)) => rest.split_once('/').map_or("", |(_, path)| path),
        None => address,
    };
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let by_extension = segments
        .last()
        .and_then(|segment| segment.rsplit_once('.'))
        .and_then(|(_, extension)| types.find_local_by_extension(extension));
    if let Some(option) = by_extension {
        return Some(option.value);
    }

    let service = query
        .split('&')
        .find_map(|param| param.strip_prefix("service="));
    match service {
        Some("wmts") => return Some("wmts-getCapabilities"),
        Some("wfs") => return Some("wfs-getCapabilities"),
        Some("wms") => return Some("wms-getCapabilities"),
        _ => {}
    }

    let has_segment = |name: &str| segments.contains(&name);
    if has_segment("wmts") {
        return Some("wmts-getCapabilities");
    }
    if has_segment("wfs") {
        return Some("wfs-getCapabilities");
    }
    if has_segment("wms") {
        return Some("wms-getCapabilities");
    }
    if segments
        .windows(3)
        .any(|window| window == ["arcgis", "rest", "services"])
    {
        return Some(if has_segment("featureserver") {
            "esri-featureServer"
        } else if has_segment("mapserver") {
            "esri-mapServer"
        } else {
            "esri-group"
        });
    }
    None
}

fn has_supported_scheme(url: &str) -> bool {
    SUPPORTED_SCHEMES.iter().any(|scheme| {
        url.len() > scheme.len()
            && url
                .get(..scheme.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

fn is_type_registered(types: &DataTypes, value: &str) -> bool {
    types.find_remote(value).is_some() || types.find_local(value).is_some()
}

impl FileUploader for UserCatalog {
    fn add_user_files(
        &self,
        files: Vec<SelectedFile>,
        data_type: DataTypeOption,
    ) -> BoxFuture<'static, Result<Vec<CatalogItem>, CatalogError>> {
        let group = Arc::clone(&self.group);
        let types = data_types();

        async move {
            let mut added = Vec::with_capacity(files.len());
            let mut first_error = None;

            for file in files {
                let result = match tokio::fs::metadata(&file.path).await {
                    Ok(_) => resolve_file_type(&types, &file, data_type),
                    Err(err) => Err(CatalogError::Io(format!("{}: {err}", file.name))),
                };
                match result {
                    Ok(type_value) => {
                        let url = file_url(&file.path);
                        added.push(CatalogItem::new(type_value).with_source(file.name, url));
                    }
                    Err(err) => {
                        warn!(file = %file.name, %err, "skipping file");
                        first_error.get_or_insert(err);
                    }
                }
            }

            if added.is_empty() {
                if let Some(err) = first_error {
                    return Err(err);
                }
            }

            lock(&group).extend(added.iter().cloned());
            info!(count = added.len(), "added local files to user data");
            Ok(added)
        }
        .boxed()
    }
}

impl CatalogMembers for UserCatalog {
    fn create_catalog_item_from_file_or_url(
        &self,
        url: &str,
        type_hint: &str,
        confirm_conversion: bool,
    ) -> PendingItem {
        let types = data_types();
        let url = url.trim();

        let resolved = if type_hint == AUTO_TYPE {
            match infer_url_type(&types, url) {
                Some(value) => Ok(value.to_string()),
                None if confirm_conversion => Ok(OTHER_TYPE.to_string()),
                None => Err(CatalogError::UnsupportedFileType(url.to_string())),
            }
        } else if is_type_registered(&types, type_hint) {
            Ok(type_hint.to_string())
        } else {
            Err(CatalogError::UnknownType(type_hint.to_string()))
        };

        match resolved {
            Ok(type_value) => {
                debug!(url, type_value = %type_value, "creating catalog item from url");
                self.load(CatalogItem::new(type_value).with_source(url, url))
            }
            Err(err) => future::ready(Err(err)).boxed(),
        }
    }

    fn create_catalog_member_from_type(
        &self,
        type_value: &str,
    ) -> Result<CatalogItem, CatalogError> {
        if is_type_registered(&data_types(), type_value) {
            Ok(CatalogItem::new(type_value))
        } else {
            Err(CatalogError::UnknownType(type_value.to_string()))
        }
    }

    fn load(&self, item: CatalogItem) -> PendingItem {
        let result = match item.url.as_deref() {
            Some(url) if has_supported_scheme(url) => Ok(()),
            Some(url) => Err(CatalogError::InvalidUrl(url.to_string())),
            None => Err(CatalogError::LoadFailed {
                name: item.name.clone(),
                reason: "no URL set".to_string(),
            }),
        };
        future::ready(result.map(|()| item)).boxed()
    }

    fn add_user_catalog_member(
        &self,
        pending: PendingItem,
    ) -> BoxFuture<'static, Result<AddedMember, CatalogError>> {
        let group = Arc::clone(&self.group);

        async move {
            match pending.await {
                Ok(item) => {
                    info!(name = %item.name, type_value = %item.type_value, "added catalog member");
                    lock(&group).push(item.clone());
                    Ok(AddedMember::Item(item))
                }
                Err(err) => {
                    warn!(%err, "failed to add catalog member");
                    Ok(AddedMember::Error(err))
                }
            }
        }
        .boxed()
    }
}
