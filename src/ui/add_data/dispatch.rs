// SPDX-License-Identifier: MPL-2.0
//! Routing of panel submissions to the catalog services.
//!
//! Both functions call the services synchronously and return the resulting
//! future unpolled; the panel wraps it in a `Task`.

use crate::application::port::{BoxFuture, FileUploader, PendingItem, Services};
use crate::domain::catalog::{AddedMember, CatalogError, CatalogItem, DataTypeOption, SelectedFile};
use futures_util::future::{self, FutureExt};
use tracing::debug;

/// Analytics event recorded for every URL submission.
pub const ADD_DATA_URL_EVENT: &str = "addDataUrl";

/// Passed to the generic loader so URLs of unknown type go through the
/// conversion service instead of failing.
pub const CONFIRM_CONVERSION: bool = true;

/// Forwards the files and the selected local type to the upload service.
pub fn upload_files(
    uploader: &dyn FileUploader,
    files: Vec<SelectedFile>,
    data_type: DataTypeOption,
) -> BoxFuture<'static, Result<Vec<CatalogItem>, CatalogError>> {
    debug!(count = files.len(), data_type = data_type.value, "uploading local files");
    uploader.add_user_files(files, data_type)
}

/// Builds the pending item for `url` and hands it to `add_user_catalog_member`.
///
/// With `auto`, the generic file/URL loader creates and loads the item.
/// Otherwise a member of the selected type is created, named after the URL,
/// pointed at it and loaded.
pub fn add_from_url(
    services: &Services,
    url: &str,
    remote_type: DataTypeOption,
) -> BoxFuture<'static, Result<AddedMember, CatalogError>> {
    services.analytics.log_event(ADD_DATA_URL_EVENT, url);

    let pending: PendingItem = if remote_type.is_auto() {
        services.members.create_catalog_item_from_file_or_url(
            url,
            remote_type.value,
            CONFIRM_CONVERSION,
        )
    } else {
        match services
            .members
            .create_catalog_member_from_type(remote_type.value)
        {
            Ok(mut item) => {
                item.name = url.to_string();
                item.url = Some(url.to_string());
                services.members.load(item)
            }
            Err(err) => future::ready(Err(err)).boxed(),
        }
    };

    debug!(url, data_type = remote_type.value, "adding catalog member from url");
    services.members.add_user_catalog_member(pending)
}
