// SPDX-License-Identifier: MPL-2.0
//! Catalog member port definition.
//!
//! Three ways of producing a member exist, mirroring the two paths of the
//! Add Data panel:
//!
//! - [`CatalogMembers::create_catalog_item_from_file_or_url`] infers the type
//!   and loads in one step;
//! - [`CatalogMembers::create_catalog_member_from_type`] builds an empty
//!   member which the caller names and then passes to [`CatalogMembers::load`].
//!
//! Either result is then handed to
//! [`CatalogMembers::add_user_catalog_member`], which inserts it into the
//! user's data group.

use super::BoxFuture;
use crate::domain::catalog::{AddedMember, CatalogError, CatalogItem};

/// A catalog item that is still being created or loaded.
pub type PendingItem = BoxFuture<'static, Result<CatalogItem, CatalogError>>;

/// Port for creating and registering catalog members.
pub trait CatalogMembers: Send + Sync {
    /// Creates and loads an item from a URL, detecting the data type from
    /// the URL when `type_hint` is `auto`.
    ///
    /// With `confirm_conversion`, URLs of unknown type are routed to the
    /// conversion service instead of failing.
    fn create_catalog_item_from_file_or_url(
        &self,
        url: &str,
        type_hint: &str,
        confirm_conversion: bool,
    ) -> PendingItem;

    /// Creates an empty, unloaded member of the given type.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownType`] if the type is not registered.
    fn create_catalog_member_from_type(&self, type_value: &str)
        -> Result<CatalogItem, CatalogError>;

    /// Loads a member whose name and URL have been filled in.
    ///
    /// Resolves with the loaded member.
    fn load(&self, item: CatalogItem) -> PendingItem;

    /// Adds the eventual item to the user's data group.
    ///
    /// A failure of `pending` is reported by the catalog and then resolved as
    /// [`AddedMember::Error`]; the returned future itself only fails when the
    /// catalog cannot accept the item at all.
    fn add_user_catalog_member(
        &self,
        pending: PendingItem,
    ) -> BoxFuture<'static, Result<AddedMember, CatalogError>>;
}
