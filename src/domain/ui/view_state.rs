// SPDX-License-Identifier: MPL-2.0
//! Shared UI-only state controlling which explorer tab and view are shown.
//!
//! The application owns a single [`ViewState`]. Panels never hold it; they
//! emit events and the application applies them here.

use crate::domain::catalog::CatalogItem;

/// Tabs of the explorer window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExplorerTab {
    #[default]
    DataCatalog,
    MyData,
}

/// UI state shared between the explorer panels.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Whether the My Data tab shows the Add Data panel (vs. the item list).
    pub my_data_is_upload_view: bool,
    pub explorer_panel_is_visible: bool,
    pub active_tab: ExplorerTab,
    /// Item currently previewed in the explorer.
    pub previewed_item: Option<CatalogItem>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            my_data_is_upload_view: true,
            explorer_panel_is_visible: true,
            active_tab: ExplorerTab::MyData,
            previewed_item: None,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the explorer on the tab holding `item` and previews it.
    pub fn view_catalog_member(&mut self, item: CatalogItem) {
        self.explorer_panel_is_visible = true;
        self.active_tab = if item.is_user_supplied {
            ExplorerTab::MyData
        } else {
            ExplorerTab::DataCatalog
        };
        self.previewed_item = Some(item);
    }

    /// Leaves the upload view and focuses the newly added item.
    pub fn on_file_add_finished(&mut self, item: CatalogItem) {
        self.my_data_is_upload_view = false;
        self.view_catalog_member(item);
    }

    /// Switches the My Data tab back to the Add Data panel.
    pub fn open_upload_view(&mut self) {
        self.active_tab = ExplorerTab::MyData;
        self.my_data_is_upload_view = true;
    }

    #[must_use]
    pub fn is_previewed(&self, item: &CatalogItem) -> bool {
        self.previewed_item.as_ref().is_some_and(|p| p.id == item.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_add_finished_leaves_upload_view_and_previews_item() {
        let mut state = ViewState::new();
        let item =
            CatalogItem::new("geojson").with_source("roads.geojson", "file:///roads.geojson");

        state.on_file_add_finished(item.clone());

        assert!(!state.my_data_is_upload_view);
        assert_eq!(state.previewed_item, Some(item.clone()));
        assert_eq!(state.active_tab, ExplorerTab::MyData);
        assert!(state.is_previewed(&item));
    }

    #[test]
    fn view_catalog_member_routes_curated_items_to_catalog_tab() {
        let mut state = ViewState::new();
        let mut item = CatalogItem::new("wms-getCapabilities");
        item.is_user_supplied = false;
        state.explorer_panel_is_visible = false;

        state.view_catalog_member(item);

        assert_eq!(state.active_tab, ExplorerTab::DataCatalog);
        assert!(state.explorer_panel_is_visible);
        // Viewing alone does not touch the upload view flag.
        assert!(state.my_data_is_upload_view);
    }

    #[test]
    fn open_upload_view_returns_to_my_data() {
        let mut state = ViewState::new();
        state.on_file_add_finished(CatalogItem::new("csv"));
        state.open_upload_view();
        assert!(state.my_data_is_upload_view);
        assert_eq!(state.active_tab, ExplorerTab::MyData);
    }
}
