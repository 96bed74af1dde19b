// SPDX-License-Identifier: MPL-2.0
//! Form state of the Add Data panel.

use crate::domain::catalog::{data_types, DataTypeOption, DataTypes};

/// Which settings section is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Local,
    Web,
}

/// Selected options, active tab and URL text.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    types: DataTypes,
    pub local_data_type: DataTypeOption,
    pub remote_data_type: DataTypeOption,
    pub active_tab: Tab,
    pub remote_url: String,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    /// Starts on the local tab with the first option of each list selected.
    #[must_use]
    pub fn new() -> Self {
        let types = data_types();
        Self {
            types,
            local_data_type: types.default_local(),
            remote_data_type: types.default_remote(),
            active_tab: Tab::Local,
            remote_url: String::new(),
        }
    }

    #[must_use]
    pub fn data_types(&self) -> DataTypes {
        self.types
    }

    pub fn select_local_option(&mut self, option: DataTypeOption) {
        self.local_data_type = option;
    }

    pub fn select_remote_option(&mut self, option: DataTypeOption) {
        self.remote_data_type = option;
    }

    pub fn change_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn on_remote_url_change(&mut self, url: String) {
        self.remote_url = url;
    }

    /// Options and current selection of the settings section for the active tab.
    #[must_use]
    pub fn settings_section(&self) -> (&'static [DataTypeOption], DataTypeOption) {
        match self.active_tab {
            Tab::Local => (self.types.local, self.local_data_type),
            Tab::Web => (self.types.remote, self.remote_data_type),
        }
    }
}
