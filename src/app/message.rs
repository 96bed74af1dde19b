// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::ui::ExplorerTab;
use crate::ui::add_data;
use crate::ui::my_data;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;
use unic_langid::LanguageIdentifier;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    AddData(add_data::Message),
    MyData(my_data::Message),
    Notification(notifications::NotificationMessage),
    SwitchTab(ExplorerTab),
    /// Result of the file picker opened by the Add Data panel.
    FileDialogResult(Option<Vec<PathBuf>>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),
    /// A language button in the explorer footer was pressed.
    LanguageSelected(LanguageIdentifier),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory containing extra Fluent `.ftl` files.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `ICED_CATALOG_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
