// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Panel events are applied here: the Add Data panel never touches the
//! shared [`ViewState`] or the toasts itself.

use super::Message;
use crate::application::port::Services;
use crate::config;
use crate::domain::catalog::{CatalogError, CatalogItem, SelectedFile};
use crate::domain::ui::{ExplorerTab, ViewState};
use crate::i18n::fluent::I18n;
use crate::infrastructure::UserCatalog;
use crate::ui::add_data;
use crate::ui::my_data;
use crate::ui::notifications::{self, Notification};
use iced::Task;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use unic_langid::LanguageIdentifier;

/// i18n key of the toast confirming an add.
pub const ADD_SUCCESS_KEY: &str = "notification-add-data-success";

/// Mutable view of the application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub view_state: &'a mut ViewState,
    pub add_data: &'a mut add_data::State,
    pub services: &'a Services,
    pub catalog: &'a UserCatalog,
    pub user_items: &'a mut Vec<CatalogItem>,
    pub notifications: &'a mut notifications::Manager,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::AddData(msg) => handle_add_data_message(ctx, msg),
        Message::MyData(msg) => {
            my_data::update(ctx.view_state, ctx.user_items, msg);
            Task::none()
        }
        Message::Notification(msg) => {
            ctx.notifications.handle_message(&msg);
            Task::none()
        }
        Message::SwitchTab(tab) => {
            ctx.view_state.active_tab = tab;
            Task::none()
        }
        Message::FileDialogResult(paths) => handle_selected_paths(ctx, paths.unwrap_or_default()),
        Message::FileDropped(path) => {
            if ctx.view_state.my_data_is_upload_view
                && ctx.view_state.active_tab == ExplorerTab::MyData
            {
                handle_selected_paths(ctx, vec![path])
            } else {
                debug!(path = %path.display(), "ignoring drop outside the upload view");
                Task::none()
            }
        }
        Message::Tick(now) => {
            ctx.notifications.tick_at(now);
            Task::none()
        }
        Message::LanguageSelected(locale) => apply_language_change(ctx.i18n, locale),
    }
}

/// Switches the interface language and remembers it in `settings.toml`.
fn apply_language_change(i18n: &mut I18n, locale: LanguageIdentifier) -> Task<Message> {
    i18n.set_locale(locale.clone());
    if i18n.current_locale() != &locale {
        debug!(%locale, "ignoring unavailable language");
        return Task::none();
    }

    let (mut cfg, _) = config::load();
    cfg.general.language = Some(locale.to_string());
    if let Err(err) = config::save(&cfg) {
        warn!(%err, "failed to save language preference");
    }
    Task::none()
}

fn handle_add_data_message(
    ctx: &mut UpdateContext<'_>,
    message: add_data::Message,
) -> Task<Message> {
    let (event, task) = ctx.add_data.handle_message(message, ctx.services);
    let event_task = handle_add_data_event(ctx, event);
    Task::batch([task.map(Message::AddData), event_task])
}

fn handle_add_data_event(ctx: &mut UpdateContext<'_>, event: add_data::Event) -> Task<Message> {
    match event {
        add_data::Event::None => Task::none(),
        add_data::Event::BrowseFiles { extensions } => {
            open_file_dialog(ctx.i18n.tr("add-data-dialog-title"), extensions)
        }
        add_data::Event::FileAddFinished(item) => {
            info!(item = %item.name, data_type = %item.type_value, "catalog item added");
            ctx.notifications.clear_add_errors();
            ctx.notifications
                .push(Notification::success(ADD_SUCCESS_KEY).with_arg("name", item.name.clone()));
            ctx.view_state.on_file_add_finished(item);
            *ctx.user_items = ctx.catalog.items();
            Task::none()
        }
        add_data::Event::AddFailed(err) => {
            ctx.notifications.push(error_notification(&err));
            // Uploads skip bad files, so part of a batch may still have landed.
            *ctx.user_items = ctx.catalog.items();
            Task::none()
        }
    }
}

fn error_notification(err: &CatalogError) -> Notification {
    err.i18n_args()
        .into_iter()
        .fold(Notification::error(err.i18n_key()), |toast, (key, value)| {
            toast.with_arg(key, value)
        })
}

fn handle_selected_paths(ctx: &mut UpdateContext<'_>, paths: Vec<PathBuf>) -> Task<Message> {
    if paths.is_empty() {
        return Task::none();
    }
    let files = paths.into_iter().map(SelectedFile::from_path).collect();
    handle_add_data_message(ctx, add_data::Message::FilesSelected(files))
}

fn open_file_dialog(title: String, extensions: Vec<String>) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(&title)
                .add_filter("Data", &extensions)
                .pick_files()
                .await
                .map(|handles| {
                    handles
                        .iter()
                        .map(|h| h.path().to_path_buf())
                        .collect::<Vec<_>>()
                })
        },
        Message::FileDialogResult,
    )
}
