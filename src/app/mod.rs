// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the explorer panels.
//!
//! The `App` struct wires together localization, preferences, the shared
//! view state and the catalog services, and routes messages to the panels.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use update::ADD_SUCCESS_KEY;

use crate::application::port::Services;
use crate::config;
use crate::domain::catalog::CatalogItem;
use crate::domain::ui::ViewState;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{default_services, UserCatalog};
use crate::ui::add_data;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    view_state: ViewState,
    add_data: add_data::State,
    services: Services,
    catalog: UserCatalog,
    /// Snapshot of the user's data group, refreshed after each add.
    user_items: Vec<CatalogItem>,
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
    colors: ColorScheme,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("view_state", &self.view_state)
            .field("user_items", &self.user_items.len())
            .finish_non_exhaustive()
    }
}

pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::DEFAULT_WINDOW_WIDTH, config::DEFAULT_WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced calls `boot` through `Fn`; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads preferences and wires the default services.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n_dir = flags.i18n_dir.as_deref().map(PathBuf::from);
        let i18n = I18n::new(flags.lang.clone(), i18n_dir.as_deref(), &config);
        let (services, catalog) = default_services(config.analytics.enabled);

        let mut notifications = notifications::Manager::new();
        if let Some(key) = config_warning {
            notifications.push(Notification::warning(key));
        }

        info!(
            locale = %i18n.current_locale(),
            analytics = config.analytics.enabled,
            "application started"
        );

        let theme_mode = config.general.theme_mode;
        let app = Self {
            i18n,
            view_state: ViewState::new(),
            add_data: add_data::State::new(),
            services,
            catalog,
            user_items: Vec::new(),
            notifications,
            theme_mode,
            colors: ColorScheme::for_mode(theme_mode),
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let upload_view_open = self.view_state.my_data_is_upload_view;
        Subscription::batch([
            subscription::create_file_drop_subscription(upload_view_open),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            view_state: &mut self.view_state,
            add_data: &mut self.add_data,
            services: &self.services,
            catalog: &self.catalog,
            user_items: &mut self.user_items,
            notifications: &mut self.notifications,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            view_state: &self.view_state,
            add_data: &self.add_data,
            user_items: &self.user_items,
            notifications: &self.notifications,
            colors: &self.colors,
        })
    }
}
