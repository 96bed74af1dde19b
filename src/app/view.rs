// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window shows the explorer (tab bar plus the active tab) on the left,
//! the preview of the selected item on the right, and toasts on top.

use super::Message;
use crate::domain::catalog::CatalogItem;
use crate::domain::ui::{ExplorerTab, ViewState};
use crate::i18n::fluent::I18n;
use crate::ui::add_data;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::my_data;
use crate::ui::notifications::{self, Toast};
use crate::ui::theming::ColorScheme;
use iced::widget::{button, stack, Column, Container, Row, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub view_state: &'a ViewState,
    pub add_data: &'a add_data::State,
    pub user_items: &'a [CatalogItem],
    pub notifications: &'a notifications::Manager,
    pub colors: &'a ColorScheme,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut body = Row::new().width(Length::Fill).height(Length::Fill);
    if ctx.view_state.explorer_panel_is_visible {
        body = body.push(view_explorer(&ctx));
    }
    body = body.push(view_preview(ctx.i18n, ctx.view_state.previewed_item.as_ref()));

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    stack![body, toasts].into()
}

fn view_explorer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let tab_button = |tab: ExplorerTab, key: &str| {
        let style = if ctx.view_state.active_tab == tab {
            button::primary
        } else {
            button::secondary
        };
        button(Text::new(ctx.i18n.tr(key)))
            .on_press(Message::SwitchTab(tab))
            .style(style)
    };

    let tabs = Row::new()
        .spacing(spacing::XS)
        .push(tab_button(ExplorerTab::DataCatalog, "explorer-tab-data-catalog"))
        .push(tab_button(ExplorerTab::MyData, "explorer-tab-my-data"));

    let content: Element<'a, Message> = match ctx.view_state.active_tab {
        ExplorerTab::DataCatalog => Text::new(ctx.i18n.tr("data-catalog-placeholder"))
            .size(typography::BODY)
            .into(),
        ExplorerTab::MyData if ctx.view_state.my_data_is_upload_view => {
            add_data::view(add_data::ViewContext {
                i18n: ctx.i18n,
                state: ctx.add_data,
            })
            .map(Message::AddData)
        }
        ExplorerTab::MyData => my_data::view(my_data::ViewContext {
            i18n: ctx.i18n,
            items: ctx.user_items,
            view_state: ctx.view_state,
            colors: ctx.colors,
        })
        .map(Message::MyData),
    };

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .padding(spacing::SM)
            .push(tabs)
            .push(Container::new(content).height(Length::Fill))
            .push(view_language_buttons(ctx.i18n)),
    )
    .width(Length::Fixed(sizing::EXPLORER_WIDTH))
    .height(Length::Fill)
    .into()
}

/// One button per available locale, the current one highlighted.
fn view_language_buttons<'a>(i18n: &I18n) -> Element<'a, Message> {
    i18n.available_locales()
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, locale| {
            let name = i18n.tr(&format!("language-name-{locale}"));
            let label = if name.starts_with("MISSING:") {
                locale.to_string()
            } else {
                name
            };
            let style = if i18n.current_locale() == locale {
                button::primary
            } else {
                button::text
            };
            row.push(
                button(Text::new(label).size(typography::CAPTION))
                    .on_press(Message::LanguageSelected(locale.clone()))
                    .style(style),
            )
        })
        .into()
}

fn view_preview<'a>(i18n: &I18n, item: Option<&'a CatalogItem>) -> Element<'a, Message> {
    let content = match item {
        Some(item) => Column::new()
            .spacing(spacing::XS)
            .push(Text::new(item.name.as_str()).size(typography::TITLE_LG))
            .push(
                Text::new(i18n.tr_with_args("preview-type", &[("type", item.type_value.as_str())]))
                    .size(typography::BODY),
            )
            .push(
                Text::new(item.url.clone().unwrap_or_default())
                    .size(typography::CAPTION),
            ),
        None => Column::new().push(Text::new(i18n.tr("preview-empty")).size(typography::BODY)),
    };

    Container::new(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
