// SPDX-License-Identifier: MPL-2.0
//! Rendering of the Add Data panel.

use super::messages::Message;
use super::state::{State, Tab};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{button, container, pick_list, text, text_input, Column, Row, Text};
use iced::{alignment::Vertical, Element, Length};

/// Contextual data needed to render the panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the panel: tab switch, file input, URL form and the settings
/// section of the active tab.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .width(Length::Fill)
        .push(build_tab_switch(&ctx))
        .push(build_file_input(&ctx))
        .push(build_url_form(&ctx))
        .push(build_settings_section(&ctx));

    container(content).width(Length::Fill).into()
}

fn build_tab_switch<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let tab_button = |tab: Tab, key: &str| {
        let style = if ctx.state.active_tab == tab {
            button::primary
        } else {
            button::secondary
        };
        button(Text::new(ctx.i18n.tr(key)))
            .on_press(Message::ChangeTab(tab))
            .style(style)
    };

    Row::new()
        .spacing(spacing::XS)
        .push(tab_button(Tab::Local, "add-data-tab-local"))
        .push(tab_button(Tab::Web, "add-data-tab-web"))
        .into()
}

fn build_file_input<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let accept = ctx.state.data_types().accept_attribute();

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("add-data-local-label")).size(typography::BODY_LG))
        .push(
            button(Text::new(ctx.i18n.tr("add-data-browse-button")))
                .on_press(Message::BrowseFiles)
                .width(Length::Fill),
        )
        .push(
            text(ctx.i18n.tr_with_args("add-data-accepted-types", &[("types", &accept)]))
                .size(typography::CAPTION),
        )
        .into()
}

fn build_url_form<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let input = text_input(&ctx.i18n.tr("add-data-url-placeholder"), &ctx.state.remote_url)
        .on_input(Message::RemoteUrlChanged)
        .on_submit(Message::SubmitUrl)
        .width(Length::Fill);

    let submit = button(Text::new(ctx.i18n.tr("add-data-url-button"))).on_press(Message::SubmitUrl);

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("add-data-url-label")).size(typography::BODY_LG))
        .push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(input)
                .push(submit),
        )
        .into()
}

fn build_settings_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let (options, selected) = ctx.state.settings_section();
    let dropdown = match ctx.state.active_tab {
        Tab::Local => pick_list(options, Some(selected), Message::SelectLocalOption),
        Tab::Web => pick_list(options, Some(selected), Message::SelectRemoteOption),
    };

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("add-data-settings-label")).size(typography::BODY_LG))
        .push(dropdown.width(Length::Fill))
        .into()
}
