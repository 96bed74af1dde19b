// SPDX-License-Identifier: MPL-2.0
//! The My Data tab when it is not showing the Add Data panel: the list of
//! items the user added, with the previewed one highlighted.

use crate::domain::catalog::{CatalogItem, CatalogItemId};
use crate::domain::ui::ViewState;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, scrollable, Column, Container, Row, Text};
use iced::{alignment::Vertical, Element, Length, Theme};

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Go back to the Add Data panel.
    OpenUploadView,
    /// Preview the item with this id.
    Preview(CatalogItemId),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub items: &'a [CatalogItem],
    pub view_state: &'a ViewState,
    pub colors: &'a ColorScheme,
}

/// Applies `message` to the shared view state.
pub fn update(view_state: &mut ViewState, items: &[CatalogItem], message: Message) {
    match message {
        Message::OpenUploadView => view_state.open_upload_view(),
        Message::Preview(id) => {
            if let Some(item) = items.iter().find(|item| item.id == id) {
                view_state.view_catalog_member(item.clone());
            }
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            Text::new(ctx.i18n.tr("my-data-title"))
                .size(typography::TITLE_SM)
                .width(Length::Fill),
        )
        .push(
            button(Text::new(ctx.i18n.tr("my-data-add-button")))
                .on_press(Message::OpenUploadView)
                .style(button::primary),
        );

    let body: Element<'a, Message> = if ctx.items.is_empty() {
        Text::new(ctx.i18n.tr("my-data-empty"))
            .size(typography::BODY)
            .into()
    } else {
        let rows = ctx
            .items
            .iter()
            .map(|item| item_row(item, ctx.view_state.is_previewed(item), ctx.colors));
        scrollable(Column::with_children(rows).spacing(spacing::XXS))
            .height(Length::Fill)
            .into()
    };

    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(header)
        .push(body)
        .into()
}

fn item_row<'a>(
    item: &'a CatalogItem,
    previewed: bool,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    let label = Column::new()
        .push(Text::new(item.name.as_str()).size(typography::BODY))
        .push(Text::new(item.type_value.as_str()).size(typography::CAPTION));

    let highlight = colors.highlight;
    let row = Container::new(label)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(move |_theme: &Theme| {
            if previewed {
                container::Style {
                    background: Some(highlight.into()),
                    border: iced::Border {
                        radius: radius::SM.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            } else {
                container::Style::default()
            }
        });

    button(row)
        .on_press(Message::Preview(item.id))
        .padding(0)
        .style(button::text)
        .width(Length::Fill)
        .into()
}
