// SPDX-License-Identifier: MPL-2.0
//! Layout of the demo window.

use super::{Message, PANEL};
use crate::notifications::{Attachment, Category, Manager, Placement};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::ToastLayer;
use iced::widget::{button, text, Column, Container, Row, Stack};
use iced::{Element, Length};

/// Contextual data needed to render the demo window.
pub struct ViewContext<'a> {
    pub notifications: &'a Manager<ToastLayer>,
    pub placement: Placement,
    pub diagnostic_events: usize,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let layer = ctx.notifications.surface();

    let panel = Container::new(
        Stack::new()
            .push(
                Container::new(text("Panel").size(typography::BODY))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .padding(spacing::MD),
            )
            .push(layer.view(&Attachment::named(PANEL)).map(Message::Notification)),
    )
    .width(Length::Fixed(sizing::PANEL_WIDTH))
    .height(Length::Fill)
    .style(iced::widget::container::bordered_box);

    let content = Row::new()
        .push(controls(&ctx))
        .push(panel)
        .width(Length::Fill)
        .height(Length::Fill);

    Stack::new()
        .push(content)
        .push(layer.view(&Attachment::Root).map(Message::Notification))
        .into()
}

fn controls<'a>(ctx: &ViewContext<'_>) -> Element<'a, Message> {
    let placements = Placement::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, placement| {
            let style = if placement == ctx.placement {
                button::primary
            } else {
                button::secondary
            };
            row.push(
                button(text(placement.as_str()))
                    .on_press(Message::PlacementSelected(placement))
                    .style(style),
            )
        });

    let spawns = [
        ("Notify", None),
        ("Info", Some(Category::Info)),
        ("Warning", Some(Category::Warning)),
        ("Error", Some(Category::Error)),
        ("Success", Some(Category::Success)),
    ]
    .into_iter()
    .fold(Row::new().spacing(spacing::XS), |row, (label, category)| {
        row.push(button(text(label)).on_press(Message::Spawn(category)))
    });

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(button(text("Dismiss newest")).on_press(Message::DismissNewest))
        .push(button(text("Dismiss all")).on_press(Message::DismissAll))
        .push(button(text("Update newest")).on_press(Message::UpdateNewest))
        .push(button(text("Pin newest")).on_press(Message::PinNewest))
        .push(button(text("Spawn in panel")).on_press(Message::SpawnInPanel));

    let status = text(format!(
        "{} live, {} diagnostic events",
        ctx.notifications.len(),
        ctx.diagnostic_events
    ))
    .size(typography::BODY);

    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(text("Placement").size(typography::BODY_LG))
        .push(placements)
        .push(text("Spawn").size(typography::BODY_LG))
        .push(spawns)
        .push(actions)
        .push(status)
        .into()
}
