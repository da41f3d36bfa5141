// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small cards with a category-colored accent, an optional title,
//! the content, and a dismiss button when the notification is closable.

use super::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use super::layer::Components;
use crate::notifications::{Category, Content, NotificationMessage as Message, ToastProps, UnitId};
use iced::widget::{button, container, text, Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Returns the accent color for a category; uncategorized toasts are gray.
#[must_use]
pub fn accent_color(category: Option<Category>) -> Color {
    match category {
        Some(Category::Success) => palette::SUCCESS_500,
        Some(Category::Info) => palette::INFO_500,
        Some(Category::Warning) => palette::WARNING_500,
        Some(Category::Error) => palette::ERROR_500,
        None => palette::GRAY_400,
    }
}

/// Renders a single toast.
pub fn view<'a>(
    unit: UnitId,
    props: &'a ToastProps,
    components: &'a Components,
) -> Element<'a, Message> {
    let accent = accent_color(props.category);
    let visible = props.visible;

    let mut body = Column::new().spacing(spacing::XXS);
    if let Some(title) = &props.title {
        body = body.push(render_content(title, props, components, typography::BODY_LG));
    }
    if let Some(content) = &props.content {
        body = body.push(render_content(content, props, components, typography::BODY));
    }

    // Layout: [badge] [title/content] [dismiss]
    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(badge(accent))
        .push(
            Container::new(body)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

    if props.closable {
        row = row.push(
            button(text("×").size(typography::BODY_LG))
                .on_press(Message::CloseRequested(unit))
                .padding(spacing::XXS)
                .style(dismiss_button_style),
        );
    }

    Container::new(row)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent, visible))
        .into()
}

fn render_content<'a>(
    content: &'a Content,
    props: &'a ToastProps,
    components: &'a Components,
    size: f32,
) -> Element<'a, Message> {
    match content {
        Content::Text(value) => {
            let faded = !props.visible;
            Text::new(value.as_str())
                .size(size)
                .style(move |theme: &Theme| text::Style {
                    color: Some(fade(theme.palette().text, faded)),
                })
                .into()
        }
        Content::Component(name) => match components.get(name) {
            Some(render) => render(props),
            None => Text::new(format!("<{name}>")).size(size).into(),
        },
    }
}

fn badge<'a>(accent: Color) -> Element<'a, Message> {
    Container::new(Space::new().width(sizing::BADGE).height(sizing::BADGE))
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(accent)),
            border: iced::Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn fade(color: Color, faded: bool) -> Color {
    if faded {
        Color {
            a: color.a * opacity::HIDDEN_TOAST,
            ..color
        }
    } else {
        color
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, visible: bool) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(fade(bg_color, !visible))),
        border: iced::Border {
            color: fade(accent_color, !visible),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: if visible { shadow::MD } else { shadow::NONE },
        text_color: Some(fade(theme.palette().text, !visible)),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_background = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };

    let (background, text_color) = match status {
        button::Status::Active => (None, base.text),
        button::Status::Hovered => (hover_background(opacity::OVERLAY_SUBTLE), base.text),
        button::Status::Pressed => (hover_background(opacity::OVERLAY_MEDIUM), base.text),
        button::Status::Disabled => (
            None,
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
        ),
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
