// SPDX-License-Identifier: MPL-2.0
//! Iced overlay that hosts mounted toasts.
//!
//! `ToastLayer` is the [`Surface`] the application hands to the manager.
//! It keeps the latest props of every mounted unit and renders, for one
//! [`Attachment`], five stacks anchored to the placement corners.

use super::design_tokens::spacing;
use super::toast;
use crate::notifications::{
    Attachment, NotificationMessage as Message, Placement, Surface, ToastProps, UnitId,
};
use iced::widget::{text, Column, Container, Stack};
use iced::{alignment, Element, Length, Padding};
use std::collections::{BTreeMap, HashMap};

/// Renders a named [`crate::notifications::Content::Component`].
pub type Component = fn(&ToastProps) -> Element<'_, Message>;

/// Named renderables available to toasts.
pub type Components = HashMap<String, Component>;

#[derive(Debug, Clone)]
struct Mounted {
    attachment: Attachment,
    props: ToastProps,
}

/// Surface implementation backed by Iced widgets.
#[derive(Debug, Default)]
pub struct ToastLayer {
    next_unit: u64,
    units: BTreeMap<UnitId, Mounted>,
    components: Components,
}

impl ToastLayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a renderable usable as `Content::Component(name)`.
    pub fn register_component(&mut self, name: impl Into<String>, component: Component) {
        self.components.insert(name.into(), component);
    }

    /// Number of mounted units across all attachments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Mounted units of one attachment and placement, in stack order.
    #[must_use]
    pub fn stack(&self, attachment: &Attachment, placement: Placement) -> Vec<(UnitId, &ToastProps)> {
        let mut units: Vec<_> = self
            .units
            .iter()
            .filter(|(_, m)| m.attachment == *attachment && m.props.placement == placement)
            .map(|(unit, m)| (*unit, &m.props))
            .collect();
        units.sort_by_key(|(_, props)| props.stack_index);
        units
    }

    /// Renders every toast mounted on `attachment`.
    ///
    /// Meant to be layered over the attachment's content with a `Stack`.
    pub fn view(&self, attachment: &Attachment) -> Element<'_, Message> {
        let anchors: Vec<Element<'_, Message>> = Placement::ALL
            .into_iter()
            .filter_map(|placement| self.view_stack(attachment, placement))
            .collect();

        if anchors.is_empty() {
            // Return an empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        Stack::with_children(anchors)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn view_stack(&self, attachment: &Attachment, placement: Placement) -> Option<Element<'_, Message>> {
        let mut units = self.stack(attachment, placement);
        if units.is_empty() {
            return None;
        }
        // Bottom anchors grow upwards: the oldest toast sits on the edge.
        if placement.is_bottom() {
            units.reverse();
        }

        let offset = units
            .iter()
            .map(|(_, props)| props.vertical_offset)
            .max()
            .unwrap_or_default()
            .max(0) as f32;

        let toasts: Vec<Element<'_, Message>> = units
            .into_iter()
            .map(|(unit, props)| toast::view(unit, props, &self.components))
            .collect();

        let (align_x, align_y) = anchor(placement);
        let column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(align_x);

        let padding = if placement.is_bottom() {
            Padding {
                bottom: spacing::MD + offset,
                ..Padding::new(spacing::MD)
            }
        } else {
            Padding {
                top: spacing::MD + offset,
                ..Padding::new(spacing::MD)
            }
        };

        Some(
            Container::new(column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(align_x)
                .align_y(align_y)
                .padding(padding)
                .into(),
        )
    }
}

fn anchor(placement: Placement) -> (alignment::Horizontal, alignment::Vertical) {
    match placement {
        Placement::RightTop => (alignment::Horizontal::Right, alignment::Vertical::Top),
        Placement::LeftTop => (alignment::Horizontal::Left, alignment::Vertical::Top),
        Placement::RightBottom => (alignment::Horizontal::Right, alignment::Vertical::Bottom),
        Placement::LeftBottom => (alignment::Horizontal::Left, alignment::Vertical::Bottom),
        Placement::Center => (alignment::Horizontal::Center, alignment::Vertical::Center),
    }
}

impl Surface for ToastLayer {
    fn mount(&mut self, attachment: &Attachment, props: ToastProps) -> UnitId {
        let unit = UnitId(self.next_unit);
        self.next_unit += 1;
        self.units.insert(
            unit,
            Mounted {
                attachment: attachment.clone(),
                props,
            },
        );
        unit
    }

    fn update(&mut self, unit: UnitId, props: &ToastProps) {
        if let Some(mounted) = self.units.get_mut(&unit) {
            mounted.props = props.clone();
        }
    }

    fn destroy(&mut self, unit: UnitId) {
        self.units.remove(&unit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::{Manager, ManualClock, NotificationOptions};
    use std::time::Duration;

    fn manager() -> (Manager<ToastLayer>, ManualClock) {
        let clock = ManualClock::new();
        (Manager::new(ToastLayer::new()).with_clock(clock.clone()), clock)
    }

    #[test]
    fn mounted_units_follow_manager_lifecycle() {
        let (mut manager, clock) = manager();
        let handle = manager
            .notify(NotificationOptions::new().title("saved"))
            .unwrap();
        assert_eq!(manager.surface().len(), 1);

        manager.dismiss(handle);
        clock.advance(Duration::from_millis(300));
        manager.tick();
        assert!(manager.surface().is_empty());
    }

    #[test]
    fn stack_is_ordered_and_scoped_to_attachment() {
        let (mut manager, _) = manager();
        manager.notify(NotificationOptions::new().title("a"));
        manager.notify(NotificationOptions::new().title("b"));
        manager.notify(
            NotificationOptions::new()
                .title("elsewhere")
                .attachment(Attachment::named("pane")),
        );

        let root = manager.surface().stack(&Attachment::Root, Placement::RightTop);
        let titles: Vec<_> = root.iter().map(|(_, p)| p.title.clone()).collect();
        assert_eq!(titles, vec![Some("a".into()), Some("b".into())]);

        let pane = manager
            .surface()
            .stack(&Attachment::named("pane"), Placement::RightTop);
        assert_eq!(pane.len(), 1);
        assert_eq!(pane[0].1.stack_index, 2);
    }

    #[test]
    fn reindex_reaches_rendered_props() {
        let (mut manager, _) = manager();
        let first = manager.notify(NotificationOptions::new()).unwrap();
        manager.notify(NotificationOptions::new());

        manager.unmount(first, Duration::ZERO);
        let stack = manager.surface().stack(&Attachment::Root, Placement::RightTop);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack[0].1.stack_index, 0);
    }

    #[test]
    fn registered_component_is_kept() {
        fn badge(_: &ToastProps) -> Element<'_, Message> {
            text("custom").into()
        }
        let mut layer = ToastLayer::new();
        layer.register_component("badge", badge);
        assert!(layer.components.contains_key("badge"));
    }

    #[test]
    fn view_renders_with_and_without_toasts() {
        let (mut manager, _) = manager();
        let _ = manager.surface().view(&Attachment::Root);

        for placement in Placement::ALL {
            manager.notify(NotificationOptions::new().at(placement).title("t"));
        }
        let _ = manager.surface().view(&Attachment::Root);
    }
}
