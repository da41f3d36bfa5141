// SPDX-License-Identifier: MPL-2.0
//! Seam between the manager and whatever renders a notification.
//!
//! The manager never draws anything itself. It mounts a renderable unit on
//! an [`Attachment`], pushes prop snapshots to it, and destroys it once the
//! exit delay has elapsed. [`crate::ui::ToastLayer`] is the Iced
//! implementation; tests use [`crate::test_utils::RecordingSurface`].

use super::options::{Category, Content, ResolvedOptions};
use super::placement::Placement;
use std::collections::BTreeMap;
use std::time::Duration;

/// Where a renderable unit is mounted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum Attachment {
    /// The application's root overlay.
    #[default]
    Root,
    /// A named overlay, e.g. one per pane or per window.
    Named(String),
}

impl Attachment {
    pub fn named(name: impl Into<String>) -> Self {
        Attachment::Named(name.into())
    }
}

/// Identifier of a mounted unit, assigned by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(pub u64);

/// Declarative state handed to a renderable unit.
///
/// Carries no callbacks: closing is reported back through the surface's own
/// message type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastProps {
    pub placement: Placement,
    pub attachment: Attachment,
    pub closable: bool,
    pub title: Option<Content>,
    pub category: Option<Category>,
    pub content: Option<Content>,
    pub auto_close: bool,
    pub duration: Duration,
    pub vertical_offset: i32,
    pub extra_class: Option<String>,
    pub extra_attributes: BTreeMap<String, String>,
    pub visible: bool,
    pub stack_index: usize,
}

impl ToastProps {
    /// Builds the initial (hidden) props for a freshly validated notification.
    pub(crate) fn initial(
        resolved: ResolvedOptions,
        placement: Placement,
        stack_index: usize,
    ) -> Self {
        Self {
            placement,
            attachment: resolved.attachment.unwrap_or_default(),
            closable: resolved.closable,
            title: resolved.title,
            category: resolved.category,
            content: resolved.content,
            auto_close: resolved.auto_close,
            duration: resolved.duration,
            vertical_offset: resolved.vertical_offset,
            extra_class: resolved.extra_class,
            extra_attributes: resolved.extra_attributes,
            visible: false,
            stack_index,
        }
    }
}

/// Renderable-unit collaborator.
pub trait Surface {
    /// Mounts a new unit on `attachment` with the given initial props.
    fn mount(&mut self, attachment: &Attachment, props: ToastProps) -> UnitId;

    /// Replaces the props of a live unit.
    fn update(&mut self, unit: UnitId, props: &ToastProps);

    /// Releases a unit. The id is never used again.
    fn destroy(&mut self, unit: UnitId);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::options::{resolve_options, Defaults, NotificationOptions};

    #[test]
    fn initial_props_start_hidden_on_root() {
        let (resolved, _) = resolve_options(
            NotificationOptions::new().title("hello"),
            &Defaults::default(),
        );
        let props = ToastProps::initial(resolved, Placement::RightTop, 2);

        assert!(!props.visible);
        assert_eq!(props.stack_index, 2);
        assert_eq!(props.attachment, Attachment::Root);
        assert_eq!(props.title, Some(Content::Text("hello".into())));
    }

    #[test]
    fn explicit_attachment_is_kept() {
        let (resolved, _) = resolve_options(
            NotificationOptions::new().attachment(Attachment::named("sidebar")),
            &Defaults::default(),
        );
        let props = ToastProps::initial(resolved, Placement::Center, 0);
        assert_eq!(props.attachment, Attachment::Named("sidebar".into()));
    }
}
