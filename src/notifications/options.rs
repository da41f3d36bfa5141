// SPDX-License-Identifier: MPL-2.0
//! Caller-facing notification options and their resolution against defaults.

use super::placement::Placement;
use super::surface::Attachment;
use crate::config::defaults::{
    DEFAULT_AUTO_CLOSE, DEFAULT_CLOSABLE, DEFAULT_DURATION_MS, DEFAULT_EXIT_DELAY_MS,
    DEFAULT_VERTICAL_OFFSET,
};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Callback run after the user closes a notification.
pub type OnClose = Box<dyn FnOnce() + Send>;

/// Emotional category of a notification; drives the accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Info,
    Warning,
    Error,
    Success,
}

/// Title or body of a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Plain text.
    Text(String),
    /// A renderable registered on the surface under this name.
    Component(String),
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Content::Text(value.to_string())
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Content::Text(value)
    }
}

/// Options for a single notification. Unset fields fall back to [`Defaults`].
#[derive(Default)]
pub struct NotificationOptions {
    pub closable: Option<bool>,
    pub title: Option<Content>,
    pub category: Option<Category>,
    /// Raw placement key, validated when the notification is spawned.
    pub placement: Option<String>,
    pub attachment: Option<Attachment>,
    pub on_close: Option<OnClose>,
    pub content: Option<Content>,
    pub auto_close: Option<bool>,
    pub duration: Option<Duration>,
    pub vertical_offset: Option<i32>,
    pub extra_class: Option<String>,
    pub extra_attributes: Option<BTreeMap<String, String>>,
}

impl NotificationOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = Some(closable);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<Content>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Sets the placement from its kebab-case key (`"right-top"`, `"center"`, ...).
    ///
    /// The key is not checked here; an unknown key makes the spawn fail.
    #[must_use]
    pub fn placement(mut self, key: impl Into<String>) -> Self {
        self.placement = Some(key.into());
        self
    }

    /// Sets the placement from a typed value.
    #[must_use]
    pub fn at(self, placement: Placement) -> Self {
        self.placement(placement.as_str())
    }

    #[must_use]
    pub fn attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }

    #[must_use]
    pub fn on_close(mut self, callback: impl FnOnce() + Send + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn content(mut self, content: impl Into<Content>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub fn auto_close(mut self, auto_close: bool) -> Self {
        self.auto_close = Some(auto_close);
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn vertical_offset(mut self, offset: i32) -> Self {
        self.vertical_offset = Some(offset);
        self
    }

    #[must_use]
    pub fn extra_class(mut self, class: impl Into<String>) -> Self {
        self.extra_class = Some(class.into());
        self
    }

    #[must_use]
    pub fn extra_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_attributes
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }
}

impl fmt::Debug for NotificationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationOptions")
            .field("closable", &self.closable)
            .field("title", &self.title)
            .field("category", &self.category)
            .field("placement", &self.placement)
            .field("attachment", &self.attachment)
            .field("on_close", &self.on_close.as_ref().map(|_| "FnOnce"))
            .field("content", &self.content)
            .field("auto_close", &self.auto_close)
            .field("duration", &self.duration)
            .field("vertical_offset", &self.vertical_offset)
            .field("extra_class", &self.extra_class)
            .field("extra_attributes", &self.extra_attributes)
            .finish()
    }
}

/// Values used for every option the caller leaves unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub placement: Placement,
    pub closable: bool,
    pub duration: Duration,
    pub auto_close: bool,
    pub vertical_offset: i32,
    /// Hide-to-destroy delay used by timed and explicit dismissals.
    pub exit_delay: Duration,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            placement: Placement::RightTop,
            closable: DEFAULT_CLOSABLE,
            duration: Duration::from_millis(DEFAULT_DURATION_MS),
            auto_close: DEFAULT_AUTO_CLOSE,
            vertical_offset: DEFAULT_VERTICAL_OFFSET,
            exit_delay: Duration::from_millis(DEFAULT_EXIT_DELAY_MS),
        }
    }
}

/// Options merged over [`Defaults`], without the close callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub closable: bool,
    pub title: Option<Content>,
    pub category: Option<Category>,
    pub placement: String,
    pub attachment: Option<Attachment>,
    pub content: Option<Content>,
    pub auto_close: bool,
    pub duration: Duration,
    pub vertical_offset: i32,
    pub extra_class: Option<String>,
    pub extra_attributes: BTreeMap<String, String>,
}

/// Side record holding the callbacks stripped from [`ResolvedOptions`].
#[derive(Default)]
pub struct CloseEvent {
    pub on_close: Option<OnClose>,
}

impl fmt::Debug for CloseEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloseEvent")
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}

/// Merges `options` over `defaults`; explicitly set fields always win.
#[must_use]
pub fn resolve_options(
    options: NotificationOptions,
    defaults: &Defaults,
) -> (ResolvedOptions, CloseEvent) {
    let NotificationOptions {
        closable,
        title,
        category,
        placement,
        attachment,
        on_close,
        content,
        auto_close,
        duration,
        vertical_offset,
        extra_class,
        extra_attributes,
    } = options;

    let resolved = ResolvedOptions {
        closable: closable.unwrap_or(defaults.closable),
        title,
        category,
        placement: placement.unwrap_or_else(|| defaults.placement.as_str().to_string()),
        attachment,
        content,
        auto_close: auto_close.unwrap_or(defaults.auto_close),
        duration: duration.unwrap_or(defaults.duration),
        vertical_offset: vertical_offset.unwrap_or(defaults.vertical_offset),
        extra_class,
        extra_attributes: extra_attributes.unwrap_or_default(),
    };

    (resolved, CloseEvent { on_close })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn empty_options_take_every_default() {
        let (resolved, evt) = resolve_options(NotificationOptions::new(), &Defaults::default());

        assert_eq!(resolved.placement, "right-top");
        assert!(resolved.closable);
        assert!(resolved.auto_close);
        assert_eq!(resolved.duration, Duration::from_millis(3000));
        assert_eq!(resolved.vertical_offset, 0);
        assert!(resolved.category.is_none());
        assert!(resolved.attachment.is_none());
        assert!(evt.on_close.is_none());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let options = NotificationOptions::new()
            .closable(false)
            .auto_close(false)
            .duration(Duration::from_millis(100))
            .vertical_offset(-12)
            .at(Placement::Center);
        let (resolved, _) = resolve_options(options, &Defaults::default());

        assert!(!resolved.closable);
        assert!(!resolved.auto_close);
        assert_eq!(resolved.duration, Duration::from_millis(100));
        assert_eq!(resolved.vertical_offset, -12);
        assert_eq!(resolved.placement, "center");
    }

    #[test]
    fn configured_defaults_are_used() {
        let defaults = Defaults {
            placement: Placement::LeftBottom,
            duration: Duration::from_secs(7),
            ..Defaults::default()
        };
        let (resolved, _) = resolve_options(NotificationOptions::new(), &defaults);

        assert_eq!(resolved.placement, "left-bottom");
        assert_eq!(resolved.duration, Duration::from_secs(7));
    }

    #[test]
    fn on_close_is_moved_to_close_event() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);
        let options = NotificationOptions::new().on_close(move || flag.store(true, Ordering::SeqCst));

        let (_, evt) = resolve_options(options, &Defaults::default());
        let callback = evt.on_close.expect("callback should be extracted");
        callback();

        assert!(fired.load(Ordering::SeqCst));
    }

    #[test]
    fn unknown_placement_key_survives_resolution() {
        let options = NotificationOptions::new().placement("bottom-center");
        let (resolved, _) = resolve_options(options, &Defaults::default());
        assert_eq!(resolved.placement, "bottom-center");
    }

    #[test]
    fn extra_attributes_accumulate() {
        let options = NotificationOptions::new()
            .extra_attribute("data-id", "42")
            .extra_attribute("role", "status");
        let (resolved, _) = resolve_options(options, &Defaults::default());

        assert_eq!(resolved.extra_attributes.len(), 2);
        assert_eq!(resolved.extra_attributes["data-id"], "42");
    }

    #[test]
    fn str_converts_to_text_content() {
        assert_eq!(Content::from("hello"), Content::Text("hello".into()));
    }
}
