// SPDX-License-Identifier: MPL-2.0
//! Demo application exercising the notification manager.
//!
//! The `App` owns one [`Manager`] rendering through a [`ToastLayer`] and a
//! [`DiagnosticsCollector`]. Buttons map one-to-one onto the manager API;
//! a periodic tick drives the timers while any are pending.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::diagnostics::{
    DiagnosticsCollector, ErrorEvent, ErrorType, WarningEvent, WarningType,
};
use crate::error::Error;
use crate::notifications::{
    Attachment, Category, Content, Lifecycle, Manager, NotificationHandle, NotificationMessage,
    NotificationOptions, Placement, ToastProps,
};
use crate::ui::design_tokens::typography;
use crate::ui::ToastLayer;
use iced::widget::text;
use iced::{Element, Subscription, Task, Theme};

/// Name of the side panel attachment.
const PANEL: &str = "panel";

/// Name of the component rendering a toast's position in its stack.
const POSITION_COMPONENT: &str = "position";

/// Root Iced application state.
pub struct App {
    notifications: Manager<ToastLayer>,
    diagnostics: DiagnosticsCollector,
    /// Placement used by the spawn buttons.
    placement: Placement,
    /// Spawned handles, oldest first. Destroyed ones are pruned after each update.
    spawned: Vec<NotificationHandle>,
    spawn_count: u32,
}

/// Launches the demo window.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires the boot function to be Fn, flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .run()
}

fn position_component(props: &ToastProps) -> Element<'_, NotificationMessage> {
    text(format!(
        "#{} in {}",
        props.stack_index + 1,
        props.placement
    ))
    .size(typography::BODY)
    .into()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut diagnostics = DiagnosticsCollector::default();
        let handle = diagnostics.handle();
        let warn = |err: &Error| {
            handle.log_warning(WarningEvent::new(
                WarningType::ConfigurationIssue,
                err.to_string(),
            ));
        };

        let loaded = match &flags.config_path {
            Some(path) => config::load_from_path(path),
            None => config::load(),
        };
        let config = loaded.unwrap_or_else(|err| {
            match &err {
                Error::Io(_) => handle
                    .log_error(ErrorEvent::new(ErrorType::IoError, err.to_string())),
                _ => warn(&err),
            }
            Config::default()
        });
        for issue in config.issues() {
            warn(&issue);
        }

        let defaults = config.defaults();
        let placement = match flags.placement.as_deref() {
            Some(key) => key.parse::<Placement>().unwrap_or_else(|err| {
                warn(&err);
                defaults.placement
            }),
            None => defaults.placement,
        };

        let mut layer = ToastLayer::new();
        layer.register_component(POSITION_COMPONENT, position_component);

        let mut notifications = Manager::with_defaults(layer, defaults);
        notifications.set_diagnostics(handle.clone());
        diagnostics.process_pending();

        let app = App {
            notifications,
            diagnostics,
            placement,
            spawned: Vec::new(),
            spawn_count: 0,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.notifications.len() {
            0 => "Iced Notify".to_string(),
            live => format!("Iced Notify ({live})"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_pending_timers())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Spawn(category) => {
                self.spawn_count += 1;
                let options = NotificationOptions::new()
                    .title(format!("Notification {}", self.spawn_count))
                    .at(self.placement);
                let handle = match category {
                    None => self.notifications.notify(options.content("Plain notify")),
                    Some(Category::Info) => self
                        .notifications
                        .info(options.content(Content::Component(POSITION_COMPONENT.into()))),
                    Some(Category::Warning) => self
                        .notifications
                        .warning(options.content("Something needs attention")),
                    Some(Category::Error) => self
                        .notifications
                        .error(options.content("Something went wrong").auto_close(false)),
                    Some(Category::Success) => {
                        self.notifications.success(options.content("Done"))
                    }
                };
                self.spawned.extend(handle);
            }
            Message::SpawnInPanel => {
                self.spawn_count += 1;
                let handle = self.notifications.info(
                    NotificationOptions::new()
                        .title(format!("Panel {}", self.spawn_count))
                        .content(Content::Component(POSITION_COMPONENT.into()))
                        .at(Placement::RightBottom)
                        .attachment(Attachment::named(PANEL)),
                );
                self.spawned.extend(handle);
            }
            Message::PlacementSelected(placement) => {
                self.placement = placement;
            }
            Message::DismissNewest => {
                if let Some(handle) = self.newest() {
                    self.notifications.dismiss(handle);
                }
            }
            Message::DismissAll => {
                self.notifications.dismiss_all();
            }
            Message::UpdateNewest => {
                if let Some(handle) = self.newest() {
                    self.notifications.update(
                        handle,
                        NotificationOptions::new()
                            .title("Updated")
                            .category(Category::Success),
                    );
                }
            }
            Message::PinNewest => {
                if let Some(handle) = self.newest() {
                    self.notifications.cancel_auto_dismiss(handle);
                }
            }
            Message::Notification(message) => {
                self.notifications.handle_message(message);
            }
            Message::Tick(_) => {
                self.notifications.tick();
            }
        }

        let notifications = &self.notifications;
        self.spawned
            .retain(|handle| notifications.lifecycle(*handle) != Lifecycle::Destroyed);
        self.diagnostics.process_pending();
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            notifications: &self.notifications,
            placement: self.placement,
            diagnostic_events: self.diagnostics.len(),
        })
    }

    /// Newest notification that is still shown.
    fn newest(&self) -> Option<NotificationHandle> {
        self.spawned
            .iter()
            .rev()
            .copied()
            .find(|handle| self.notifications.lifecycle(*handle) == Lifecycle::Visible)
    }
}
