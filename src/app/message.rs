// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::notifications::{Category, NotificationMessage, Placement};
use std::path::PathBuf;
use std::time::Instant;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Spawn a notification; `None` uses the plain `notify` entry point.
    Spawn(Option<Category>),
    /// Spawn a notification inside the side panel.
    SpawnInPanel,
    /// Change the placement used by the spawn buttons.
    PlacementSelected(Placement),
    DismissNewest,
    DismissAll,
    UpdateNewest,
    /// Keep the newest notification until it is dismissed.
    PinNewest,
    /// Forwarded from the toast layer.
    Notification(NotificationMessage),
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional TOML file with notification defaults.
    pub config_path: Option<PathBuf>,
    /// Optional initial placement key for the spawn buttons.
    pub placement: Option<String>,
}
