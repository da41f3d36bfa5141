// SPDX-License-Identifier: MPL-2.0
//! Diagnostics channel for the notification system.
//!
//! Events are sent through a bounded channel by cheap [`DiagnosticsHandle`]s
//! and kept by the [`DiagnosticsCollector`] in a fixed-size [`EventRing`].

mod collector;
mod events;
mod ring;

pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, NotificationEvent,
    NotificationPhase, WarningEvent, WarningType,
};
pub use ring::{capacity_bounds, EventRing, RingCapacity};
