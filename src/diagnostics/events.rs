// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types recorded by the notification system.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::notifications::{Category, Placement};

/// Categories of warnings that can occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// A warning-category notification was shown to the user.
    NotificationShown,
    /// A configuration issue was detected and a default was used instead.
    ConfigurationIssue,
    /// Other warning type not covered by specific categories.
    Other,
}

/// Categories of errors that can occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// A notification was requested with an unknown placement key.
    InvalidPlacement,
    /// An error-category notification was shown to the user.
    NotificationShown,
    /// Input/output error (config file read/write failures).
    IoError,
    /// Other error type not covered by specific categories.
    Other,
}

/// A warning with its category and a human readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// An error with its category and a human readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    #[must_use]
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// Lifecycle milestones of a single notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationPhase {
    Spawned,
    Hidden,
    Destroyed,
}

/// A notification lifecycle transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationEvent {
    pub id: u64,
    pub placement: Placement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub phase: NotificationPhase,
}

/// A single diagnostic event.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    /// When the event occurred (wall clock, for reports)
    pub recorded_at: DateTime<Utc>,
    /// The type and data of the event
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            recorded_at: Utc::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    Notification { event: NotificationEvent },
    Warning { event: WarningEvent },
    Error { event: ErrorEvent },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_event_uses_current_time() {
        let before = Instant::now();
        let event = DiagnosticEvent::new(DiagnosticEventKind::Error {
            event: ErrorEvent::new(ErrorType::Other, "boom"),
        });
        assert!(event.timestamp >= before);
    }

    #[test]
    fn event_kind_serializes_with_type_tag() {
        let kind = DiagnosticEventKind::Warning {
            event: WarningEvent::new(WarningType::ConfigurationIssue, "bad placement"),
        };
        let text = toml::to_string(&kind).unwrap();
        assert!(text.contains("type = \"warning\""));
        assert!(text.contains("configuration_issue"));
    }
}
