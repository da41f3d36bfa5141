// SPDX-License-Identifier: MPL-2.0
//! Identifiers handed back to callers when a notification is spawned.

use super::placement::Placement;

/// Unique identifier of a notification within one manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub(crate) u64);

impl NotificationId {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Reference to a live notification.
///
/// Carries its placement so dismissal only needs the handle. The stack
/// index is owned by the manager, see
/// [`Manager::stack_index`](super::Manager::stack_index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationHandle {
    id: NotificationId,
    placement: Placement,
}

impl NotificationHandle {
    pub(crate) fn new(id: NotificationId, placement: Placement) -> Self {
        Self { id, placement }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }
}

/// Lifecycle of a notification, from mount to teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Mounted with `visible: false`, before the enter transition.
    Hidden,
    /// Mounted and shown.
    Visible,
    /// Hidden again and waiting for the exit delay to elapse.
    Hiding,
    /// Removed from its bucket and unmounted. Terminal.
    Destroyed,
}
