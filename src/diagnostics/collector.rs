// SPDX-License-Identifier: MPL-2.0
//! Collects notification diagnostics sent from anywhere in the app.
//!
//! Producers hold cloneable [`DiagnosticsHandle`]s writing to a bounded
//! channel. The owner drains it into an [`EventRing`] with
//! [`DiagnosticsCollector::process_pending`], once per update.

use std::time::Instant;

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use super::{
    DiagnosticEvent, DiagnosticEventKind, ErrorEvent, EventRing, NotificationEvent,
    NotificationPhase, RingCapacity, WarningEvent,
};

/// Events a handle can queue before the owner drains them.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Sending side of the collector. Cheap to clone, usable from any thread.
///
/// Sends never block: events are dropped when the channel is full.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_warning(&self, event: WarningEvent) {
        self.send(DiagnosticEventKind::Warning { event });
    }

    pub fn log_error(&self, event: ErrorEvent) {
        self.send(DiagnosticEventKind::Error { event });
    }

    pub fn log_notification(&self, event: NotificationEvent) {
        self.send(DiagnosticEventKind::Notification { event });
    }

    /// Sends an event, reporting a full channel to the caller.
    pub fn try_log(
        &self,
        kind: DiagnosticEventKind,
    ) -> Result<(), TrySendError<DiagnosticEvent>> {
        self.event_tx.try_send(DiagnosticEvent::new(kind))
    }

    fn send(&self, kind: DiagnosticEventKind) {
        let _ = self.try_log(kind);
    }
}

/// Receiving side: owns the channel and the retained history.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    events: EventRing<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    started_at: Instant,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: RingCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            events: EventRing::new(capacity),
            event_rx,
            event_tx,
            started_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves queued events into the history. Returns how many were moved.
    pub fn process_pending(&mut self) -> usize {
        let mut moved = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.events.push(event);
            moved += 1;
        }
        moved
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Retained events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.events.iter()
    }

    /// Retained error events, oldest first.
    pub fn errors(&self) -> impl Iterator<Item = &ErrorEvent> {
        self.events.iter().filter_map(|e| match &e.kind {
            DiagnosticEventKind::Error { event } => Some(event),
            _ => None,
        })
    }

    /// Lifecycle phases recorded for one notification id, in order.
    pub fn phases_of(&self, id: u64) -> impl Iterator<Item = NotificationPhase> + '_ {
        self.events.iter().filter_map(move |e| match &e.kind {
            DiagnosticEventKind::Notification { event } if event.id == id => Some(event.phase),
            _ => None,
        })
    }

    /// Events lost to the history limit.
    #[must_use]
    pub fn evicted(&self) -> u64 {
        self.events.evicted()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Time since the collector was created.
    #[must_use]
    pub fn uptime(&self) -> std::time::Duration {
        self.started_at.elapsed()
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(RingCapacity::default())
    }
}
