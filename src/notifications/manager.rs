// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` mounts notifications on its [`Surface`], stacks them per
//! [`Placement`], and drives their auto-dismiss and exit timers. Closing a
//! notification is two-phase: it is hidden immediately and only removed
//! from its bucket and destroyed once the exit delay has elapsed.

use super::handle::{Lifecycle, NotificationHandle, NotificationId};
use super::options::{
    resolve_options, Category, CloseEvent, Defaults, NotificationOptions, OnClose,
    ResolvedOptions,
};
use super::placement::Placement;
use super::registry::PlacementRegistry;
use super::surface::{Surface, ToastProps, UnitId};
use super::timer::{Clock, SystemClock, TimerToken, Timers};
use crate::diagnostics::{
    DiagnosticsHandle, ErrorEvent, ErrorType, NotificationEvent, NotificationPhase,
    WarningEvent, WarningType,
};
use std::fmt;
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The user pressed the close button of a mounted unit.
    CloseRequested(UnitId),
    /// Tick for firing due timers.
    Tick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    AutoDismiss(NotificationHandle),
    Destroy(NotificationHandle),
}

struct Entry {
    handle: NotificationHandle,
    unit: UnitId,
    props: ToastProps,
    /// Position in the bucket; kept equal to it after every removal.
    stack_index: usize,
    lifecycle: Lifecycle,
    on_close: Option<OnClose>,
    auto_dismiss: Option<TimerToken>,
    pending_destroy: Option<TimerToken>,
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("handle", &self.handle)
            .field("unit", &self.unit)
            .field("stack_index", &self.stack_index)
            .field("lifecycle", &self.lifecycle)
            .field("on_close", &self.on_close.is_some())
            .field("auto_dismiss", &self.auto_dismiss)
            .field("pending_destroy", &self.pending_destroy)
            .finish_non_exhaustive()
    }
}

/// Owns the placement buckets, the timers and the surface units.
#[derive(Debug)]
pub struct Manager<S: Surface> {
    surface: S,
    registry: PlacementRegistry<Entry>,
    timers: Timers<Task>,
    clock: Box<dyn Clock>,
    defaults: Defaults,
    next_id: u64,
    /// Optional diagnostics handle for logging warnings/errors.
    diagnostics: Option<DiagnosticsHandle>,
}

impl<S: Surface> Manager<S> {
    /// Creates an empty manager rendering through `surface`.
    pub fn new(surface: S) -> Self {
        Self::with_defaults(surface, Defaults::default())
    }

    pub fn with_defaults(surface: S, defaults: Defaults) -> Self {
        Self {
            surface,
            registry: PlacementRegistry::new(),
            timers: Timers::new(),
            clock: Box::new(SystemClock),
            defaults,
            next_id: 0,
            diagnostics: None,
        }
    }

    /// Replaces the time source. Tests pass a [`super::ManualClock`].
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Sets the diagnostics handle for logging warnings and errors.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    #[must_use]
    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// Replaces the defaults used for notifications spawned from now on.
    pub fn set_defaults(&mut self, defaults: Defaults) {
        self.defaults = defaults;
    }

    // ------------------------------------------------------------------
    // Public API
    // ------------------------------------------------------------------

    /// Resolves `options` against the defaults and spawns a notification.
    ///
    /// Returns `None` if the placement key is unknown.
    pub fn notify(&mut self, options: NotificationOptions) -> Option<NotificationHandle> {
        let (resolved, close_event) = resolve_options(options, &self.defaults);
        self.spawn(resolved, close_event)
    }

    pub fn info(&mut self, options: NotificationOptions) -> Option<NotificationHandle> {
        self.notify(options.category(Category::Info))
    }

    pub fn warning(&mut self, options: NotificationOptions) -> Option<NotificationHandle> {
        self.notify(options.category(Category::Warning))
    }

    pub fn error(&mut self, options: NotificationOptions) -> Option<NotificationHandle> {
        self.notify(options.category(Category::Error))
    }

    pub fn success(&mut self, options: NotificationOptions) -> Option<NotificationHandle> {
        self.notify(options.category(Category::Success))
    }

    /// Hides the notification now and destroys it after the exit delay.
    pub fn dismiss(&mut self, handle: NotificationHandle) -> bool {
        self.unmount(handle, self.defaults.exit_delay)
    }

    /// Removes every live notification immediately, without exit delay.
    pub fn dismiss_all(&mut self) {
        let handles: Vec<NotificationHandle> = self
            .registry
            .iter()
            .flat_map(|(_, bucket)| bucket.iter().map(|entry| entry.handle))
            .collect();

        for handle in handles {
            self.unmount(handle, Duration::ZERO);
        }
    }

    /// Merges the fields set in `options` into the live props.
    ///
    /// Bucket membership, stack index and pending timers are left alone.
    /// Placement and attachment cannot change after spawn and are ignored;
    /// a new `on_close` replaces the previous callback.
    pub fn update(&mut self, handle: NotificationHandle, options: NotificationOptions) -> bool {
        let Some(entry) = find_mut(&mut self.registry, handle) else {
            return false;
        };

        let NotificationOptions {
            closable,
            title,
            category,
            placement: _,
            attachment: _,
            on_close,
            content,
            auto_close,
            duration,
            vertical_offset,
            extra_class,
            extra_attributes,
        } = options;

        let props = &mut entry.props;
        if let Some(closable) = closable {
            props.closable = closable;
        }
        if title.is_some() {
            props.title = title;
        }
        if category.is_some() {
            props.category = category;
        }
        if content.is_some() {
            props.content = content;
        }
        if let Some(auto_close) = auto_close {
            props.auto_close = auto_close;
        }
        if let Some(duration) = duration {
            props.duration = duration;
        }
        if let Some(offset) = vertical_offset {
            props.vertical_offset = offset;
        }
        if extra_class.is_some() {
            props.extra_class = extra_class;
        }
        if let Some(attributes) = extra_attributes {
            props.extra_attributes.extend(attributes);
        }
        if on_close.is_some() {
            entry.on_close = on_close;
        }

        self.surface.update(entry.unit, &entry.props);
        true
    }

    /// Cancels a pending auto-dismiss. The notification then stays until dismissed.
    pub fn cancel_auto_dismiss(&mut self, handle: NotificationHandle) -> bool {
        let Some(entry) = find_mut(&mut self.registry, handle) else {
            return false;
        };
        match entry.auto_dismiss.take() {
            Some(token) => self.timers.cancel(token),
            None => false,
        }
    }

    /// Fires every timer whose deadline has passed.
    ///
    /// Exit delays started by a timer count from that timer's deadline, so a
    /// single late tick can both hide and destroy a notification.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        loop {
            let fired = self.timers.drain_due(now);
            if fired.is_empty() {
                break;
            }
            for timer in fired {
                match timer.task {
                    Task::AutoDismiss(handle) => {
                        if let Some(entry) = find_mut(&mut self.registry, handle) {
                            entry.auto_dismiss = None;
                        }
                        let exit_delay = self.defaults.exit_delay;
                        self.unmount_from(handle, exit_delay, timer.deadline);
                    }
                    Task::Destroy(handle) => {
                        if let Some(entry) = find_mut(&mut self.registry, handle) {
                            entry.pending_destroy = None;
                        }
                        self.destroy(handle);
                    }
                }
            }
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::CloseRequested(unit) => {
                if let Some(handle) = self.find_by_unit(unit) {
                    self.close(handle);
                }
            }
            Message::Tick => self.tick(),
        }
    }

    /// Closes a notification on user request and runs its `on_close` callback.
    ///
    /// The notification is removed without exit delay.
    pub fn close(&mut self, handle: NotificationHandle) -> bool {
        let on_close = find_mut(&mut self.registry, handle).and_then(|e| e.on_close.take());

        let closed = self.unmount(handle, Duration::ZERO);
        if let Some(callback) = on_close {
            callback();
        }
        closed
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Validates the placement, mounts a unit and registers it in its bucket.
    pub fn spawn(
        &mut self,
        resolved: ResolvedOptions,
        close_event: CloseEvent,
    ) -> Option<NotificationHandle> {
        let placement = match resolved.placement.parse::<Placement>() {
            Ok(placement) => placement,
            Err(err) => {
                match &self.diagnostics {
                    Some(diagnostics) => diagnostics
                        .log_error(ErrorEvent::new(ErrorType::InvalidPlacement, err.to_string())),
                    None => eprintln!("{err}"),
                }
                return None;
            }
        };

        let stack_index = self.registry.bucket(placement).len();
        let handle = NotificationHandle::new(NotificationId(self.next_id), placement);
        self.next_id += 1;

        let mut props = ToastProps::initial(resolved, placement, stack_index);
        let unit = self.surface.mount(&props.attachment.clone(), props.clone());

        // Mounted hidden first so the surface can play an enter transition.
        props.visible = true;
        self.surface.update(unit, &props);

        let auto_dismiss = self.schedule_auto_dismiss(&props, handle);
        self.log_spawn(handle, &props);

        let position = self.registry.push(
            placement,
            Entry {
                handle,
                unit,
                props,
                stack_index,
                lifecycle: Lifecycle::Visible,
                on_close: close_event.on_close,
                auto_dismiss,
                pending_destroy: None,
            },
        );
        debug_assert_eq!(position, stack_index);

        Some(handle)
    }

    /// Schedules the auto-dismiss of `handle` if its props ask for one.
    fn schedule_auto_dismiss(
        &mut self,
        props: &ToastProps,
        handle: NotificationHandle,
    ) -> Option<TimerToken> {
        props.auto_close.then(|| {
            let deadline = self.clock.now() + props.duration;
            self.timers.schedule(deadline, Task::AutoDismiss(handle))
        })
    }

    /// Hides a notification now and destroys it after `exit_delay`.
    ///
    /// A zero delay destroys synchronously. Returns `false` for handles that
    /// are no longer live, or already hiding when `exit_delay` is non-zero.
    pub fn unmount(&mut self, handle: NotificationHandle, exit_delay: Duration) -> bool {
        let now = self.clock.now();
        self.unmount_from(handle, exit_delay, now)
    }

    fn unmount_from(
        &mut self,
        handle: NotificationHandle,
        exit_delay: Duration,
        start: Instant,
    ) -> bool {
        let Some(entry) = find_mut(&mut self.registry, handle) else {
            return false;
        };

        if let Some(token) = entry.auto_dismiss.take() {
            self.timers.cancel(token);
        }

        if entry.lifecycle == Lifecycle::Hiding {
            if !exit_delay.is_zero() {
                return false;
            }
            if let Some(token) = entry.pending_destroy.take() {
                self.timers.cancel(token);
            }
            self.destroy(handle);
            return true;
        }

        entry.lifecycle = Lifecycle::Hiding;
        entry.props.visible = false;
        self.surface.update(entry.unit, &entry.props);
        let category = entry.props.category;
        if !exit_delay.is_zero() {
            entry.pending_destroy = Some(
                self.timers
                    .schedule(start + exit_delay, Task::Destroy(handle)),
            );
        }

        self.log_phase(handle, category, NotificationPhase::Hidden);
        if exit_delay.is_zero() {
            self.destroy(handle);
        }
        true
    }

    /// Removes `handle` from its bucket, reindexes the rest, destroys the unit.
    fn destroy(&mut self, handle: NotificationHandle) {
        let bucket = self.registry.bucket_mut(handle.placement());
        let Some(index) = bucket
            .iter()
            .find(|entry| entry.handle == handle)
            .map(|entry| entry.stack_index)
        else {
            return;
        };

        let entry = bucket.remove(index);
        debug_assert_eq!(entry.handle, handle);

        // O(n) per removal; buckets hold a handful of toasts.
        for (position, remaining) in bucket.iter_mut().enumerate() {
            if remaining.stack_index != position {
                remaining.stack_index = position;
                remaining.props.stack_index = position;
                self.surface.update(remaining.unit, &remaining.props);
            }
        }

        for token in [entry.auto_dismiss, entry.pending_destroy].into_iter().flatten() {
            self.timers.cancel(token);
        }
        self.surface.destroy(entry.unit);
        self.log_phase(handle, entry.props.category, NotificationPhase::Destroyed);
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Live handles of one placement, oldest first.
    #[must_use]
    pub fn bucket(&self, placement: Placement) -> Vec<NotificationHandle> {
        self.registry
            .bucket(placement)
            .iter()
            .map(|entry| entry.handle)
            .collect()
    }

    /// Position of a live notification in its bucket.
    #[must_use]
    pub fn stack_index(&self, handle: NotificationHandle) -> Option<usize> {
        find(&self.registry, handle).map(|entry| entry.stack_index)
    }

    #[must_use]
    pub fn lifecycle(&self, handle: NotificationHandle) -> Lifecycle {
        find(&self.registry, handle).map_or(Lifecycle::Destroyed, |entry| entry.lifecycle)
    }

    /// Current props of a live notification.
    #[must_use]
    pub fn props(&self, handle: NotificationHandle) -> Option<&ToastProps> {
        find(&self.registry, handle).map(|entry| &entry.props)
    }

    /// Looks up the live handle with this id.
    #[must_use]
    pub fn find_handle(&self, id: NotificationId) -> Option<NotificationHandle> {
        self.registry
            .iter()
            .flat_map(|(_, bucket)| bucket.iter())
            .find(|entry| entry.handle.id() == id)
            .map(|entry| entry.handle)
    }

    /// Unit mounted for a live notification.
    #[must_use]
    pub fn unit(&self, handle: NotificationHandle) -> Option<UnitId> {
        find(&self.registry, handle).map(|entry| entry.unit)
    }

    fn find_by_unit(&self, unit: UnitId) -> Option<NotificationHandle> {
        self.registry
            .iter()
            .flat_map(|(_, bucket)| bucket.iter())
            .find(|entry| entry.unit == unit)
            .map(|entry| entry.handle)
    }

    /// Number of live notifications across all placements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Deadline of the next timer, for scheduling the next tick.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    // ------------------------------------------------------------------
    // Diagnostics
    // ------------------------------------------------------------------

    fn log_spawn(&self, handle: NotificationHandle, props: &ToastProps) {
        let Some(diagnostics) = &self.diagnostics else {
            return;
        };
        self.log_phase(handle, props.category, NotificationPhase::Spawned);

        let summary = summary(props);
        match props.category {
            Some(Category::Warning) => diagnostics
                .log_warning(WarningEvent::new(WarningType::NotificationShown, summary)),
            Some(Category::Error) => diagnostics
                .log_error(ErrorEvent::new(ErrorType::NotificationShown, summary)),
            // Success and Info notifications are not logged as diagnostic events
            Some(Category::Success | Category::Info) | None => {}
        }
    }

    fn log_phase(
        &self,
        handle: NotificationHandle,
        category: Option<Category>,
        phase: NotificationPhase,
    ) {
        if let Some(diagnostics) = &self.diagnostics {
            diagnostics.log_notification(NotificationEvent {
                id: handle.id().value(),
                placement: handle.placement(),
                category,
                phase,
            });
        }
    }
}

fn find<'a>(
    registry: &'a PlacementRegistry<Entry>,
    handle: NotificationHandle,
) -> Option<&'a Entry> {
    registry
        .bucket(handle.placement())
        .iter()
        .find(|entry| entry.handle == handle)
}

fn find_mut<'a>(
    registry: &'a mut PlacementRegistry<Entry>,
    handle: NotificationHandle,
) -> Option<&'a mut Entry> {
    registry
        .bucket_mut(handle.placement())
        .iter_mut()
        .find(|entry| entry.handle == handle)
}

/// Short text used in diagnostic events.
fn summary(props: &ToastProps) -> String {
    use super::options::Content;
    match props.title.as_ref().or(props.content.as_ref()) {
        Some(Content::Text(text)) => text.clone(),
        Some(Content::Component(name)) => format!("<{name}>"),
        None => String::new(),
    }
}
