// SPDX-License-Identifier: MPL-2.0
//! Manager-owned timers driven by an injectable clock.
//!
//! Nothing here sleeps or spawns. Timers are deadlines in a queue; the owner
//! calls [`Timers::drain_due`] from its tick handler and runs whatever fired.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Source of the current time.
pub trait Clock: fmt::Debug + Send {
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Virtual clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Token returned when a timer is scheduled; cancels exactly that timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

/// A timer removed from the queue because its deadline passed.
#[derive(Debug)]
pub struct Fired<T> {
    pub token: TimerToken,
    /// When the timer was due, which may be earlier than the tick that fired it.
    pub deadline: Instant,
    pub task: T,
}

#[derive(Debug)]
struct Scheduled<T> {
    token: TimerToken,
    deadline: Instant,
    task: T,
}

/// Deadline queue of pending tasks.
#[derive(Debug)]
pub struct Timers<T> {
    next_token: u64,
    pending: Vec<Scheduled<T>>,
}

impl<T> Default for Timers<T> {
    fn default() -> Self {
        Self {
            next_token: 0,
            pending: Vec::new(),
        }
    }
}

impl<T> Timers<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `task` to fire once `deadline` is reached.
    pub fn schedule(&mut self, deadline: Instant, task: T) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.pending.push(Scheduled {
            token,
            deadline,
            task,
        });
        token
    }

    /// Cancels a pending timer. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        if let Some(pos) = self.pending.iter().position(|s| s.token == token) {
            self.pending.remove(pos);
            true
        } else {
            false
        }
    }

    /// Removes and returns every task due at `now`, earliest deadline first.
    ///
    /// Timers sharing a deadline fire in scheduling order.
    pub fn drain_due(&mut self, now: Instant) -> Vec<Fired<T>> {
        let mut due = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].deadline <= now {
                due.push(self.pending.remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by_key(|s| (s.deadline, s.token));
        due.into_iter()
            .map(|s| Fired {
                token: s.token,
                deadline: s.deadline,
                task: s.task,
            })
            .collect()
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|s| s.deadline).min()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
