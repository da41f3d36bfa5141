// SPDX-License-Identifier: MPL-2.0
//! Bounded ring of recent diagnostic events.
//!
//! Keeps the newest events only. Evictions are counted so a reader can tell
//! that history was lost.

use std::collections::VecDeque;

/// Capacity bounds for the event ring.
pub mod capacity_bounds {
    pub const MIN: usize = 16;
    pub const MAX: usize = 4096;
    /// Enough for a few hundred spawn/hide/destroy cycles.
    pub const DEFAULT: usize = 512;
}

/// Number of events the ring retains, clamped to [`capacity_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingCapacity(usize);

impl RingCapacity {
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(capacity_bounds::MIN, capacity_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for RingCapacity {
    fn default() -> Self {
        Self(capacity_bounds::DEFAULT)
    }
}

/// Fixed-size ring, oldest entry first.
///
/// ```
/// use iced_notify::diagnostics::{EventRing, RingCapacity};
///
/// let mut ring = EventRing::new(RingCapacity::new(16));
/// for i in 0..20 {
///     ring.push(i);
/// }
///
/// assert_eq!(ring.iter().next(), Some(&4));
/// assert_eq!(ring.evicted(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct EventRing<T> {
    entries: VecDeque<T>,
    limit: usize,
    evicted: u64,
}

impl<T> EventRing<T> {
    #[must_use]
    pub fn new(capacity: RingCapacity) -> Self {
        Self::with_limit(capacity.value())
    }

    /// Unclamped constructor for small rings in tests.
    pub(crate) fn with_limit(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
            evicted: 0,
        }
    }

    /// Appends `entry`, dropping the oldest one when full.
    pub fn push(&mut self, entry: T) {
        if self.entries.len() == self.limit {
            self.entries.pop_front();
            self.evicted += 1;
        }
        self.entries.push_back(entry);
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.entries.iter()
    }

    /// Most recent entry.
    #[must_use]
    pub fn latest(&self) -> Option<&T> {
        self.entries.back()
    }

    /// Entries dropped to make room since creation or the last clear.
    #[must_use]
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.evicted = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_is_clamped() {
        assert_eq!(RingCapacity::new(1).value(), capacity_bounds::MIN);
        assert_eq!(RingCapacity::new(1 << 20).value(), capacity_bounds::MAX);
        assert_eq!(RingCapacity::default().value(), capacity_bounds::DEFAULT);
    }

    #[test]
    fn full_ring_drops_oldest_and_counts_it() {
        let mut ring = EventRing::with_limit(3);
        for phase in ["spawned", "hidden", "destroyed", "spawned"] {
            ring.push(phase);
        }

        assert_eq!(
            ring.iter().copied().collect::<Vec<_>>(),
            vec!["hidden", "destroyed", "spawned"]
        );
        assert_eq!(ring.latest(), Some(&"spawned"));
        assert_eq!(ring.evicted(), 1);
    }

    #[test]
    fn zero_limit_still_keeps_latest() {
        let mut ring = EventRing::with_limit(0);
        ring.push(1);
        ring.push(2);
        assert_eq!(ring.limit(), 1);
        assert_eq!(ring.latest(), Some(&2));
    }

    #[test]
    fn clear_resets_eviction_count() {
        let mut ring = EventRing::with_limit(1);
        ring.push('a');
        ring.push('b');
        ring.clear();
        assert!(ring.is_empty());
        assert_eq!(ring.evicted(), 0);
    }
}
