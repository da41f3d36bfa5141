// SPDX-License-Identifier: MPL-2.0
//! Per-placement ordered buckets of live notifications.

use super::placement::Placement;

/// Five ordered buckets, one per [`Placement`]. Oldest entry first.
#[derive(Debug)]
pub struct PlacementRegistry<E> {
    buckets: [Vec<E>; 5],
}

impl<E> Default for PlacementRegistry<E> {
    fn default() -> Self {
        Self {
            buckets: std::array::from_fn(|_| Vec::new()),
        }
    }
}

impl<E> PlacementRegistry<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn bucket(&self, placement: Placement) -> &[E] {
        &self.buckets[placement.slot()]
    }

    pub fn bucket_mut(&mut self, placement: Placement) -> &mut Vec<E> {
        &mut self.buckets[placement.slot()]
    }

    /// Appends to the end (top of the visual stack); returns the new position.
    pub fn push(&mut self, placement: Placement, entry: E) -> usize {
        let bucket = self.bucket_mut(placement);
        bucket.push(entry);
        bucket.len() - 1
    }

    /// Total number of entries across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Iterates buckets in [`Placement::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Placement, &[E])> {
        Placement::ALL
            .into_iter()
            .map(move |placement| (placement, self.bucket(placement)))
    }
}
