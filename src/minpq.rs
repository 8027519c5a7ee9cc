// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The extrinsic min-priority-queue contract
//!
//! The engine's frontier, as an injected dependency: anything that
//! can insert, extract the minimum, and decrease a priority will do.
//! The engine's asymptotic cost follows whichever implementation is
//! supplied.  One conforming implementation ships here, a linear-scan
//! queue; a heap drops in through the same trait without touching the
//! engine.

use failure::Fail;

/// The one failure a queue can signal.  The engine never triggers it
/// (it guards every extraction with `is_empty`), so reaching it from
/// the outside is a logic error in the caller.
#[derive(Debug, Fail)]
#[fail(display = "extract_min called on an empty queue")]
pub struct EmptyQueue;

/// A min-priority queue whose priorities are supplied from outside
/// the items themselves.
pub trait MinPq<T> {
    /// Add an item at the given priority.
    fn insert(&mut self, item: T, priority: f64);

    /// Remove and return the item with the least priority.
    fn extract_min(&mut self) -> Result<T, EmptyQueue>;

    /// Lower an item's priority.  Preconditions, unchecked: the item
    /// is present, and the new priority is no greater than the old.
    fn decrease_priority(&mut self, item: &T, priority: f64);

    fn is_empty(&self) -> bool;
}

/// The naive implementation: an unordered vector, scanned on every
/// extraction.  O(n) extract and decrease, which is plenty for the
/// grids this crate was written against and trivially correct.
#[derive(Debug)]
pub struct NaiveMinPq<T> {
    entries: Vec<(T, f64)>,
}

impl<T> NaiveMinPq<T> {
    pub fn new() -> Self {
        NaiveMinPq { entries: Vec::new() }
    }
}

impl<T> Default for NaiveMinPq<T> {
    fn default() -> Self {
        NaiveMinPq::new()
    }
}

impl<T: PartialEq> MinPq<T> for NaiveMinPq<T> {
    fn insert(&mut self, item: T, priority: f64) {
        self.entries.push((item, priority));
    }

    fn extract_min(&mut self) -> Result<T, EmptyQueue> {
        if self.entries.is_empty() {
            return Err(EmptyQueue);
        }
        let mut best = 0;
        for i in 1..self.entries.len() {
            if self.entries[i].1 < self.entries[best].1 {
                best = i;
            }
        }
        Ok(self.entries.swap_remove(best).0)
    }

    fn decrease_priority(&mut self, item: &T, priority: f64) {
        if let Some(entry) = self.entries.iter_mut().find(|(t, _)| t == item) {
            entry.1 = priority;
        }
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_in_priority_order() {
        let mut pq = NaiveMinPq::new();
        pq.insert("c", 3.0);
        pq.insert("a", 1.0);
        pq.insert("b", 2.0);
        assert_eq!(pq.extract_min().unwrap(), "a");
        assert_eq!(pq.extract_min().unwrap(), "b");
        assert_eq!(pq.extract_min().unwrap(), "c");
        assert!(pq.is_empty());
    }

    #[test]
    fn extract_on_empty_fails() {
        let mut pq: NaiveMinPq<u32> = NaiveMinPq::new();
        assert!(pq.extract_min().is_err());
    }

    #[test]
    fn decrease_priority_reorders() {
        let mut pq = NaiveMinPq::new();
        pq.insert("slow", 10.0);
        pq.insert("fast", 1.0);
        pq.decrease_priority(&"slow", 0.5);
        assert_eq!(pq.extract_min().unwrap(), "slow");
        assert_eq!(pq.extract_min().unwrap(), "fast");
    }
}
