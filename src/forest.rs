//! Disjoint-set forest over unit time slots.
//!
//! Each set of slots is tagged with the one still-free slot that the whole
//! set stands for. Looking up the set of a deadline therefore answers
//! "which is the latest free slot at or before this deadline" in amortized
//! near-constant time.
//!
//! Slots live in a `Vec<SlotSet>` addressed by index; parents are indices
//! into the same vector.
//!
//! # Heuristics
//!
//! - **Union by rank**: the lower-ranked root is attached below the higher one.
//! - **Path compression**: every node visited by [`SlotForest::find`] is
//!   re-parented directly to the root and takes over the root's available slot.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 21.3 (Disjoint-set forests)

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::diagnostics::ForestSnapshot;
use crate::error::{ScheduleError, ScheduleResult};

/// Per-slot node of the forest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSet {
    /// Free slot offered by this node's set.
    ///
    /// Only current on roots, or on nodes just visited by a `find`.
    pub available_slot: usize,
    /// Parent index. A node is a root iff `parent` is its own index.
    pub parent: usize,
    /// Upper bound on subtree height.
    pub rank: u32,
}

impl SlotSet {
    fn singleton(slot: usize) -> Self {
        Self {
            available_slot: slot,
            parent: slot,
            rank: 0,
        }
    }
}

/// Disjoint-set forest over the slots `0..size`.
///
/// # Example
///
/// ```
/// use u_deadline::forest::SlotForest;
///
/// let mut forest = SlotForest::new(4);
/// assert_eq!(forest.available_slot(3).unwrap(), 3);
///
/// // Slot 3 is taken: fold its set into the set of slot 2.
/// forest.union(3, 2).unwrap();
/// assert_eq!(forest.available_slot(3).unwrap(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotForest {
    sets: Vec<SlotSet>,
}

impl SlotForest {
    /// Creates a forest of `size` singleton sets.
    pub fn new(size: usize) -> Self {
        let mut forest = Self {
            sets: Vec::with_capacity(size),
        };
        for slot in 0..size {
            forest.sets.push(SlotSet::singleton(slot));
        }
        forest
    }

    /// Resets `slot` to a singleton set offering itself.
    ///
    /// Only safe on slots that have never been unioned; resetting a merged
    /// slot leaves its former children pointing at a stale root.
    pub fn make(&mut self, slot: usize) -> ScheduleResult<()> {
        self.check(slot)?;
        self.sets[slot] = SlotSet::singleton(slot);
        Ok(())
    }

    /// Returns the root of the set containing `slot`, compressing the path.
    ///
    /// Every node visited on the way up is re-parented to the root and its
    /// `available_slot` overwritten with the root's.
    pub fn find(&mut self, slot: usize) -> ScheduleResult<usize> {
        self.check(slot)?;
        Ok(self.find_in_range(slot))
    }

    fn find_in_range(&mut self, slot: usize) -> usize {
        let mut root = slot;
        while self.sets[root].parent != root {
            root = self.sets[root].parent;
        }

        let available = self.sets[root].available_slot;
        let mut node = slot;
        while node != root {
            let next = self.sets[node].parent;
            self.sets[node].parent = root;
            self.sets[node].available_slot = available;
            node = next;
        }

        trace!(slot, root, available, "find");
        root
    }

    /// Merges the set containing `a` with the set containing `b`.
    ///
    /// The merged set offers the available slot of `b`'s set. A no-op if the
    /// two already share a root.
    pub fn union(&mut self, a: usize, b: usize) -> ScheduleResult<()> {
        let root_a = self.find(a)?;
        let root_b = self.find(b)?;
        if root_a == root_b {
            return Ok(());
        }
        self.merge(root_a, root_b);
        Ok(())
    }

    /// Links two roots by rank.
    ///
    /// Whichever root survives, the merged set keeps `root_b`'s available slot.
    fn merge(&mut self, root_a: usize, root_b: usize) {
        let rank_a = self.sets[root_a].rank;
        let rank_b = self.sets[root_b].rank;

        if rank_a > rank_b {
            self.sets[root_b].parent = root_a;
            self.sets[root_a].available_slot = self.sets[root_b].available_slot;
        } else {
            self.sets[root_a].parent = root_b;
            if rank_a == rank_b {
                self.sets[root_b].rank += 1;
            }
        }

        trace!(root_a, root_b, rank_a, rank_b, "merge");
    }

    /// Free slot currently offered by the set containing `slot`.
    pub fn available_slot(&mut self, slot: usize) -> ScheduleResult<usize> {
        let root = self.find(slot)?;
        Ok(self.sets[root].available_slot)
    }

    /// Number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Whether the forest has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Whether `slot` is the root of its tree. `None` if out of range.
    pub fn is_root(&self, slot: usize) -> Option<bool> {
        self.sets.get(slot).map(|s| s.parent == slot)
    }

    /// Rank of `slot`. `None` if out of range.
    pub fn rank(&self, slot: usize) -> Option<u32> {
        self.sets.get(slot).map(|s| s.rank)
    }

    /// Raw node for `slot`, without compression.
    pub fn set(&self, slot: usize) -> Option<&SlotSet> {
        self.sets.get(slot)
    }

    /// Number of disjoint sets (roots).
    pub fn set_count(&self) -> usize {
        self.sets
            .iter()
            .enumerate()
            .filter(|(i, s)| s.parent == *i)
            .count()
    }

    /// Resolves the available slot of every slot, in slot order.
    pub fn snapshot(&mut self) -> ForestSnapshot {
        let mut representatives = Vec::with_capacity(self.len());
        for slot in 0..self.len() {
            let root = self.find_in_range(slot);
            representatives.push(self.sets[root].available_slot);
        }
        ForestSnapshot::new(representatives)
    }

    fn check(&self, slot: usize) -> ScheduleResult<()> {
        if slot < self.sets.len() {
            Ok(())
        } else {
            Err(ScheduleError::OutOfRange {
                index: slot,
                size: self.sets.len(),
            })
        }
    }
}
