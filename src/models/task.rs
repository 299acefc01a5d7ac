//! Unit-time task model.
//!
//! A task occupies exactly one time slot and carries a single deadline
//! slot. Tasks are handed to the scheduler already ordered by priority
//! (descending penalty); the position in that order is the task's index.
//!
//! # Time Representation
//! Slot `i` is the half-open interval `[i, i + 1)`. A deadline `d` means the
//! task is on time if it runs in any slot `0..=d`.

use serde::{Deserialize, Serialize};

/// A unit-time task with a deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitTask {
    /// 0-based position in priority order.
    pub index: usize,
    /// Latest slot the task may occupy and still be on time.
    pub deadline: usize,
}

impl UnitTask {
    pub fn new(index: usize, deadline: usize) -> Self {
        Self { index, deadline }
    }

    /// Builds tasks from deadlines given in priority order.
    pub fn from_deadlines(deadlines: &[usize]) -> Vec<Self> {
        deadlines
            .iter()
            .enumerate()
            .map(|(index, &deadline)| Self::new(index, deadline))
            .collect()
    }

    /// 1-based number used when printing.
    #[inline]
    pub fn display_number(&self) -> usize {
        self.index + 1
    }

    /// Whether running in `slot` meets the deadline.
    #[inline]
    pub fn is_on_time_in(&self, slot: usize) -> bool {
        slot <= self.deadline
    }
}
