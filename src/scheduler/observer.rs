//! Per-step observation of a scheduling run.
//!
//! An observer sees each assignment right after the scheduler has retired
//! the assigned slot, together with a [`ForestView`] of the forest. The
//! view only answers queries, so observing a run cannot change its outcome.
//! Queries may still compress paths inside the forest.

use crate::diagnostics::ForestSnapshot;
use crate::error::ScheduleResult;
use crate::forest::SlotForest;
use crate::models::SlotAssignment;

/// Query-only access to the forest of a running schedule.
#[derive(Debug)]
pub struct ForestView<'a> {
    forest: &'a mut SlotForest,
}

impl<'a> ForestView<'a> {
    pub(crate) fn new(forest: &'a mut SlotForest) -> Self {
        Self { forest }
    }

    /// Free slot offered by the set containing `slot`.
    pub fn available_slot(&mut self, slot: usize) -> ScheduleResult<usize> {
        self.forest.available_slot(slot)
    }

    /// Number of disjoint sets left.
    pub fn set_count(&self) -> usize {
        self.forest.set_count()
    }

    /// Rank of `slot`, or `None` when it is out of range.
    pub fn rank(&self, slot: usize) -> Option<u32> {
        self.forest.rank(slot)
    }

    pub fn len(&self) -> usize {
        self.forest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forest.is_empty()
    }

    pub fn snapshot(&mut self) -> ForestSnapshot {
        self.forest.snapshot()
    }
}

/// Callback invoked after every assignment.
pub trait StepObserver {
    fn observe(&mut self, assignment: &SlotAssignment, forest: &mut ForestView<'_>);
}

/// Observer that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    fn observe(&mut self, _: &SlotAssignment, _: &mut ForestView<'_>) {}
}

/// Collects a [`ForestSnapshot`] after every assignment.
#[derive(Debug, Clone, Default)]
pub struct SnapshotRecorder {
    snapshots: Vec<ForestSnapshot>,
}

impl SnapshotRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshots(&self) -> &[ForestSnapshot] {
        &self.snapshots
    }

    pub fn into_snapshots(self) -> Vec<ForestSnapshot> {
        self.snapshots
    }
}

impl StepObserver for SnapshotRecorder {
    fn observe(&mut self, _: &SlotAssignment, forest: &mut ForestView<'_>) {
        self.snapshots.push(forest.snapshot());
    }
}
