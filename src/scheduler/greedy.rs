//! Greedy deadline scheduler backed by a slot forest.
//!
//! # Algorithm
//!
//! 1. Build a forest with one singleton set per slot.
//! 2. For each task in priority order, look up the set of its deadline
//!    slot; the set's available slot is the latest free slot at or before
//!    the deadline. Assign it.
//! 3. Retire the slot by merging its set into the set of the preceding
//!    slot. Slot 0 wraps to the last slot, so a task whose deadline cannot
//!    be met falls back to the latest free slot overall.
//! 4. The final task needs no merge: only one set is left.
//!
//! # Complexity
//! O(n · α(n)) for n tasks, with α the inverse Ackermann function.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Problem 16-4
//! (Scheduling variations) and Ch. 21.3

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::diagnostics::ForestSnapshot;
use crate::error::{ScheduleError, ScheduleResult};
use crate::forest::SlotForest;
use crate::models::{Schedule, SlotAssignment};
use crate::validation;

use super::observer::{ForestView, NoopObserver, SnapshotRecorder, StepObserver};

/// Scheduler options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Capture a forest snapshot after every assignment in
    /// [`DeadlineScheduler::schedule_traced`].
    pub record_snapshots: bool,
}

/// Schedule plus the per-step forest snapshots of the run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleTrace {
    pub schedule: Schedule,
    /// One snapshot per assignment, empty unless snapshots were requested.
    pub snapshots: Vec<ForestSnapshot>,
}

/// Greedy unit-time deadline scheduler.
///
/// Every run builds its own forest; a scheduler can be shared across
/// independent runs.
///
/// # Example
///
/// ```
/// use u_deadline::scheduler::DeadlineScheduler;
///
/// let scheduler = DeadlineScheduler::new();
/// let schedule = scheduler.schedule(&[0, 0, 0]).unwrap();
/// // The second task misses slot 0 and wraps to the latest free slot.
/// assert_eq!(schedule.slots(), vec![0, 2, 1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DeadlineScheduler {
    config: SchedulerConfig,
}

impl DeadlineScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Enables or disables per-step snapshots.
    pub fn with_snapshots(mut self, record: bool) -> Self {
        self.config.record_snapshots = record;
        self
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Schedules tasks given by their deadlines, in priority order.
    ///
    /// The slot count equals the number of deadlines. Any deadline outside
    /// `0..deadlines.len()` is rejected before scheduling starts.
    pub fn schedule(&self, deadlines: &[usize]) -> ScheduleResult<Schedule> {
        self.schedule_with_observer(deadlines, &mut NoopObserver)
    }

    /// Like [`schedule`](Self::schedule), calling `observer` after every
    /// assignment.
    pub fn schedule_with_observer<O>(
        &self,
        deadlines: &[usize],
        observer: &mut O,
    ) -> ScheduleResult<Schedule>
    where
        O: StepObserver + ?Sized,
    {
        let size = deadlines.len();
        if let Some(&deadline) = deadlines.iter().find(|&&d| d >= size) {
            return Err(ScheduleError::OutOfRange {
                index: deadline,
                size,
            });
        }

        info!(tasks = size, "scheduling unit-time tasks");

        let mut forest = SlotForest::new(size);
        let mut assigned = vec![false; size];
        let mut schedule = Schedule::new(size);

        for (task, &deadline) in deadlines.iter().enumerate() {
            let slot = forest.available_slot(deadline)?;
            if assigned[slot] {
                error!(task, deadline, slot, "deadline resolved to an occupied slot");
                return Err(ScheduleError::InvariantViolation { task, slot });
            }
            assigned[slot] = true;

            let assignment = SlotAssignment::new(task, deadline, slot);
            debug!(task, deadline, slot, on_time = assignment.is_on_time(), "assigned");
            schedule.add_assignment(assignment);

            if task + 1 < size {
                let previous = if slot == 0 { size - 1 } else { slot - 1 };
                forest.union(slot, previous)?;
                debug!(slot, previous, "retired slot");
            }

            observer.observe(&assignment, &mut ForestView::new(&mut forest));
        }

        info!(
            tasks = size,
            late = schedule.late_assignments().len(),
            "scheduling finished"
        );
        Ok(schedule)
    }

    /// Schedules and, if configured, records a snapshot after each step.
    pub fn schedule_traced(&self, deadlines: &[usize]) -> ScheduleResult<ScheduleTrace> {
        if !self.config.record_snapshots {
            let schedule = self.schedule(deadlines)?;
            return Ok(ScheduleTrace {
                schedule,
                snapshots: Vec::new(),
            });
        }

        let mut recorder = SnapshotRecorder::new();
        let schedule = self.schedule_with_observer(deadlines, &mut recorder)?;
        Ok(ScheduleTrace {
            schedule,
            snapshots: recorder.into_snapshots(),
        })
    }

    /// Validates signed deadlines, then schedules them.
    pub fn schedule_raw(&self, deadlines: &[i64]) -> ScheduleResult<Schedule> {
        let slots = validation::to_slots(deadlines)?;
        self.schedule(&slots)
    }
}
