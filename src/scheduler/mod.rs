//! Greedy deadline scheduler and KPI evaluation.
//!
//! # Algorithm
//!
//! `DeadlineScheduler` places each unit-time task, in priority order, in
//! the latest free slot at or before its deadline, falling back to the
//! latest free slot overall. For tasks pre-sorted by descending penalty this
//! minimizes the total penalty of late tasks on a single machine.
//!
//! # KPI
//!
//! `ScheduleKpi` counts on-time and late tasks and their lateness.
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Problem 16-4
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

mod greedy;
mod kpi;
mod observer;

pub use greedy::{DeadlineScheduler, ScheduleTrace, SchedulerConfig};
pub use kpi::ScheduleKpi;
pub use observer::{ForestView, NoopObserver, SnapshotRecorder, StepObserver};
