//! Unit-time deadline scheduling on a single machine.
//!
//! Given tasks that each take one time slot, listed in priority order
//! (descending penalty), assigns every task to the latest free slot at or
//! before its deadline. Lookups go through a disjoint-set forest whose sets
//! each remember the one free slot they stand for, so a whole run costs
//! near-linear time.
//!
//! # Modules
//!
//! - **`forest`**: `SlotForest`, the union-find slot allocator
//! - **`scheduler`**: `DeadlineScheduler`, step observers, `ScheduleKpi`
//! - **`models`**: `UnitTask`, `SlotAssignment`, `Schedule`
//! - **`diagnostics`**: forest snapshots and text rendering
//! - **`validation`**: boundary checks on raw deadline input
//! - **`generate`**: default and random deadline sequences
//! - **`config`**: TOML run configuration
//!
//! # Example
//!
//! ```
//! use u_deadline::scheduler::{DeadlineScheduler, ScheduleKpi};
//!
//! let schedule = DeadlineScheduler::new()
//!     .schedule(&[0, 6, 1, 9, 2, 5, 3, 3, 6, 0])
//!     .unwrap();
//! assert_eq!(schedule.slots(), vec![0, 6, 1, 9, 2, 5, 3, 8, 4, 7]);
//! assert_eq!(ScheduleKpi::calculate(&schedule).late_count, 2);
//! ```
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 21 and Problem 16-4
//! - Horowitz & Sahni (1978), "Fundamentals of Computer Algorithms", Ch. 4

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod forest;
pub mod generate;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{ScheduleError, ScheduleResult};
