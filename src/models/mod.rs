//! Scheduling domain models.
//!
//! Provides the input and output types of a unit-time deadline scheduling
//! run: tasks in priority order going in, one slot per task coming out.
//!
//! # Domain Mappings
//!
//! | u-deadline | Manufacturing | Computing | Teaching |
//! |------------|--------------|-----------|----------|
//! | UnitTask | Order | Batch job | Assignment |
//! | Slot | Shift | Time quantum | Lecture |
//! | Schedule | Production Plan | Job Queue | Timetable |

mod schedule;
mod task;

pub use schedule::{Schedule, SlotAssignment};
pub use task::UnitTask;
