//! Schedule quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Late Count | Tasks with slot > deadline (the minimized objective) |
//! | On-Time Rate | Fraction meeting deadlines |
//! | Max Lateness | Largest `slot - deadline`, in slots |
//! | Total Lateness | Sum of `max(0, slot - deadline)` |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::{Deserialize, Serialize};

use crate::models::Schedule;

/// Schedule performance indicators. Lateness is measured in slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    pub task_count: usize,
    pub on_time_count: usize,
    pub late_count: usize,
    /// Fraction of tasks meeting their deadline (0.0..1.0).
    pub on_time_rate: f64,
    pub max_lateness: usize,
    pub total_lateness: usize,
}

impl ScheduleKpi {
    pub fn calculate(schedule: &Schedule) -> Self {
        let task_count = schedule.assignments.len();
        let mut on_time_count = 0;
        let mut max_lateness = 0;
        let mut total_lateness = 0;

        for a in &schedule.assignments {
            if a.is_on_time() {
                on_time_count += 1;
            } else {
                let lateness = a.lateness();
                total_lateness += lateness;
                max_lateness = max_lateness.max(lateness);
            }
        }

        let on_time_rate = if task_count == 0 {
            1.0
        } else {
            on_time_count as f64 / task_count as f64
        };

        Self {
            task_count,
            on_time_count,
            late_count: task_count - on_time_count,
            on_time_rate,
            max_lateness,
            total_lateness,
        }
    }

    /// Whether at most `max_late` tasks miss their deadline.
    pub fn meets_threshold(&self, max_late: usize) -> bool {
        self.late_count <= max_late
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SlotAssignment;

    #[test]
    fn test_kpi_mixed() {
        let mut schedule = Schedule::new(3);
        schedule.add_assignment(SlotAssignment::new(0, 0, 0));
        schedule.add_assignment(SlotAssignment::new(1, 0, 2));
        schedule.add_assignment(SlotAssignment::new(2, 0, 1));

        let kpi = ScheduleKpi::calculate(&schedule);
        assert_eq!(kpi.task_count, 3);
        assert_eq!(kpi.on_time_count, 1);
        assert_eq!(kpi.late_count, 2);
        assert_eq!(kpi.max_lateness, 2);
        assert_eq!(kpi.total_lateness, 3);
        assert!((kpi.on_time_rate - 1.0 / 3.0).abs() < 1e-10);
        assert!(kpi.meets_threshold(2));
        assert!(!kpi.meets_threshold(1));
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate(&Schedule::new(0));
        assert_eq!(kpi.task_count, 0);
        assert_eq!(kpi.late_count, 0);
        assert!((kpi.on_time_rate - 1.0).abs() < 1e-10);
    }
}
