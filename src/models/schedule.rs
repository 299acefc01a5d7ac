//! Schedule (solution) model.
//!
//! A schedule maps every task to exactly one slot. Assignments are kept in
//! task order, which is also the order in which the scheduler made them.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Problem 16-4

use serde::{Deserialize, Serialize};

use super::UnitTask;

/// A complete single-machine unit-time schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Number of slots (and tasks) in the run.
    pub size: usize,
    /// One assignment per task, in task order.
    pub assignments: Vec<SlotAssignment>,
}

/// A task-to-slot assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAssignment {
    /// 0-based task index.
    pub task: usize,
    /// Deadline slot of the task (denormalized for lateness queries).
    pub deadline: usize,
    /// Assigned slot.
    pub slot: usize,
}

impl SlotAssignment {
    pub fn new(task: usize, deadline: usize, slot: usize) -> Self {
        Self {
            task,
            deadline,
            slot,
        }
    }

    /// Whether the slot meets the deadline.
    #[inline]
    pub fn is_on_time(&self) -> bool {
        self.slot <= self.deadline
    }

    /// Slots past the deadline (0 when on time).
    #[inline]
    pub fn lateness(&self) -> usize {
        self.slot.saturating_sub(self.deadline)
    }

    pub fn unit_task(&self) -> UnitTask {
        UnitTask::new(self.task, self.deadline)
    }
}

impl Schedule {
    /// Creates an empty schedule over `size` slots.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            assignments: Vec::with_capacity(size),
        }
    }

    pub fn add_assignment(&mut self, assignment: SlotAssignment) {
        self.assignments.push(assignment);
    }

    /// Slot of each task, in task order.
    pub fn slots(&self) -> Vec<usize> {
        self.assignments.iter().map(|a| a.slot).collect()
    }

    pub fn slot_for_task(&self, task: usize) -> Option<usize> {
        self.assignments
            .iter()
            .find(|a| a.task == task)
            .map(|a| a.slot)
    }

    pub fn task_in_slot(&self, slot: usize) -> Option<usize> {
        self.assignments
            .iter()
            .find(|a| a.slot == slot)
            .map(|a| a.task)
    }

    /// Assignments that miss their deadline.
    pub fn late_assignments(&self) -> Vec<&SlotAssignment> {
        self.assignments.iter().filter(|a| !a.is_on_time()).collect()
    }

    /// Whether every slot in `0..size` is used exactly once.
    pub fn is_bijection(&self) -> bool {
        if self.assignments.len() != self.size {
            return false;
        }
        let mut used = vec![false; self.size];
        for a in &self.assignments {
            match used.get_mut(a.slot) {
                Some(seen) if !*seen => *seen = true,
                _ => return false,
            }
        }
        true
    }

    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new(3);
        s.add_assignment(SlotAssignment::new(0, 0, 0));
        s.add_assignment(SlotAssignment::new(1, 0, 2));
        s.add_assignment(SlotAssignment::new(2, 2, 1));
        s
    }

    #[test]
    fn test_assignment_lateness() {
        let a = SlotAssignment::new(1, 0, 2);
        assert!(!a.is_on_time());
        assert_eq!(a.lateness(), 2);

        let b = SlotAssignment::new(2, 2, 1);
        assert!(b.is_on_time());
        assert_eq!(b.lateness(), 0);
        assert_eq!(b.unit_task(), UnitTask::new(2, 2));
    }

    #[test]
    fn test_lookup() {
        let s = sample_schedule();
        assert_eq!(s.slots(), vec![0, 2, 1]);
        assert_eq!(s.slot_for_task(1), Some(2));
        assert_eq!(s.task_in_slot(1), Some(2));
        assert_eq!(s.slot_for_task(7), None);
        assert_eq!(s.task_in_slot(7), None);
    }

    #[test]
    fn test_late_assignments() {
        let s = sample_schedule();
        let late = s.late_assignments();
        assert_eq!(late.len(), 1);
        assert_eq!(late[0].task, 1);
    }

    #[test]
    fn test_is_bijection() {
        assert!(sample_schedule().is_bijection());

        let mut dup = Schedule::new(2);
        dup.add_assignment(SlotAssignment::new(0, 1, 1));
        dup.add_assignment(SlotAssignment::new(1, 1, 1));
        assert!(!dup.is_bijection());

        let mut short = Schedule::new(2);
        short.add_assignment(SlotAssignment::new(0, 0, 0));
        assert!(!short.is_bijection());

        assert!(Schedule::new(0).is_bijection());
    }

    #[test]
    fn test_serde_shape() {
        let s = sample_schedule();
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["size"], 3);
        assert_eq!(json["assignments"][1]["slot"], 2);
        let back: Schedule = serde_json::from_value(json).unwrap();
        assert_eq!(back, s);
    }
}
