//! Read-only views of the forest and text rendering of runs.
//!
//! All rendered numbers are 1-based (slot `i` is printed as time `i + 1`)
//! and right-aligned to the digit count of the slot count.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Schedule, SlotAssignment, UnitTask};

/// Available slot of every slot's set, captured at one point of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForestSnapshot {
    representatives: Vec<usize>,
}

impl ForestSnapshot {
    pub fn new(representatives: Vec<usize>) -> Self {
        Self { representatives }
    }

    /// Available slot per slot, indexed by slot (0-based).
    pub fn representatives(&self) -> &[usize] {
        &self.representatives
    }

    pub fn len(&self) -> usize {
        self.representatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.representatives.is_empty()
    }

    /// Number of distinct available slots still on offer.
    pub fn distinct_sets(&self) -> usize {
        let mut seen = self.representatives.clone();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    }
}

/// Renders the membership table:
///
/// ```text
/// time slot         |1 2 3
/// ------------------|-----
/// repre. of its set |3 2 3
/// ```
impl fmt::Display for ForestSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.len();
        let width = field_width(size);

        write!(f, "time slot         |")?;
        write_row(f, (0..size).map(|slot| slot + 1), width)?;

        write!(f, "------------------|")?;
        for slot in 0..size {
            let dashes = if slot + 1 == size { width } else { width + 1 };
            write!(f, "{}", "-".repeat(dashes))?;
        }
        writeln!(f)?;

        write!(f, "repre. of its set |")?;
        write_row(f, self.representatives.iter().map(|slot| slot + 1), width)
    }
}

/// Lists each task with its deadline: `task 1 has deadline at time 1`.
#[derive(Debug, Clone, Copy)]
pub struct TaskListing<'a> {
    deadlines: &'a [usize],
}

impl<'a> TaskListing<'a> {
    pub fn new(deadlines: &'a [usize]) -> Self {
        Self { deadlines }
    }
}

impl fmt::Display for TaskListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = field_width(self.deadlines.len());
        for task in UnitTask::from_deadlines(self.deadlines) {
            writeln!(
                f,
                "task {:>width$} has deadline at time {:>width$}",
                task.display_number(),
                task.deadline + 1
            )?;
        }
        Ok(())
    }
}

/// Lists each assignment: `task 1 is scheduled in time slot 1`.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleListing<'a> {
    schedule: &'a Schedule,
}

impl<'a> ScheduleListing<'a> {
    pub fn new(schedule: &'a Schedule) -> Self {
        Self { schedule }
    }

    /// Line for a single assignment of this schedule, padded to its size.
    pub fn line<'b>(&self, assignment: &'b SlotAssignment) -> AssignmentLine<'b> {
        AssignmentLine::new(assignment, self.schedule.size)
    }
}

impl fmt::Display for ScheduleListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for a in &self.schedule.assignments {
            writeln!(f, "{}", self.line(a))?;
        }
        Ok(())
    }
}

/// One listing line, without the trailing newline.
#[derive(Debug, Clone, Copy)]
pub struct AssignmentLine<'a> {
    assignment: &'a SlotAssignment,
    width: usize,
}

impl<'a> AssignmentLine<'a> {
    /// `size` is the slot count of the run and sets the field width.
    pub fn new(assignment: &'a SlotAssignment, size: usize) -> Self {
        Self {
            assignment,
            width: field_width(size),
        }
    }
}

impl fmt::Display for AssignmentLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.width;
        write!(
            f,
            "task {:>width$} is scheduled in time slot {:>width$}",
            self.assignment.task + 1,
            self.assignment.slot + 1
        )
    }
}

/// Digits needed to print the largest 1-based index.
pub fn field_width(size: usize) -> usize {
    size.max(1).to_string().len()
}

fn write_row(
    f: &mut fmt::Formatter<'_>,
    values: impl Iterator<Item = usize>,
    width: usize,
) -> fmt::Result {
    for (i, value) in values.enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{value:>width$}")?;
    }
    writeln!(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_width() {
        assert_eq!(field_width(0), 1);
        assert_eq!(field_width(9), 1);
        assert_eq!(field_width(10), 2);
        assert_eq!(field_width(100), 3);
    }

    #[test]
    fn test_snapshot_table_single_digit() {
        let snapshot = ForestSnapshot::new(vec![2, 1, 2]);
        let expected = "\
time slot         |1 2 3
------------------|-----
repre. of its set |3 2 3
";
        assert_eq!(snapshot.to_string(), expected);
    }

    #[test]
    fn test_snapshot_table_two_digits() {
        let snapshot = ForestSnapshot::new((0..10).collect());
        let rendered = snapshot.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "time slot         | 1  2  3  4  5  6  7  8  9 10");
        assert_eq!(lines[1], format!("------------------|{}", "-".repeat(29)));
        assert_eq!(lines[2], "repre. of its set | 1  2  3  4  5  6  7  8  9 10");
    }

    #[test]
    fn test_distinct_sets() {
        let snapshot = ForestSnapshot::new(vec![8, 8, 8, 3, 4, 4, 4, 7, 8, 8]);
        assert_eq!(snapshot.distinct_sets(), 4);
    }

    #[test]
    fn test_task_listing() {
        let listing = TaskListing::new(&[0, 2, 1]);
        assert_eq!(
            listing.to_string(),
            "task 1 has deadline at time 1\n\
             task 2 has deadline at time 3\n\
             task 3 has deadline at time 2\n"
        );
    }

    #[test]
    fn test_schedule_listing_pads_to_width() {
        let mut schedule = Schedule::new(10);
        schedule.add_assignment(SlotAssignment::new(0, 0, 0));
        schedule.add_assignment(SlotAssignment::new(9, 9, 9));
        assert_eq!(
            ScheduleListing::new(&schedule).to_string(),
            "task  1 is scheduled in time slot  1\n\
             task 10 is scheduled in time slot 10\n"
        );
    }

    #[test]
    fn test_assignment_line() {
        let assignment = SlotAssignment::new(6, 3, 2);
        assert_eq!(
            AssignmentLine::new(&assignment, 7).to_string(),
            "task 7 is scheduled in time slot 3"
        );
        assert_eq!(
            AssignmentLine::new(&assignment, 12).to_string(),
            "task  7 is scheduled in time slot  3"
        );
    }

    #[test]
    fn test_listing_line_matches_full_listing() {
        let mut schedule = Schedule::new(3);
        schedule.add_assignment(SlotAssignment::new(0, 0, 0));
        schedule.add_assignment(SlotAssignment::new(1, 0, 2));
        let listing = ScheduleListing::new(&schedule);

        let joined: String = schedule
            .assignments
            .iter()
            .map(|a| format!("{}\n", listing.line(a)))
            .collect();
        assert_eq!(joined, listing.to_string());
    }
}
