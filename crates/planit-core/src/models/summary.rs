//! Completion statistics over a task list.

use serde::{Deserialize, Serialize};

use super::{Priority, Task};

/// Counts derived from the task list after every change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSummary {
    /// Total number of tasks
    pub total: usize,
    /// Number of completed tasks
    pub completed: usize,
    /// Number of incomplete high-priority tasks
    pub remaining_high: usize,
}

impl ListSummary {
    /// Completion percentage, rounded to the nearest integer. Zero for an
    /// empty list.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed as f64 / self.total as f64) * 100.0).round() as u8
    }

    /// Number of tasks not yet completed
    pub fn pending(&self) -> usize {
        self.total - self.completed
    }

    /// True when there is at least one task and all of them are done.
    pub fn is_all_done(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

impl From<&[Task]> for ListSummary {
    fn from(tasks: &[Task]) -> Self {
        tasks.iter().fold(Self::default(), |mut acc, task| {
            acc.total += 1;
            if task.completed {
                acc.completed += 1;
            } else if task.priority == Priority::High {
                acc.remaining_high += 1;
            }
            acc
        })
    }
}
