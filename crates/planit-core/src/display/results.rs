//! Result wrapper types for displaying operation outcomes.
//!
//! This module provides wrapper types that format the results of create,
//! update, and delete operations with consistent messaging.

use std::fmt;

use super::models::escape_markdown;
use crate::models::Task;

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use planit_core::{display::CreateResult, models::{Priority, Task}};
///
/// let task = Task {
///     id: "lq2x7k9a1b2c".to_string(),
///     name: "Buy milk".to_string(),
///     time: Some("08:30".to_string()),
///     priority: Priority::High,
///     completed: false,
///     created_at: 1_700_000_000_000,
///     completed_at: None,
/// };
///
/// let output = CreateResult::new(task).to_string();
/// assert!(output.starts_with("Created task with ID: lq2x7k9a1b2c"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created task with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// The wrapper can list the specific changes made during the update.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl UpdateResult<Task> {
    /// Describe what differs between `before` and the updated task.
    pub fn diff(before: &Task, after: Task) -> Self {
        let mut changes = Vec::new();
        if before.name != after.name {
            changes.push(format!("Renamed to '{}'", escape_markdown(&after.name)));
        }
        if before.time != after.time {
            changes.push(match &after.time {
                Some(time) => format!("Time set to {time}"),
                None => "Time cleared".to_string(),
            });
        }
        if before.priority != after.priority {
            changes.push(format!("Priority changed to {}", after.priority));
        }
        if before.completed != after.completed {
            changes.push(if after.completed {
                "Marked as done".to_string()
            } else {
                "Marked as not done".to_string()
            });
        }
        Self::with_changes(after, changes)
    }
}

impl fmt::Display for UpdateResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated task with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted task '{}' (ID: {})",
            escape_markdown(&self.resource.name),
            self.resource.id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    fn task() -> Task {
        Task {
            id: "t1".to_string(),
            name: "Draft".to_string(),
            time: None,
            priority: Priority::Low,
            completed: false,
            created_at: 1_700_000_000_000,
            completed_at: None,
        }
    }

    #[test]
    fn test_update_diff_lists_changes() {
        let before = task();
        let mut after = task();
        after.name = "Final".to_string();
        after.time = Some("10:00".to_string());
        after.priority = Priority::High;

        let result = UpdateResult::diff(&before, after);
        assert_eq!(
            result.changes,
            [
                "Renamed to 'Final'",
                "Time set to 10:00",
                "Priority changed to high"
            ]
        );
        let output = result.to_string();
        assert!(output.starts_with("Updated task with ID: t1"));
        assert!(output.contains("Changes made:"));
    }

    #[test]
    fn test_update_without_changes() {
        let output = UpdateResult::diff(&task(), task()).to_string();
        assert!(!output.contains("Changes made:"));
    }

    #[test]
    fn test_toggle_diff() {
        let mut after = task();
        after.toggle_completed(5);
        assert_eq!(UpdateResult::diff(&task(), after).changes, ["Marked as done"]);
    }

    #[test]
    fn test_delete_result() {
        let output = DeleteResult::new(task()).to_string();
        assert_eq!(output, "Deleted task 'Draft' (ID: t1)\n");
    }
}
