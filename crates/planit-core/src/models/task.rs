//! Task model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Priority;

/// A single to-do entry.
///
/// Serialized in camelCase so stored lists stay readable by other tools that
/// share the same key-value layout. `time` is written as `null` when absent,
/// `completedAt` is omitted entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque identifier, unique within the store and never reused
    pub id: String,

    /// Short description of the task (1-200 characters, trimmed)
    pub name: String,

    /// Optional 24-hour `HH:MM` time
    #[serde(default)]
    pub time: Option<String>,

    /// Task priority
    #[serde(default)]
    pub priority: Priority,

    /// Whether the task has been completed
    #[serde(default)]
    pub completed: bool,

    /// Creation time in milliseconds since the Unix epoch
    pub created_at: i64,

    /// Completion time in milliseconds since the Unix epoch, present only
    /// while `completed` is true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
}

impl Task {
    /// The time used for ordering; absent times compare as the empty string.
    pub fn time_key(&self) -> &str {
        self.time.as_deref().unwrap_or("")
    }

    /// Flip the completion flag, keeping `completed_at` in step with it.
    pub fn toggle_completed(&mut self, now_ms: i64) {
        self.completed = !self.completed;
        if self.completed {
            self.completed_at = Some(now_ms);
        } else {
            self.completed_at = None;
        }
    }

    /// Restore the `completed_at` invariant on a record read from storage.
    ///
    /// Returns true when the record had to be changed.
    pub fn normalize_completion(&mut self) -> bool {
        match (self.completed, self.completed_at) {
            (false, Some(_)) => {
                self.completed_at = None;
                true
            }
            (true, None) => {
                self.completed_at = Some(self.created_at);
                true
            }
            _ => false,
        }
    }

    /// Creation time as a timestamp, if it is in the representable range.
    pub fn created_timestamp(&self) -> Option<Timestamp> {
        Timestamp::from_millisecond(self.created_at).ok()
    }

    /// Completion time as a timestamp, if the task is completed.
    pub fn completed_timestamp(&self) -> Option<Timestamp> {
        self.completed_at
            .and_then(|ms| Timestamp::from_millisecond(ms).ok())
    }
}
