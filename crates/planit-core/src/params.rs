//! Parameter structures for task list operations
//!
//! These structures are shared by every interface (one-shot CLI commands, the
//! interactive shell, the edit dialog) without framework-specific derives.
//! Interface layers define their own argument types and convert into these
//! with `From` impls:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │   Validated     │
//! │  (clap derives) │───▶│ (raw strings)   │───▶│   TaskFields    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Validation is the single gate for user input: creation, updates and the
//! edit dialog all go through [`TaskFields::validate`], and records loaded
//! from storage are checked with the same rules.

use std::{str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    error::{PlanitError, Result},
    models::Priority,
};

/// Maximum task name length, in characters.
pub const MAX_NAME_LENGTH: usize = 200;

static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-1][0-9]|2[0-3]):[0-5][0-9]$").expect("time pattern is a valid regex")
});

/// Generic parameters for operations requiring just a task ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the task to operate on
    pub id: String,
}

impl Id {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Parameters for creating a new task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTask {
    /// Name of the task (required)
    pub name: String,
    /// Optional `HH:MM` time; empty is treated as absent
    pub time: Option<String>,
    /// Optional priority ('low', 'medium' or 'high'); defaults to medium
    pub priority: Option<String>,
}

impl CreateTask {
    /// Validate creation parameters.
    ///
    /// # Errors
    ///
    /// * `PlanitError::InvalidInput` - empty or overlong name, malformed time,
    ///   or unknown priority
    pub fn validate(&self) -> Result<TaskFields> {
        TaskFields::validate(&self.name, self.time.as_deref(), self.priority.as_deref())
    }
}

/// Parameters for replacing the editable fields of an existing task.
///
/// Unlike a partial update, every editable field is supplied: an absent time
/// clears the task's time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTask {
    /// Task ID to update (required)
    pub id: String,
    /// New name of the task
    pub name: String,
    /// New `HH:MM` time, or absent to clear it
    pub time: Option<String>,
    /// New priority; defaults to medium
    pub priority: Option<String>,
}

impl UpdateTask {
    /// Validate update parameters with the same rules as creation.
    ///
    /// # Errors
    ///
    /// * `PlanitError::InvalidInput` - empty or overlong name, malformed time,
    ///   or unknown priority
    pub fn validate(&self) -> Result<TaskFields> {
        TaskFields::validate(&self.name, self.time.as_deref(), self.priority.as_deref())
    }
}

/// Parameters for deleting a task.
///
/// Deletion is permanent, so it must be explicitly confirmed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteTask {
    /// ID of the task to delete
    pub id: String,
    /// Whether the user confirmed the deletion
    #[serde(default)]
    pub confirmed: bool,
}

/// The editable fields of a task after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    pub name: String,
    pub time: Option<String>,
    pub priority: Priority,
}

impl TaskFields {
    /// Validate raw field values.
    ///
    /// The name is trimmed before checking. An empty time string is treated
    /// as no time, and an empty priority as the default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planit_core::{models::Priority, params::TaskFields};
    ///
    /// let fields = TaskFields::validate("  Buy milk ", Some("08:30"), Some("HIGH"))?;
    /// assert_eq!(fields.name, "Buy milk");
    /// assert_eq!(fields.priority, Priority::High);
    ///
    /// assert!(TaskFields::validate("", None, None).is_err());
    /// assert!(TaskFields::validate("Nap", Some("24:00"), None).is_err());
    /// # Ok::<(), planit_core::PlanitError>(())
    /// ```
    pub fn validate(name: &str, time: Option<&str>, priority: Option<&str>) -> Result<Self> {
        Ok(Self {
            name: validate_name(name)?,
            time: validate_time(time)?,
            priority: validate_priority(priority)?,
        })
    }
}

/// Trim and check a task name.
pub fn validate_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(PlanitError::invalid_input("name").with_reason("Task name is required"));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(PlanitError::invalid_input("name").with_reason(format!(
            "Task name is too long (maximum {MAX_NAME_LENGTH} characters)"
        )));
    }
    Ok(name.to_string())
}

/// Check an optional `HH:MM` time. Empty input means no time.
pub fn validate_time(time: Option<&str>) -> Result<Option<String>> {
    match time {
        None | Some("") => Ok(None),
        Some(value) if TIME_PATTERN.is_match(value) => Ok(Some(value.to_string())),
        Some(value) => Err(PlanitError::invalid_input("time").with_reason(format!(
            "Invalid time format: {value}. Use 24-hour HH:MM"
        ))),
    }
}

/// Parse an optional priority. Empty input means the default priority.
pub fn validate_priority(priority: Option<&str>) -> Result<Priority> {
    match priority.map(str::trim) {
        None | Some("") => Ok(Priority::default()),
        Some(value) => Priority::from_str(value).map_err(|_| {
            PlanitError::invalid_input("priority").with_reason(format!(
                "Invalid priority: {value}. Must be 'low', 'medium', or 'high'"
            ))
        }),
    }
}
