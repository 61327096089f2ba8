//! Enumerations for task priority, list ordering and theme.

use std::{cmp::Ordering, str::FromStr};

use serde::{Deserialize, Serialize};

use super::Task;

/// Type-safe enumeration of task priorities.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait
    Low,

    /// Default priority for new tasks
    #[default]
    Medium,

    /// Should be done first
    High,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

impl Priority {
    /// Convert to the stored string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Sort rank: high sorts before medium, medium before low.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

/// Keys the task list can be ordered by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Ascending `HH:MM`, tasks without a time first
    #[default]
    Time,

    /// High, then medium, then low
    Priority,

    /// Most recently created first
    Created,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "time" => Ok(SortKey::Time),
            "priority" => Ok(SortKey::Priority),
            "created" | "createdat" | "created_at" => Ok(SortKey::Created),
            _ => Err(format!("Invalid sort key: {s}")),
        }
    }
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Time => "time",
            SortKey::Priority => "priority",
            SortKey::Created => "created",
        }
    }

    /// Compare two tasks under this key. Equal keys compare equal; no
    /// secondary key is applied.
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        match self {
            SortKey::Time => a.time_key().cmp(b.time_key()),
            SortKey::Priority => a.priority.rank().cmp(&b.priority.rank()),
            SortKey::Created => b.created_at.cmp(&a.created_at),
        }
    }

    /// Sort tasks in place. The sort is stable, so ties keep their relative
    /// order and sorting twice gives the same result as sorting once.
    pub fn apply(&self, tasks: &mut [Task]) {
        tasks.sort_by(|a, b| self.compare(a, b));
    }
}

/// Color theme flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!("Invalid theme: {s}")),
        }
    }
}

impl Theme {
    /// Convert to the stored string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Interpret a stored flag. Anything but `"dark"` means light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }

    /// The opposite theme.
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}
