//! Persistence adapter for the task list and theme flag.
//!
//! Storage problems never reach the user. A corrupt task list is logged,
//! erased and replaced by an empty one; failed writes are logged and the
//! in-memory state carries on for the rest of the session.

use std::collections::HashSet;

use log::{debug, error, warn};
use serde_json::Value;

use crate::{
    db::KeyValueStore,
    models::{Task, Theme},
    params::TaskFields,
};

/// Storage key of the JSON-serialized task list.
pub const TASKS_KEY: &str = "planit-tasks-v1";

/// Storage key of the theme flag.
pub const THEME_KEY: &str = "planit-theme";

/// Loads and saves the task list and theme through a [`KeyValueStore`].
pub struct Persistence {
    pub(crate) store: Box<dyn KeyValueStore>,
}

impl Persistence {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Reads the stored task list.
    ///
    /// Returns an empty list when nothing is stored. When the stored value
    /// is not JSON or not an array, it is erased and an empty list returned.
    /// Individual records that cannot be decoded, fail validation, or repeat
    /// an earlier id are dropped; if anything was dropped or repaired the
    /// cleaned list is written back.
    pub fn load_tasks(&mut self) -> Vec<Task> {
        let raw = match self.store.get(TASKS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                error!("Failed to read tasks from storage: {e}");
                return Vec::new();
            }
        };

        let records = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(records)) => records,
            Ok(_) => {
                warn!("Stored tasks are not a list, resetting to an empty list");
                self.discard_tasks();
                return Vec::new();
            }
            Err(e) => {
                warn!("Stored tasks are not valid JSON ({e}), resetting to an empty list");
                self.discard_tasks();
                return Vec::new();
            }
        };

        let (tasks, repaired) = Self::recover_records(records);
        if repaired {
            self.save_tasks(&tasks);
        }
        debug!("Loaded {} tasks", tasks.len());
        tasks
    }

    /// Writes the full task list. Failures are logged, never returned.
    pub fn save_tasks(&mut self, tasks: &[Task]) {
        let serialized = match serde_json::to_string(tasks) {
            Ok(serialized) => serialized,
            Err(e) => {
                error!("Failed to serialize tasks: {e}");
                return;
            }
        };
        if let Err(e) = self.store.set(TASKS_KEY, &serialized) {
            error!("Failed to save tasks: {e}");
        }
    }

    /// Reads the theme flag, defaulting to light.
    pub fn load_theme(&self) -> Theme {
        match self.store.get(THEME_KEY) {
            Ok(value) => Theme::from_stored(value.as_deref()),
            Err(e) => {
                error!("Failed to read theme from storage: {e}");
                Theme::default()
            }
        }
    }

    /// Writes the theme flag. Failures are logged, never returned.
    pub fn save_theme(&mut self, theme: Theme) {
        if let Err(e) = self.store.set(THEME_KEY, theme.as_str()) {
            error!("Failed to save theme: {e}");
        }
    }

    fn discard_tasks(&mut self) {
        if let Err(e) = self.store.remove(TASKS_KEY) {
            error!("Failed to clear corrupted tasks: {e}");
        }
    }

    /// Decode records one by one, keeping only those that hold up.
    fn recover_records(records: Vec<Value>) -> (Vec<Task>, bool) {
        let mut seen = HashSet::new();
        let mut tasks = Vec::with_capacity(records.len());
        let mut repaired = false;

        for (index, record) in records.into_iter().enumerate() {
            let mut task: Task = match serde_json::from_value(record) {
                Ok(task) => task,
                Err(e) => {
                    warn!("Dropping unreadable task record #{index}: {e}");
                    repaired = true;
                    continue;
                }
            };

            if let Err(e) = TaskFields::validate(&task.name, task.time.as_deref(), None) {
                warn!("Dropping invalid task record #{index} ({}): {e}", task.id);
                repaired = true;
                continue;
            }
            if task.id.is_empty() || !seen.insert(task.id.clone()) {
                warn!("Dropping task record #{index} with missing or duplicate id '{}'", task.id);
                repaired = true;
                continue;
            }

            let trimmed = task.name.trim();
            if trimmed.len() != task.name.len() {
                task.name = trimmed.to_string();
                repaired = true;
            }
            repaired |= task.normalize_completion();
            tasks.push(task);
        }

        (tasks, repaired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db::MemoryStore, models::Priority};

    fn sample_task(id: &str) -> Task {
        Task {
            id: id.to_string(),
            name: format!("Task {id}"),
            time: Some("08:30".to_string()),
            priority: Priority::High,
            completed: false,
            created_at: 1_700_000_000_000,
            completed_at: None,
        }
    }

    fn persistence_with(raw: Option<&str>) -> Persistence {
        let mut store = MemoryStore::new();
        if let Some(raw) = raw {
            store.set(TASKS_KEY, raw).unwrap();
        }
        Persistence::new(Box::new(store))
    }

    #[test]
    fn test_load_absent_is_empty() {
        let mut persistence = persistence_with(None);
        assert!(persistence.load_tasks().is_empty());
    }

    #[test]
    fn test_round_trip_preserves_every_field() {
        let mut persistence = persistence_with(None);
        let mut done = sample_task("b");
        done.time = None;
        done.priority = Priority::Low;
        done.toggle_completed(1_700_000_100_000);
        let tasks = vec![sample_task("a"), done];

        persistence.save_tasks(&tasks);
        assert_eq!(persistence.load_tasks(), tasks);
    }

    #[test]
    fn test_saved_json_omits_completed_at_on_incomplete_tasks() {
        let mut persistence = persistence_with(None);
        persistence.save_tasks(&[sample_task("a")]);

        let raw = persistence.store.get(TASKS_KEY).unwrap().unwrap();
        assert!(!raw.contains("completedAt"));
        assert!(raw.contains("\"createdAt\":1700000000000"));
    }

    #[test]
    fn test_corrupt_json_is_cleared() {
        let mut persistence = persistence_with(Some("{not json"));
        assert!(persistence.load_tasks().is_empty());
        assert_eq!(persistence.store.get(TASKS_KEY).unwrap(), None);
    }

    #[test]
    fn test_non_array_is_cleared() {
        let mut persistence = persistence_with(Some(r#"{"id":"a"}"#));
        assert!(persistence.load_tasks().is_empty());
        assert_eq!(persistence.store.get(TASKS_KEY).unwrap(), None);
    }

    #[test]
    fn test_invalid_records_are_dropped_and_written_back() {
        let raw = r#"[
            {"id":"ok","name":"Keep me","time":null,"priority":"low","completed":false,"createdAt":1},
            {"id":"bad-time","name":"Bad","time":"25:00","priority":"low","completed":false,"createdAt":2},
            {"id":"bad-priority","name":"Bad","priority":"urgent","createdAt":3},
            {"id":"empty-name","name":"  ","createdAt":4},
            {"id":"ok","name":"Duplicate","createdAt":5},
            42
        ]"#;
        let mut persistence = persistence_with(Some(raw));

        let tasks = persistence.load_tasks();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, "ok");

        let stored = persistence.store.get(TASKS_KEY).unwrap().unwrap();
        let reparsed: Vec<Task> = serde_json::from_str(&stored).unwrap();
        assert_eq!(reparsed, tasks);
    }

    #[test]
    fn test_completion_invariant_is_repaired_on_load() {
        let raw = r#"[
            {"id":"a","name":"Done without stamp","completed":true,"createdAt":10},
            {"id":"b","name":"Pending with stamp","completed":false,"createdAt":20,"completedAt":30}
        ]"#;
        let mut persistence = persistence_with(Some(raw));

        let tasks = persistence.load_tasks();
        assert_eq!(tasks[0].completed_at, Some(10));
        assert_eq!(tasks[1].completed_at, None);
    }

    #[test]
    fn test_save_failure_is_not_fatal() {
        let mut persistence = Persistence::new(Box::new(MemoryStore::with_quota(16)));
        persistence.save_tasks(&[sample_task("a")]);
        // The write was rejected, nothing was stored
        assert!(persistence.load_tasks().is_empty());
    }

    #[test]
    fn test_theme_defaults_to_light_and_round_trips() {
        let mut persistence = persistence_with(None);
        assert_eq!(persistence.load_theme(), Theme::Light);

        persistence.save_theme(Theme::Dark);
        assert_eq!(persistence.load_theme(), Theme::Dark);
        assert_eq!(
            persistence.store.get(THEME_KEY).unwrap().as_deref(),
            Some("dark")
        );
    }
}
