//! In-memory task collection.
//!
//! [`TaskStore`] is the source of truth between persists. It only mutates
//! data; persisting and re-rendering after each change is the job of the
//! [`Board`](crate::Board).

use uuid::Uuid;

use crate::{
    error::{PlanitError, Result},
    models::{SortKey, Task},
    params::TaskFields,
};

const ID_SUFFIX_LEN: usize = 6;

/// Ordered sequence of tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Appends a new task built from validated fields.
    pub fn create(&mut self, fields: TaskFields, now_ms: i64) -> &Task {
        let id = self.generate_id(now_ms);
        self.tasks.push(Task {
            id,
            name: fields.name,
            time: fields.time,
            priority: fields.priority,
            completed: false,
            created_at: now_ms,
            completed_at: None,
        });
        &self.tasks[self.tasks.len() - 1]
    }

    /// Replaces the name, time and priority of an existing task. Identity,
    /// creation time and completion state are left alone.
    ///
    /// # Errors
    ///
    /// Returns `PlanitError::TaskNotFound` if no task has the given id.
    pub fn update(&mut self, id: &str, fields: TaskFields) -> Result<&Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| PlanitError::task_not_found(id))?;

        task.name = fields.name;
        task.time = fields.time;
        task.priority = fields.priority;
        Ok(task)
    }

    /// Flips completion of the task with the given id. Returns `None`
    /// without changing anything if it does not exist.
    pub fn toggle_complete(&mut self, id: &str, now_ms: i64) -> Option<&Task> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.toggle_completed(now_ms);
        Some(task)
    }

    /// Removes the task with the given id, if present.
    pub fn remove(&mut self, id: &str) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(index))
    }

    pub fn sort(&mut self, key: SortKey) {
        key.apply(&mut self.tasks);
    }

    /// Base-36 creation time followed by a random base-36 suffix, redrawn
    /// until it is not already in use.
    fn generate_id(&self, now_ms: i64) -> String {
        let prefix = to_base36(u128::from(now_ms.max(0).unsigned_abs()));
        loop {
            let random = to_base36(Uuid::new_v4().as_u128());
            let suffix = &random[random.len().saturating_sub(ID_SUFFIX_LEN)..];
            let candidate = format!("{prefix}{suffix}");
            if !self.contains(&candidate) {
                return candidate;
            }
        }
    }
}

fn to_base36(mut value: u128) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}
