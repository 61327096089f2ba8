//! Task operations for the Board.

use log::debug;

use super::Board;
use crate::{
    error::{PlanitError, Result},
    modal::FocusTarget,
    models::{SortKey, Task},
    params::{CreateTask, DeleteTask, Id, UpdateTask},
    render::ListView,
};

impl Board {
    /// Creates a new task and appends it to the list.
    ///
    /// # Errors
    ///
    /// * `PlanitError::InvalidInput` - empty or overlong name, malformed time,
    ///   or unknown priority; the list is left unchanged
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use planit_core::{BoardBuilder, params::CreateTask};
    /// let mut board = BoardBuilder::new().in_memory().build()?;
    /// board.init();
    ///
    /// let params = CreateTask { name: "Walk dog".to_string(), ..Default::default() };
    /// let task = board.add_task(&params)?;
    /// assert!(!task.completed);
    /// assert!(board.add_task(&CreateTask::default()).is_err());
    /// # Ok::<(), planit_core::PlanitError>(())
    /// ```
    pub fn add_task(&mut self, params: &CreateTask) -> Result<Task> {
        let fields = params.validate()?;
        let task = self.store.create(fields, self.clock.now_ms()).clone();
        debug!("Created task {}", task.id);
        self.commit();
        Ok(task)
    }

    /// Replaces the name, time and priority of a task.
    ///
    /// # Errors
    ///
    /// * `PlanitError::InvalidInput` - a field fails validation
    /// * `PlanitError::TaskNotFound` - no task has the given id
    pub fn update_task(&mut self, params: &UpdateTask) -> Result<Task> {
        let fields = params.validate()?;
        let task = self.store.update(&params.id, fields)?.clone();
        debug!("Updated task {}", task.id);
        self.commit();
        Ok(task)
    }

    /// Flips the completion state of a task.
    ///
    /// Returns the updated task, or `None` without touching anything if the
    /// id is unknown.
    pub fn toggle_complete(&mut self, params: &Id) -> Option<Task> {
        let task = self
            .store
            .toggle_complete(&params.id, self.clock.now_ms())?
            .clone();
        debug!("Task {} completed: {}", task.id, task.completed);
        self.commit();
        Some(task)
    }

    /// Deletes a task after confirmation.
    ///
    /// Returns the removed task, or `None` if the id was unknown. The list is
    /// persisted and rendered either way.
    ///
    /// # Errors
    ///
    /// * `PlanitError::InvalidInput` - the deletion was not confirmed
    pub fn delete_task(&mut self, params: &DeleteTask) -> Result<Option<Task>> {
        if !params.confirmed {
            return Err(PlanitError::invalid_input("confirmed")
                .with_reason("Deleting a task must be confirmed"));
        }

        let removed = self.store.remove(&params.id);
        if removed.is_some() {
            debug!("Deleted task {}", params.id);
            if matches!(&self.focus, Some(FocusTarget::Row { id, .. }) if *id == params.id) {
                self.focus = None;
            }
        }
        self.commit();
        Ok(removed)
    }

    /// Re-orders the list by `key` and keeps that order for later changes.
    pub fn sort_by(&mut self, key: SortKey) -> &ListView {
        self.sort_key = key;
        self.store.sort(key);
        self.render();
        &self.view
    }

    /// Looks up a task by id.
    pub fn get_task(&self, params: &Id) -> Option<&Task> {
        self.store.get(&params.id)
    }
}
