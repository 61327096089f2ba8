//! Edit dialog workflow for the Board.

use log::{debug, warn};

use super::Board;
use crate::{
    error::{PlanitError, Result},
    modal::{EditSession, FocusTarget, Key, KeyOutcome, ModalField},
    models::Task,
    params::Id,
};

impl Board {
    /// Opens the edit dialog for a task and moves focus into it.
    ///
    /// # Errors
    ///
    /// * `PlanitError::NoTasks` - the list is empty
    /// * `PlanitError::TaskNotFound` - no task has the given id
    /// * `PlanitError::EditInProgress` - another edit is already open
    pub fn open_edit(&mut self, params: &Id) -> Result<EditSession> {
        let session = self
            .modal
            .open(&self.store, &params.id, self.focus.clone())?
            .clone();
        self.focus = Some(FocusTarget::Modal(session.focus()));
        debug!("Editing task {}", session.task_id);
        Ok(session)
    }

    pub fn is_editing(&self) -> bool {
        self.modal.is_open()
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.modal.session()
    }

    /// Types a new value into one of the dialog's inputs.
    ///
    /// # Errors
    ///
    /// * `PlanitError::NoActiveEdit` - the dialog is closed
    /// * `PlanitError::InvalidInput` - `field` is a button
    pub fn set_edit_field(&mut self, field: ModalField, value: impl Into<String>) -> Result<()> {
        self.modal.set_field(field, value)?;
        self.focus = Some(FocusTarget::Modal(field));
        Ok(())
    }

    /// Delivers a key press to the dialog.
    ///
    /// Tab and Shift+Tab move focus within the dialog, Enter submits (or
    /// cancels when the cancel button is focused) and Escape cancels. Keys
    /// are ignored while the dialog is closed.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Board::submit_edit`].
    pub fn handle_key(&mut self, key: Key) -> Result<KeyOutcome> {
        let outcome = self.modal.handle_key(key);
        match outcome {
            KeyOutcome::FocusMoved(field) => self.focus = Some(FocusTarget::Modal(field)),
            KeyOutcome::Submit => {
                self.submit_edit()?;
            }
            KeyOutcome::Cancel => self.cancel_edit(),
            KeyOutcome::Ignored => {}
        }
        Ok(outcome)
    }

    /// Validates the dialog and applies the edit.
    ///
    /// On a validation error the dialog stays open. If the task was removed
    /// while the dialog was open, the dialog closes.
    ///
    /// # Errors
    ///
    /// * `PlanitError::NoActiveEdit` - the dialog is closed
    /// * `PlanitError::InvalidInput` - a field fails validation
    /// * `PlanitError::TaskNotFound` - the task no longer exists
    pub fn submit_edit(&mut self) -> Result<Task> {
        let (id, fields) = self.modal.validate()?;
        if !self.store.contains(&id) {
            warn!("Task {id} disappeared during edit");
            self.close_edit();
            return Err(PlanitError::task_not_found(id));
        }

        let task = self.store.update(&id, fields)?.clone();
        debug!("Saved edit of task {id}");
        self.commit();
        self.close_edit();
        Ok(task)
    }

    /// Closes the dialog, discarding its fields. Does nothing when closed.
    pub fn cancel_edit(&mut self) {
        if self.modal.is_open() {
            self.close_edit();
        }
    }

    fn close_edit(&mut self) {
        let recorded = self.modal.close();
        self.focus = recorded.filter(|target| self.is_focusable(target));
    }
}
