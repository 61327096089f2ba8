//! Entry form, undo snackbar and theme operations for the Board.

use super::Board;
use crate::{
    error::Result,
    modal::FocusTarget,
    models::{EntryForm, FormField, Task, Theme},
};

impl Board {
    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    /// Types a new value into one of the entry form's inputs.
    pub fn set_form_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
        self.focus = Some(match field {
            FormField::Name => FocusTarget::EntryName,
            FormField::Time => FocusTarget::EntryTime,
            FormField::Priority => FocusTarget::EntryPriority,
        });
    }

    /// Creates a task from the entry form. On success the form is reset and
    /// the name field focused; on failure the form keeps its values.
    ///
    /// # Errors
    ///
    /// * `PlanitError::InvalidInput` - a field fails validation
    pub fn add_from_form(&mut self) -> Result<Task> {
        let params = self.form.to_params();
        let task = self.add_task(&params)?;
        self.form.reset();
        self.focus = Some(FocusTarget::EntryName);
        Ok(task)
    }

    /// Resets the entry form. When it held content, the old values can be
    /// restored with [`Board::undo_clear`] for a few seconds. Returns whether
    /// the undo snackbar is shown.
    pub fn clear_form(&mut self) -> bool {
        self.tick();
        let now = self.clock.now_ms();
        let shown = self.snackbar.clear(&mut self.form, &mut self.scheduler, now);
        self.focus = Some(FocusTarget::EntryName);
        shown
    }

    /// Whether a cleared form can still be restored.
    pub fn can_undo(&self) -> bool {
        self.snackbar.is_open_at(self.clock.now_ms())
    }

    /// Restores the last cleared form. Returns false once the undo window
    /// has closed.
    pub fn undo_clear(&mut self) -> bool {
        self.tick();
        let now = self.clock.now_ms();
        let restored = self.snackbar.undo(&mut self.form, &mut self.scheduler, now);
        if restored {
            self.focus = Some(FocusTarget::EntryName);
        }
        restored
    }

    /// Flips between light and dark and stores the choice.
    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.theme.toggled());
        self.theme
    }

    /// Switches to `theme` and stores the choice.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.persistence.save_theme(theme);
        self.render();
    }
}
