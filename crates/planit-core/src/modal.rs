//! Edit dialog state machine with keyboard focus containment.
//!
//! The dialog is either [`EditModal::Closed`] or [`EditModal::Open`] with a
//! single [`EditSession`]. While open, Tab and Shift+Tab cycle through the
//! dialog's own controls and never reach the rest of the screen.

use crate::{
    error::{PlanitError, Result},
    params::TaskFields,
    render::RowAction,
    store::TaskStore,
};

/// Focusable elements of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusTarget {
    EntryName,
    EntryTime,
    EntryPriority,
    AddButton,
    ClearButton,
    SortSelect,
    ThemeToggle,
    UndoButton,
    /// A control on a task row
    Row { id: String, action: RowAction },
    /// A control inside the edit dialog
    Modal(ModalField),
}

/// Focusable controls of the edit dialog, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalField {
    Name,
    Time,
    Priority,
    Save,
    Cancel,
}

impl ModalField {
    pub const TAB_ORDER: [ModalField; 5] = [
        ModalField::Name,
        ModalField::Time,
        ModalField::Priority,
        ModalField::Save,
        ModalField::Cancel,
    ];

    fn index(self) -> usize {
        Self::TAB_ORDER
            .iter()
            .position(|f| *f == self)
            .unwrap_or_default()
    }

    /// The next control, wrapping from the last to the first.
    pub fn next(self) -> Self {
        Self::TAB_ORDER[(self.index() + 1) % Self::TAB_ORDER.len()]
    }

    /// The previous control, wrapping from the first to the last.
    pub fn previous(self) -> Self {
        let len = Self::TAB_ORDER.len();
        Self::TAB_ORDER[(self.index() + len - 1) % len]
    }
}

/// Keys the dialog reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab,
    /// Shift+Tab
    BackTab,
    Escape,
    Enter,
    Other,
}

/// What a key press did to the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The dialog is closed or does not handle this key
    Ignored,
    /// Focus moved to the given control
    FocusMoved(ModalField),
    /// The user asked to save
    Submit,
    /// The user asked to discard the edit
    Cancel,
}

/// Raw values of the dialog's input fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditFields {
    pub name: String,
    pub time: String,
    pub priority: String,
}

/// An edit in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub task_id: String,
    pub fields: EditFields,
    focus: ModalField,
    return_focus: Option<FocusTarget>,
}

impl EditSession {
    /// The focused control inside the dialog
    pub fn focus(&self) -> ModalField {
        self.focus
    }

    /// Where focus goes back to when the dialog closes
    pub fn return_focus(&self) -> Option<&FocusTarget> {
        self.return_focus.as_ref()
    }
}

/// The edit dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditModal {
    #[default]
    Closed,
    Open(EditSession),
}

impl EditModal {
    pub fn is_open(&self) -> bool {
        matches!(self, EditModal::Open(_))
    }

    pub fn session(&self) -> Option<&EditSession> {
        match self {
            EditModal::Open(session) => Some(session),
            EditModal::Closed => None,
        }
    }

    /// Opens the dialog for the task with the given id.
    ///
    /// Records `current_focus` so it can be restored on close, fills the
    /// fields from the task and focuses the name field.
    ///
    /// # Errors
    ///
    /// * `PlanitError::EditInProgress` - the dialog is already open
    /// * `PlanitError::NoTasks` - the store is empty
    /// * `PlanitError::TaskNotFound` - no task has the given id
    pub fn open(
        &mut self,
        store: &TaskStore,
        id: &str,
        current_focus: Option<FocusTarget>,
    ) -> Result<&EditSession> {
        if let EditModal::Open(session) = self {
            return Err(PlanitError::EditInProgress {
                id: session.task_id.clone(),
            });
        }
        if store.is_empty() {
            return Err(PlanitError::NoTasks);
        }
        let task = store.get(id).ok_or_else(|| PlanitError::task_not_found(id))?;

        *self = EditModal::Open(EditSession {
            task_id: task.id.clone(),
            fields: EditFields {
                name: task.name.clone(),
                time: task.time.clone().unwrap_or_default(),
                priority: task.priority.as_str().to_string(),
            },
            focus: ModalField::Name,
            return_focus: current_focus,
        });

        match self {
            EditModal::Open(session) => Ok(session),
            EditModal::Closed => Err(PlanitError::NoActiveEdit),
        }
    }

    /// Replaces the value of one input field.
    ///
    /// # Errors
    ///
    /// * `PlanitError::NoActiveEdit` - the dialog is closed
    /// * `PlanitError::InvalidInput` - `field` is a button, not an input
    pub fn set_field(&mut self, field: ModalField, value: impl Into<String>) -> Result<()> {
        let EditModal::Open(session) = self else {
            return Err(PlanitError::NoActiveEdit);
        };
        let value = value.into();
        match field {
            ModalField::Name => session.fields.name = value,
            ModalField::Time => session.fields.time = value,
            ModalField::Priority => session.fields.priority = value,
            ModalField::Save | ModalField::Cancel => {
                return Err(PlanitError::invalid_input("field")
                    .with_reason("Only name, time and priority can be edited"));
            }
        }
        session.focus = field;
        Ok(())
    }

    /// Routes a key press through the focus trap.
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        let EditModal::Open(session) = self else {
            return KeyOutcome::Ignored;
        };
        match key {
            Key::Tab => {
                session.focus = session.focus.next();
                KeyOutcome::FocusMoved(session.focus)
            }
            Key::BackTab => {
                session.focus = session.focus.previous();
                KeyOutcome::FocusMoved(session.focus)
            }
            Key::Escape => KeyOutcome::Cancel,
            Key::Enter if session.focus == ModalField::Cancel => KeyOutcome::Cancel,
            Key::Enter => KeyOutcome::Submit,
            Key::Other => KeyOutcome::Ignored,
        }
    }

    /// Validates the dialog's fields with the same rules as task creation.
    ///
    /// # Errors
    ///
    /// * `PlanitError::NoActiveEdit` - the dialog is closed
    /// * `PlanitError::InvalidInput` - a field fails validation
    pub fn validate(&self) -> Result<(String, TaskFields)> {
        let session = self.session().ok_or(PlanitError::NoActiveEdit)?;
        let fields = TaskFields::validate(
            &session.fields.name,
            Some(session.fields.time.as_str()),
            Some(session.fields.priority.as_str()),
        )?;
        Ok((session.task_id.clone(), fields))
    }

    /// Closes the dialog, discarding any edits. Returns the focus recorded
    /// when it was opened.
    pub fn close(&mut self) -> Option<FocusTarget> {
        match std::mem::take(self) {
            EditModal::Open(session) => session.return_focus,
            EditModal::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    fn store_with_task() -> (TaskStore, String) {
        let mut store = TaskStore::default();
        let id = store
            .create(
                TaskFields {
                    name: "Buy milk".to_string(),
                    time: Some("08:30".to_string()),
                    priority: Priority::High,
                },
                1,
            )
            .id
            .clone();
        (store, id)
    }

    #[test]
    fn test_open_on_empty_store_fails_and_stays_closed() {
        let mut modal = EditModal::default();
        let err = modal.open(&TaskStore::default(), "x", None).unwrap_err();
        assert!(matches!(err, PlanitError::NoTasks));
        assert!(!modal.is_open());
    }

    #[test]
    fn test_open_unknown_task_fails() {
        let (store, _) = store_with_task();
        let mut modal = EditModal::default();
        let err = modal.open(&store, "missing", None).unwrap_err();
        assert!(matches!(err, PlanitError::TaskNotFound { .. }));
        assert!(!modal.is_open());
    }

    #[test]
    fn test_open_populates_fields_and_focuses_name() {
        let (store, id) = store_with_task();
        let mut modal = EditModal::default();

        let session = modal.open(&store, &id, Some(FocusTarget::SortSelect)).unwrap();
        assert_eq!(session.fields.name, "Buy milk");
        assert_eq!(session.fields.time, "08:30");
        assert_eq!(session.fields.priority, "high");
        assert_eq!(session.focus(), ModalField::Name);
        assert_eq!(session.return_focus(), Some(&FocusTarget::SortSelect));
    }

    #[test]
    fn test_second_open_is_rejected() {
        let (store, id) = store_with_task();
        let mut modal = EditModal::default();
        modal.open(&store, &id, None).unwrap();

        let err = modal.open(&store, &id, None).unwrap_err();
        assert!(matches!(err, PlanitError::EditInProgress { .. }));
    }

    #[test]
    fn test_tab_cycles_and_wraps() {
        let (store, id) = store_with_task();
        let mut modal = EditModal::default();
        modal.open(&store, &id, None).unwrap();

        let mut visited = Vec::new();
        for _ in 0..5 {
            match modal.handle_key(Key::Tab) {
                KeyOutcome::FocusMoved(field) => visited.push(field),
                other => panic!("unexpected outcome {other:?}"),
            }
        }
        assert_eq!(
            visited,
            [
                ModalField::Time,
                ModalField::Priority,
                ModalField::Save,
                ModalField::Cancel,
                ModalField::Name,
            ]
        );

        assert_eq!(modal.handle_key(Key::BackTab), KeyOutcome::FocusMoved(ModalField::Cancel));
        assert_eq!(modal.handle_key(Key::BackTab), KeyOutcome::FocusMoved(ModalField::Save));
    }

    #[test]
    fn test_keys_are_ignored_when_closed() {
        let mut modal = EditModal::default();
        assert_eq!(modal.handle_key(Key::Tab), KeyOutcome::Ignored);
        assert_eq!(modal.handle_key(Key::Escape), KeyOutcome::Ignored);
    }

    #[test]
    fn test_enter_and_escape() {
        let (store, id) = store_with_task();
        let mut modal = EditModal::default();
        modal.open(&store, &id, None).unwrap();

        assert_eq!(modal.handle_key(Key::Enter), KeyOutcome::Submit);
        assert_eq!(modal.handle_key(Key::Escape), KeyOutcome::Cancel);
        modal.handle_key(Key::BackTab);
        assert_eq!(modal.handle_key(Key::Enter), KeyOutcome::Cancel);
        assert_eq!(modal.handle_key(Key::Other), KeyOutcome::Ignored);
    }

    #[test]
    fn test_validate_reports_field_errors() {
        let (store, id) = store_with_task();
        let mut modal = EditModal::default();
        modal.open(&store, &id, None).unwrap();

        modal.set_field(ModalField::Time, "7pm").unwrap();
        let err = modal.validate().unwrap_err();
        assert!(matches!(err, PlanitError::InvalidInput { ref field, .. } if field == "time"));
        assert!(modal.is_open());

        modal.set_field(ModalField::Time, "").unwrap();
        let (task_id, fields) = modal.validate().unwrap();
        assert_eq!(task_id, id);
        assert_eq!(fields.time, None);
    }

    #[test]
    fn test_set_field_rejects_buttons_and_closed_dialog() {
        let mut modal = EditModal::default();
        assert!(matches!(
            modal.set_field(ModalField::Name, "x"),
            Err(PlanitError::NoActiveEdit)
        ));

        let (store, id) = store_with_task();
        modal.open(&store, &id, None).unwrap();
        assert!(modal.set_field(ModalField::Save, "x").is_err());
    }

    #[test]
    fn test_close_returns_recorded_focus() {
        let (store, id) = store_with_task();
        let mut modal = EditModal::default();
        let row = FocusTarget::Row {
            id: id.clone(),
            action: RowAction::Edit,
        };
        modal.open(&store, &id, Some(row.clone())).unwrap();

        assert_eq!(modal.close(), Some(row));
        assert!(!modal.is_open());
        assert_eq!(modal.close(), None);
    }
}
