//! Entry form state for composing new tasks.

use serde::{Deserialize, Serialize};

use super::Priority;
use crate::params::CreateTask;

/// An input of the entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Time,
    Priority,
}

/// Raw, unvalidated values of the new-task form.
///
/// Fields hold exactly what the user typed; validation happens when the form
/// is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryForm {
    pub name: String,
    pub time: String,
    pub priority: String,
}

impl Default for EntryForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            time: String::new(),
            priority: Priority::default().as_str().to_string(),
        }
    }
}

impl EntryForm {
    /// Whether the form differs from its reset state in a way worth undoing.
    pub fn has_content(&self) -> bool {
        !self.name.trim().is_empty()
            || !self.time.is_empty()
            || self.priority != Priority::default().as_str()
    }

    /// Replace the value of one field.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Time => self.time = value,
            FormField::Priority => self.priority = value,
        }
    }

    /// Reset every field to its default value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Build creation parameters from the current field values.
    pub fn to_params(&self) -> CreateTask {
        CreateTask {
            name: self.name.clone(),
            time: Some(self.time.clone()).filter(|t| !t.is_empty()),
            priority: Some(self.priority.clone()),
        }
    }
}
