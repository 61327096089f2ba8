//! Data models for tasks and the entry form.
//!
//! This module contains the domain types of the task list. Display
//! implementations live in [`crate::display::models`] so presentation stays
//! separate from the data structures.
//!
//! # Examples
//!
//! ```rust
//! use planit_core::models::{Priority, SortKey, Task};
//!
//! let mut tasks = vec![
//!     Task {
//!         id: "a".to_string(),
//!         name: "Walk dog".to_string(),
//!         time: None,
//!         priority: Priority::Low,
//!         completed: false,
//!         created_at: 1,
//!         completed_at: None,
//!     },
//!     Task {
//!         id: "b".to_string(),
//!         name: "Buy milk".to_string(),
//!         time: Some("08:30".to_string()),
//!         priority: Priority::High,
//!         completed: false,
//!         created_at: 2,
//!         completed_at: None,
//!     },
//! ];
//!
//! SortKey::Priority.apply(&mut tasks);
//! assert_eq!(tasks[0].name, "Buy milk");
//! ```

pub mod form;
pub mod status;
pub mod summary;
pub mod task;

#[cfg(test)]
mod tests;

pub use form::{EntryForm, FormField};
pub use status::{Priority, SortKey, Theme};
pub use summary::ListSummary;
pub use task::Task;
