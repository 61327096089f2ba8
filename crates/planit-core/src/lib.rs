//! Core library for the Planit task list.
//!
//! This crate owns the task list and everything around it: validation,
//! storage with corruption recovery, sorting, the render pipeline, the edit
//! dialog with its focus trap, the undo snackbar and the theme flag. Front
//! ends drive a single [`Board`] and receive [`render::ListView`] snapshots
//! through a [`render::Renderer`].
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): plain data
//! - **View Models** ([`render`]): what a pass shows, without markup
//! - **Display** ([`display`]): markdown formatting of both
//!
//! # Quick Start
//!
//! ```rust
//! use planit_core::{
//!     BoardBuilder,
//!     models::SortKey,
//!     params::{CreateTask, Id},
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut board = BoardBuilder::new()
//!     .with_database_path(Some("planit.db"))
//!     .build()?;
//! board.init();
//!
//! let task = board.add_task(&CreateTask {
//!     name: "Buy milk".to_string(),
//!     time: Some("08:30".to_string()),
//!     priority: Some("high".to_string()),
//! })?;
//! board.toggle_complete(&Id::new(&task.id));
//!
//! let view = board.sort_by(SortKey::Priority);
//! println!("{view}");
//! # Ok(())
//! # }
//! ```

pub mod board;
pub mod clock;
pub mod db;
pub mod display;
pub mod error;
pub mod modal;
pub mod models;
pub mod notify;
pub mod params;
pub mod persistence;
pub mod render;
pub mod scheduler;
pub mod snackbar;
pub mod store;

// Re-export commonly used types
pub use board::{Board, BoardBuilder};
pub use clock::{Clock, ManualClock, SystemClock};
pub use db::{Database, KeyValueStore, MemoryStore};
pub use display::{CreateResult, DeleteResult, LocalDateTime, OperationStatus, UpdateResult};
pub use error::{PlanitError, Result};
pub use modal::{FocusTarget, Key, KeyOutcome, ModalField};
pub use models::{EntryForm, FormField, ListSummary, Priority, SortKey, Task, Theme};
pub use notify::{NoopNotifier, Notifier};
pub use params::{CreateTask, DeleteTask, Id, UpdateTask};
pub use render::{ListView, NullRenderer, Renderer};
pub use scheduler::Deferred;
