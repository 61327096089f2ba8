//! High-level task list API.
//!
//! [`Board`] owns every piece of mutable state (the task store, the entry
//! form, the edit dialog, the undo snackbar, the theme and pending timers)
//! and is the only thing front ends talk to. Handlers take `&mut Board`, so
//! there is exactly one writer at a time.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Task Store    │    │   Persistence   │    │ Render Pipeline │
//! │ (task_ops,      │───▶│   (mutation,    │───▶│   (key-value    │───▶│   (ListView,    │
//! │  edit_ops, ...) │    │    sort)        │    │    store)       │    │    Renderer)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Every mutation ends in a commit: re-sort by the active key, save the
//! whole list, rebuild the view and hand it to the renderer.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`Board`] instances
//! - [`task_ops`]: Create, update, toggle, delete and sort
//! - [`edit_ops`]: The edit dialog workflow
//! - [`form_ops`]: Entry form, undo snackbar and theme
//!
//! # Usage
//!
//! ```rust
//! use planit_core::{BoardBuilder, params::CreateTask};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut board = BoardBuilder::new().in_memory().build()?;
//! board.init();
//!
//! let task = board.add_task(&CreateTask {
//!     name: "Buy milk".to_string(),
//!     time: Some("08:30".to_string()),
//!     priority: Some("high".to_string()),
//! })?;
//! assert_eq!(board.view().rows[0].id, task.id);
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use log::{debug, info, warn};

use crate::{
    clock::Clock,
    error::{PlanitError, Result},
    modal::{EditModal, FocusTarget},
    models::{EntryForm, SortKey, Task, Theme},
    notify::Notifier,
    persistence::Persistence,
    render::{Celebration, ListView, Renderer},
    scheduler::{Deferred, Scheduler},
    snackbar::UndoSnackbar,
    store::TaskStore,
};

pub mod builder;
pub mod edit_ops;
pub mod form_ops;
pub mod task_ops;


pub use builder::BoardBuilder;

/// Owner of the task list and everything around it.
pub struct Board {
    persistence: Persistence,
    store: TaskStore,
    sort_key: SortKey,
    theme: Theme,
    form: EntryForm,
    modal: EditModal,
    snackbar: UndoSnackbar,
    scheduler: Scheduler<Deferred>,
    celebration: Celebration,
    focus: Option<FocusTarget>,
    clock: Box<dyn Clock>,
    renderer: Box<dyn Renderer>,
    notifier: Box<dyn Notifier>,
    view: ListView,
    initialized: bool,
}

impl Board {
    pub(crate) fn new(
        persistence: Persistence,
        clock: Box<dyn Clock>,
        renderer: Box<dyn Renderer>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            persistence,
            store: TaskStore::default(),
            sort_key: SortKey::default(),
            theme: Theme::default(),
            form: EntryForm::default(),
            modal: EditModal::default(),
            snackbar: UndoSnackbar::default(),
            scheduler: Scheduler::new(),
            celebration: Celebration::default(),
            focus: None,
            clock,
            renderer,
            notifier,
            view: ListView::build(&[], SortKey::default(), Theme::default()),
            initialized: false,
        }
    }

    /// Loads stored tasks and theme, asks for notification permission and
    /// renders the first view. Only the first call has any effect.
    pub fn init(&mut self) {
        if self.initialized {
            warn!("Board::init called more than once, ignoring");
            return;
        }
        self.initialized = true;

        self.store = TaskStore::new(self.persistence.load_tasks());
        self.theme = self.persistence.load_theme();
        if let Err(e) = self.notifier.request_permission() {
            debug!("Notification permission request failed: {e}");
        }
        self.focus = Some(FocusTarget::EntryName);
        info!("Loaded {} tasks", self.store.len());

        self.store.sort(self.sort_key);
        self.render();
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The view produced by the most recent render pass.
    pub fn view(&self) -> &ListView {
        &self.view
    }

    /// Tasks in display order.
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// The element holding keyboard focus, if any.
    pub fn focus(&self) -> Option<&FocusTarget> {
        self.focus.as_ref()
    }

    /// Moves keyboard focus. Ignored while the edit dialog is open, since
    /// focus cannot leave it.
    pub fn set_focus(&mut self, target: Option<FocusTarget>) {
        if self.modal.is_open() {
            debug!("Focus change ignored while editing");
            return;
        }
        self.focus = target;
    }

    /// Finds a task by exact id, falling back to a 1-based row number of the
    /// current view.
    ///
    /// # Errors
    ///
    /// Returns `PlanitError::TaskNotFound` if neither matches.
    pub fn resolve_task(&self, reference: &str) -> Result<String> {
        let reference = reference.trim();
        if self.store.contains(reference) {
            return Ok(reference.to_string());
        }
        reference
            .parse::<usize>()
            .ok()
            .and_then(|position| position.checked_sub(1))
            .and_then(|index| self.store.tasks().get(index))
            .map(|task| task.id.clone())
            .ok_or_else(|| PlanitError::task_not_found(reference))
    }

    /// Fires every deferred entry that is due and returns what fired.
    pub fn tick(&mut self) -> Vec<Deferred> {
        let due = self.scheduler.take_due(self.clock.now_ms());
        for event in &due {
            match event {
                Deferred::UndoExpired => {
                    debug!("Undo window expired");
                    self.snackbar.expire();
                    if self.focus == Some(FocusTarget::UndoButton) {
                        self.focus = None;
                    }
                }
            }
        }
        due
    }

    /// When the next deferred entry becomes due, in milliseconds since the
    /// Unix epoch.
    pub fn next_deadline(&self) -> Option<i64> {
        self.scheduler.next_deadline()
    }

    /// How long until the next deferred entry is due, zero if it already is.
    pub fn time_until_next_deadline(&self) -> Option<Duration> {
        self.next_deadline().map(|deadline| {
            let remaining = deadline.saturating_sub(self.clock.now_ms()).max(0);
            Duration::from_millis(remaining.unsigned_abs())
        })
    }

    /// Re-sort, persist and render after a mutation.
    fn commit(&mut self) {
        self.store.sort(self.sort_key);
        self.persistence.save_tasks(self.store.tasks());
        self.render();
    }

    fn render(&mut self) {
        let mut view = ListView::build(self.store.tasks(), self.sort_key, self.theme);
        if view.is_complete() {
            view.celebrate = self.celebration.try_fire(self.clock.now_ms());
        }
        self.renderer.render(&view);
        self.view = view;
    }

    /// Whether focus could still land on `target`.
    fn is_focusable(&self, target: &FocusTarget) -> bool {
        match target {
            FocusTarget::Row { id, .. } => self.store.contains(id),
            FocusTarget::UndoButton => self.snackbar.is_open_at(self.clock.now_ms()),
            FocusTarget::Modal(_) => self.modal.is_open(),
            _ => true,
        }
    }
}
