//! Reversible clearing of the entry form.

use std::time::Duration;

use crate::{
    models::EntryForm,
    scheduler::{Deferred, Scheduler, TimerHandle},
};

/// How long a cleared form can be restored.
pub const UNDO_WINDOW: Duration = Duration::from_secs(5);

/// Holds the last cleared form while its undo window is open.
#[derive(Debug, Default)]
pub struct UndoSnackbar {
    captured: Option<EntryForm>,
    timer: Option<TimerHandle>,
    deadline_ms: Option<i64>,
}

impl UndoSnackbar {
    pub fn is_visible(&self) -> bool {
        self.captured.is_some()
    }

    /// Whether an undo at `now_ms` would still restore the capture. The
    /// window closes at its deadline even if the expiry timer has not been
    /// fired yet.
    pub fn is_open_at(&self, now_ms: i64) -> bool {
        self.is_visible() && self.deadline_ms.is_some_and(|deadline| now_ms < deadline)
    }

    /// The values an undo would restore.
    pub fn captured(&self) -> Option<&EntryForm> {
        self.captured.as_ref()
    }

    /// Resets `form`. If it held content, captures it, shows the snackbar and
    /// (re)arms the expiry timer. Returns whether the snackbar is shown.
    pub fn clear(
        &mut self,
        form: &mut EntryForm,
        scheduler: &mut Scheduler<Deferred>,
        now_ms: i64,
    ) -> bool {
        if !form.has_content() {
            form.reset();
            return false;
        }

        self.cancel_timer(scheduler);
        self.captured = Some(std::mem::take(form));
        self.timer = Some(scheduler.schedule(now_ms, UNDO_WINDOW, Deferred::UndoExpired));
        let window = i64::try_from(UNDO_WINDOW.as_millis()).unwrap_or(i64::MAX);
        self.deadline_ms = Some(now_ms.saturating_add(window));
        true
    }

    /// Writes the captured values back into `form` and hides the snackbar.
    /// Returns false when there is nothing to restore or the window closed
    /// at or before `now_ms`.
    pub fn undo(
        &mut self,
        form: &mut EntryForm,
        scheduler: &mut Scheduler<Deferred>,
        now_ms: i64,
    ) -> bool {
        if !self.is_open_at(now_ms) {
            self.cancel_timer(scheduler);
            self.expire();
            return false;
        }
        let Some(captured) = self.captured.take() else {
            return false;
        };
        self.cancel_timer(scheduler);
        self.deadline_ms = None;
        *form = captured;
        true
    }

    /// Drops the capture once the undo window has closed.
    pub fn expire(&mut self) {
        self.captured = None;
        self.timer = None;
        self.deadline_ms = None;
    }

    fn cancel_timer(&mut self, scheduler: &mut Scheduler<Deferred>) {
        if let Some(handle) = self.timer.take() {
            scheduler.cancel(handle);
        }
    }
}
