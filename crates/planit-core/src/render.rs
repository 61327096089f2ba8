//! Render pipeline: task list to view-model.
//!
//! Every pass rebuilds the whole [`ListView`] from the current (already
//! sorted) tasks. There is no diffing; lists are small and a fresh view keeps
//! the renderers free of state.

use std::{fmt, time::Duration};

use crate::models::{ListSummary, Priority, SortKey, Task, Theme};

/// Text shown in place of a missing time.
pub const NO_TIME_PLACEHOLDER: &str = "No time set";

/// Minimum time between two celebrations.
pub const CELEBRATION_COOLDOWN: Duration = Duration::from_secs(2);

/// Receives every render pass.
pub trait Renderer {
    fn render(&mut self, view: &ListView);
}

/// Renderer that discards every pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _view: &ListView) {}
}

/// Color of a priority badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    Red,
    Yellow,
    Green,
}

impl From<Priority> for BadgeStyle {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::High => BadgeStyle::Red,
            Priority::Medium => BadgeStyle::Yellow,
            Priority::Low => BadgeStyle::Green,
        }
    }
}

/// Per-row controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowAction {
    Toggle,
    Edit,
    Delete,
}

/// One displayed task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// 1-based position in the list
    pub position: usize,
    pub id: String,
    pub name: String,
    /// The task time, or [`NO_TIME_PLACEHOLDER`]
    pub time_label: String,
    pub priority: Priority,
    pub badge: BadgeStyle,
    /// Checkbox state
    pub completed: bool,
    /// Completed rows are dimmed and struck through
    pub dimmed: bool,
}

impl RowView {
    fn from_task(position: usize, task: &Task) -> Self {
        Self {
            position,
            id: task.id.clone(),
            name: task.name.clone(),
            time_label: task
                .time
                .clone()
                .unwrap_or_else(|| NO_TIME_PLACEHOLDER.to_string()),
            priority: task.priority,
            badge: task.priority.into(),
            completed: task.completed,
            dimmed: task.completed,
        }
    }
}

/// Encouragement shown under the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motivation {
    /// Incomplete high-priority tasks remain
    HighPriorityRemaining(usize),
    /// Something is still open, none of it high priority
    KeepGoing,
    /// Nothing open (including an empty list)
    AllDone,
}

impl Motivation {
    pub fn for_summary(summary: &ListSummary) -> Self {
        if summary.remaining_high > 0 {
            Motivation::HighPriorityRemaining(summary.remaining_high)
        } else if summary.pending() > 0 {
            Motivation::KeepGoing
        } else {
            Motivation::AllDone
        }
    }
}

impl fmt::Display for Motivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Motivation::HighPriorityRemaining(1) => {
                write!(f, "1 high-priority task remaining. Finish it now!")
            }
            Motivation::HighPriorityRemaining(n) => {
                write!(f, "{n} high-priority tasks remaining. Finish one now!")
            }
            Motivation::KeepGoing => write!(f, "Keep going!"),
            Motivation::AllDone => write!(f, "All tasks done 🎉"),
        }
    }
}

/// The full view-model produced by one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub rows: Vec<RowView>,
    pub summary: ListSummary,
    /// Completion percentage, 0 for an empty list
    pub progress: u8,
    pub motivation: Motivation,
    pub sort_key: SortKey,
    pub theme: Theme,
    /// Set on the pass that fires the completion celebration
    pub celebrate: bool,
}

impl ListView {
    /// Builds the view for `tasks` in their current order.
    pub fn build(tasks: &[Task], sort_key: SortKey, theme: Theme) -> Self {
        let summary = ListSummary::from(tasks);
        Self {
            rows: tasks
                .iter()
                .enumerate()
                .map(|(index, task)| RowView::from_task(index + 1, task))
                .collect(),
            summary,
            progress: summary.percent(),
            motivation: Motivation::for_summary(&summary),
            sort_key,
            theme,
            celebrate: false,
        }
    }

    /// Whether the empty-state placeholder should be shown
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True when the progress indicator reads 100% over at least one task.
    pub fn is_complete(&self) -> bool {
        self.progress == 100 && self.summary.total > 0
    }

    pub fn row(&self, id: &str) -> Option<&RowView> {
        self.rows.iter().find(|r| r.id == id)
    }
}

/// Rate limiter for the completion celebration.
#[derive(Debug, Clone)]
pub struct Celebration {
    cooldown_ms: i64,
    last_fired: Option<i64>,
}

impl Default for Celebration {
    fn default() -> Self {
        Self::new(CELEBRATION_COOLDOWN)
    }
}

impl Celebration {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown_ms: i64::try_from(cooldown.as_millis()).unwrap_or(i64::MAX),
            last_fired: None,
        }
    }

    /// Fires unless the previous firing was less than one cooldown ago.
    pub fn try_fire(&mut self, now_ms: i64) -> bool {
        if let Some(last) = self.last_fired {
            if now_ms.saturating_sub(last) < self.cooldown_ms {
                return false;
            }
        }
        self.last_fired = Some(now_ms);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, priority: Priority, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            name: format!("Task {id}"),
            time: None,
            priority,
            completed,
            created_at: 1,
            completed_at: completed.then_some(2),
        }
    }

    #[test]
    fn test_rows_follow_task_order() {
        let mut timed = task("b", Priority::High, true);
        timed.time = Some("09:15".to_string());
        let tasks = vec![task("a", Priority::Low, false), timed];

        let view = ListView::build(&tasks, SortKey::Time, Theme::Light);

        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].position, 1);
        assert_eq!(view.rows[0].time_label, NO_TIME_PLACEHOLDER);
        assert_eq!(view.rows[0].badge, BadgeStyle::Green);
        assert!(!view.rows[0].dimmed);
        assert_eq!(view.rows[1].time_label, "09:15");
        assert_eq!(view.rows[1].badge, BadgeStyle::Red);
        assert!(view.rows[1].completed && view.rows[1].dimmed);
    }

    #[test]
    fn test_empty_view() {
        let view = ListView::build(&[], SortKey::Time, Theme::Dark);
        assert!(view.is_empty());
        assert_eq!(view.progress, 0);
        assert_eq!(view.motivation, Motivation::AllDone);
        assert!(!view.is_complete());
        assert_eq!(view.theme, Theme::Dark);
    }

    #[test]
    fn test_motivation_priorities() {
        let tasks = vec![
            task("a", Priority::High, false),
            task("b", Priority::High, false),
            task("c", Priority::Low, false),
        ];
        let view = ListView::build(&tasks, SortKey::Time, Theme::Light);
        assert_eq!(view.motivation, Motivation::HighPriorityRemaining(2));

        let tasks = vec![task("a", Priority::High, true), task("b", Priority::Low, false)];
        let view = ListView::build(&tasks, SortKey::Time, Theme::Light);
        assert_eq!(view.motivation, Motivation::KeepGoing);

        let tasks = vec![task("a", Priority::High, true)];
        let view = ListView::build(&tasks, SortKey::Time, Theme::Light);
        assert_eq!(view.motivation, Motivation::AllDone);
        assert!(view.is_complete());
    }

    #[test]
    fn test_motivation_text() {
        assert_eq!(
            Motivation::HighPriorityRemaining(1).to_string(),
            "1 high-priority task remaining. Finish it now!"
        );
        assert_eq!(
            Motivation::HighPriorityRemaining(3).to_string(),
            "3 high-priority tasks remaining. Finish one now!"
        );
        assert_eq!(Motivation::KeepGoing.to_string(), "Keep going!");
    }

    #[test]
    fn test_progress_percent() {
        let tasks = vec![
            task("a", Priority::Low, true),
            task("b", Priority::Low, false),
            task("c", Priority::Low, false),
        ];
        let view = ListView::build(&tasks, SortKey::Time, Theme::Light);
        assert_eq!(view.progress, 33);
        assert!(!view.is_complete());
    }

    #[test]
    fn test_celebration_cooldown() {
        let mut celebration = Celebration::default();
        assert!(celebration.try_fire(1_000));
        assert!(!celebration.try_fire(1_500));
        assert!(!celebration.try_fire(2_999));
        assert!(celebration.try_fire(3_000));
        assert!(!celebration.try_fire(3_001));
    }
}
