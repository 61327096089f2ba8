//! Display implementations for domain models and the list view.
//!
//! All output is markdown for the terminal renderer. User-supplied text is
//! escaped so a task named `**urgent**` shows up literally.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    models::{Priority, SortKey, Task, Theme},
    render::{ListView, RowView, NO_TIME_PLACEHOLDER},
};

/// Backslash-escapes characters that markdown would interpret.
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(
            c,
            '\\' | '`' | '*' | '_' | '{' | '}' | '[' | ']' | '(' | ')' | '#' | '+' | '-' | '.'
                | '!' | '|' | '~' | '>' | '<'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", escape_markdown(&self.name))?;
        writeln!(f)?;

        writeln!(f, "- **ID**: {}", self.id)?;
        writeln!(
            f,
            "- **Time**: {}",
            self.time.as_deref().unwrap_or(NO_TIME_PLACEHOLDER)
        )?;
        writeln!(f, "- **Priority**: {}", self.priority)?;
        writeln!(
            f,
            "- **Status**: {}",
            if self.completed { "✓ Done" } else { "○ Open" }
        )?;
        if let Some(created) = LocalDateTime::from_millis(self.created_at) {
            writeln!(f, "- **Created**: {created}")?;
        }
        if let Some(completed) = self.completed_at.and_then(LocalDateTime::from_millis) {
            writeln!(f, "- **Completed**: {completed}")?;
        }

        Ok(())
    }
}

impl fmt::Display for RowView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = escape_markdown(&self.name);
        if self.completed {
            write!(f, "{}. [x] ~~{name}~~", self.position)?;
        } else {
            write!(f, "{}. [ ] {name}", self.position)?;
        }
        writeln!(
            f,
            " · {} · **{}** (ID: {})",
            self.time_label, self.priority, self.id
        )
    }
}

impl fmt::Display for ListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Tasks (sorted by {})", self.sort_key)?;
        writeln!(f)?;

        if self.is_empty() {
            writeln!(f, "No tasks yet.")?;
        } else {
            for row in &self.rows {
                write!(f, "{row}")?;
            }
        }

        writeln!(f)?;
        writeln!(
            f,
            "Progress: {}% ({}/{} done)",
            self.progress, self.summary.completed, self.summary.total
        )?;
        writeln!(f)?;
        writeln!(f, "> {}", self.motivation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task() -> Task {
        Task {
            id: "abc123".to_string(),
            name: "Buy *milk*".to_string(),
            time: Some("08:30".to_string()),
            priority: Priority::High,
            completed: false,
            created_at: 1_700_000_000_000,
            completed_at: None,
        }
    }

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("plain text"), "plain text");
        assert_eq!(escape_markdown("**bold**"), "\\*\\*bold\\*\\*");
        assert_eq!(escape_markdown("a_b [c](d)"), "a\\_b \\[c\\]\\(d\\)");
    }

    #[test]
    fn test_task_detail() {
        let output = task().to_string();
        assert!(output.starts_with("# Buy \\*milk\\*\n"));
        assert!(output.contains("- **ID**: abc123"));
        assert!(output.contains("- **Time**: 08:30"));
        assert!(output.contains("- **Priority**: high"));
        assert!(output.contains("○ Open"));
        assert!(output.contains("- **Created**: "));
        assert!(!output.contains("Completed"));
    }

    #[test]
    fn test_completed_task_detail() {
        let mut done = task();
        done.time = None;
        done.toggle_completed(1_700_000_060_000);

        let output = done.to_string();
        assert!(output.contains(NO_TIME_PLACEHOLDER));
        assert!(output.contains("✓ Done"));
        assert!(output.contains("- **Completed**: "));
    }

    #[test]
    fn test_list_rows() {
        let mut done = task();
        done.id = "def456".to_string();
        done.name = "Walk dog".to_string();
        done.time = None;
        done.priority = Priority::Low;
        done.completed = true;
        done.completed_at = Some(1);

        let view = ListView::build(&[task(), done], SortKey::Priority, Theme::Light);
        let output = view.to_string();

        assert!(output.starts_with("# Tasks (sorted by priority)"));
        assert!(output.contains("1. [ ] Buy \\*milk\\* · 08:30 · **high** (ID: abc123)"));
        assert!(output.contains("2. [x] ~~Walk dog~~ · No time set · **low** (ID: def456)"));
        assert!(output.contains("Progress: 50% (1/2 done)"));
        assert!(output.contains("> 1 high-priority task remaining. Finish it now!"));
    }

    #[test]
    fn test_empty_list() {
        let view = ListView::build(&[], SortKey::Time, Theme::Light);
        let output = view.to_string();
        assert!(output.contains("No tasks yet."));
        assert!(output.contains("Progress: 0% (0/0 done)"));
        assert!(output.contains("> All tasks done 🎉"));
    }
}
