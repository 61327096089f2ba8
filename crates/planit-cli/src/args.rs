//! Command-line interface definitions using clap
//!
//! CLI argument structures carry clap derives and convert into the core
//! parameter types with `From` impls, so the core stays free of framework
//! attributes:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Board
//! ```

use std::{fmt, path::PathBuf};

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use planit_core::{CreateTask, SortKey, Theme};

/// A small task list for the terminal
///
/// Tasks have a name, an optional time of day and a priority. They are kept
/// sorted, stored in a local SQLite file, and can be edited one-shot from the
/// command line or interactively with `planit shell`.
#[derive(Parser)]
#[command(version, about, name = "planit")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/planit/planit.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without a command, the task list is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the task list
    #[command(aliases = ["l", "ls"])]
    List(ListArgs),
    /// Add a new task
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// Change a task's name, time or priority
    #[command(alias = "e")]
    Edit(EditTaskArgs),
    /// Mark a task as done, or as not done again
    #[command(alias = "t")]
    Toggle(TaskRefArgs),
    /// Delete a task permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteTaskArgs),
    /// Show details of a single task
    #[command(alias = "s")]
    Show(TaskRefArgs),
    /// Show or change the color theme
    Theme(ThemeArgs),
    /// Start an interactive session
    Shell,
}

/// Show the task list
#[derive(ClapArgs, Default)]
pub struct ListArgs {
    /// Order to show tasks in
    #[arg(short, long, help = "Sort order (default: time)")]
    pub sort: Option<SortKeyArg>,
}

/// Add a new task
#[derive(ClapArgs)]
pub struct AddTaskArgs {
    /// Name of the task
    pub name: String,
    /// Time of day in 24-hour HH:MM format
    #[arg(short, long, help = "Time of day in 24-hour HH:MM format")]
    pub time: Option<String>,
    /// Priority of the task
    #[arg(short, long, help = "Priority of the task (default: medium)")]
    pub priority: Option<PriorityArg>,
}

impl From<AddTaskArgs> for CreateTask {
    fn from(val: AddTaskArgs) -> Self {
        CreateTask {
            name: val.name,
            time: val.time,
            priority: val.priority.map(|p| p.to_string()),
        }
    }
}

/// Change a task through the edit dialog
///
/// Fields that are not given keep their current value.
#[derive(ClapArgs)]
pub struct EditTaskArgs {
    /// Task ID or row number in the current list
    #[arg(help = "Task ID or 1-based row number in the list")]
    pub task: String,
    #[arg(short, long, help = "New name for the task")]
    pub name: Option<String>,
    #[arg(
        short,
        long,
        conflicts_with = "clear_time",
        help = "New time of day in 24-hour HH:MM format"
    )]
    pub time: Option<String>,
    #[arg(long, help = "Remove the task's time")]
    pub clear_time: bool,
    #[arg(short, long, help = "New priority for the task")]
    pub priority: Option<PriorityArg>,
}

/// Refer to a single task
#[derive(ClapArgs)]
pub struct TaskRefArgs {
    /// Task ID or row number in the current list
    #[arg(help = "Task ID or 1-based row number in the list")]
    pub task: String,
}

/// Delete a task permanently
#[derive(ClapArgs)]
pub struct DeleteTaskArgs {
    /// Task ID or row number in the current list
    #[arg(help = "Task ID or 1-based row number in the list")]
    pub task: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

/// Show or change the color theme
#[derive(ClapArgs)]
pub struct ThemeArgs {
    /// Theme to switch to; without it the current theme is shown
    pub choice: Option<ThemeArg>,
}

/// Sort orders accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum SortKeyArg {
    /// By time of day, untimed tasks first
    Time,
    /// High priority first
    Priority,
    /// Newest first
    Created,
}

impl From<SortKeyArg> for SortKey {
    fn from(val: SortKeyArg) -> Self {
        match val {
            SortKeyArg::Time => SortKey::Time,
            SortKeyArg::Priority => SortKey::Priority,
            SortKeyArg::Created => SortKey::Created,
        }
    }
}

/// Priorities accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
}

impl fmt::Display for PriorityArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriorityArg::Low => write!(f, "low"),
            PriorityArg::Medium => write!(f, "medium"),
            PriorityArg::High => write!(f, "high"),
        }
    }
}

/// Theme choices accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
    /// Switch to the other theme
    Toggle,
}

impl ThemeArg {
    /// The theme to apply, given the current one.
    pub fn resolve(self, current: Theme) -> Theme {
        match self {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
            ThemeArg::Toggle => current.toggled(),
        }
    }
}
