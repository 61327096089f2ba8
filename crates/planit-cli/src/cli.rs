//! One-shot command handlers.
//!
//! Each handler performs one operation on the board and prints the outcome
//! through the [`TerminalRenderer`]. Failures are returned to `main`, which
//! prints them as an error status line.

use anyhow::Result;
use log::debug;
use planit_core::{
    Board, CreateResult, CreateTask, DeleteResult, DeleteTask, Id, ModalField, OperationStatus,
    PlanitError, SortKey, Task, UpdateResult,
};

use crate::{
    args::{Commands, DeleteTaskArgs, EditTaskArgs, ListArgs, TaskRefArgs, ThemeArgs},
    renderer::{TerminalRenderer, CELEBRATION},
};

/// Runs one-shot commands against an initialized board.
pub struct Cli {
    board: Board,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(board: Board, mut renderer: TerminalRenderer) -> Self {
        renderer.set_theme(board.theme());
        Self { board, renderer }
    }

    /// Dispatch a subcommand. The interactive shell is started by `main`.
    pub fn handle_command(&mut self, command: Commands) -> Result<()> {
        match command {
            Commands::List(args) => self.list(args),
            Commands::Add(args) => self.add(args.into()),
            Commands::Edit(args) => self.edit(args),
            Commands::Toggle(args) => self.toggle(args),
            Commands::Delete(args) => self.delete(args),
            Commands::Show(args) => self.show(args),
            Commands::Theme(args) => self.theme(args),
            Commands::Shell => {
                anyhow::bail!("The shell cannot be started from a one-shot command")
            }
        }
    }

    /// Prints the list. The init pass was never shown, so a celebration it
    /// fired belongs to this listing.
    pub fn list(&mut self, args: ListArgs) -> Result<()> {
        let key = args.sort.map(SortKey::from).unwrap_or_default();
        let celebrated = self.board.view().celebrate;
        let mut view = self.board.sort_by(key).clone();
        view.celebrate |= celebrated;
        self.renderer.render_view(&view)
    }

    pub fn add(&mut self, params: CreateTask) -> Result<()> {
        let task = self.board.add_task(&params)?;
        self.renderer.render(&CreateResult::new(task).to_string())
    }

    /// Runs the edit dialog non-interactively: open, fill in the given
    /// fields and submit.
    pub fn edit(&mut self, args: EditTaskArgs) -> Result<()> {
        let id = Id::new(self.board.resolve_task(&args.task)?);
        let before = self
            .board
            .get_task(&id)
            .cloned()
            .ok_or_else(|| PlanitError::task_not_found(&id.id))?;

        let mut fields = Vec::new();
        if let Some(name) = args.name {
            fields.push((ModalField::Name, name));
        }
        if let Some(time) = args.time {
            fields.push((ModalField::Time, time));
        } else if args.clear_time {
            fields.push((ModalField::Time, String::new()));
        }
        if let Some(priority) = args.priority {
            fields.push((ModalField::Priority, priority.to_string()));
        }

        self.board.open_edit(&id)?;
        let task = match self.fill_and_submit(fields) {
            Ok(task) => task,
            Err(e) => {
                self.board.cancel_edit();
                return Err(e.into());
            }
        };

        self.renderer
            .render(&UpdateResult::diff(&before, task).to_string())
    }

    fn fill_and_submit(&mut self, fields: Vec<(ModalField, String)>) -> planit_core::Result<Task> {
        for (field, value) in fields {
            self.board.set_edit_field(field, value)?;
        }
        self.board.submit_edit()
    }

    pub fn toggle(&mut self, args: TaskRefArgs) -> Result<()> {
        let id = Id::new(self.board.resolve_task(&args.task)?);
        let before = self
            .board
            .get_task(&id)
            .cloned()
            .ok_or_else(|| PlanitError::task_not_found(&id.id))?;
        let task = self
            .board
            .toggle_complete(&id)
            .ok_or_else(|| PlanitError::task_not_found(&id.id))?;

        self.renderer
            .render(&UpdateResult::diff(&before, task).to_string())?;
        if self.board.view().celebrate {
            self.renderer.render(&format!("\n**{CELEBRATION}**\n"))?;
        }
        Ok(())
    }

    pub fn delete(&mut self, args: DeleteTaskArgs) -> Result<()> {
        let id = self.board.resolve_task(&args.task)?;
        let removed = self.board.delete_task(&DeleteTask {
            id: id.clone(),
            confirmed: args.confirm,
        })?;

        match removed {
            Some(task) => self.renderer.render(&DeleteResult::new(task).to_string()),
            None => {
                debug!("Task {id} vanished before deletion");
                Err(PlanitError::task_not_found(id).into())
            }
        }
    }

    pub fn show(&mut self, args: TaskRefArgs) -> Result<()> {
        let id = self.board.resolve_task(&args.task)?;
        match self.board.get_task(&Id::new(&id)) {
            Some(task) => self.renderer.render(&task.to_string()),
            None => Err(PlanitError::task_not_found(id).into()),
        }
    }

    pub fn theme(&mut self, args: ThemeArgs) -> Result<()> {
        let status = match args.choice {
            None => OperationStatus::success(format!("Current theme: {}", self.board.theme())),
            Some(choice) => {
                let theme = choice.resolve(self.board.theme());
                self.board.set_theme(theme);
                OperationStatus::success(format!("Theme set to {theme}"))
            }
        };
        self.renderer.set_theme(self.board.theme());
        self.renderer.render(&status.to_string())
    }
}
