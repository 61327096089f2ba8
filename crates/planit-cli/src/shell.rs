//! Interactive session.
//!
//! The shell drives a [`Board`] from stdin lines. Its event loop waits on
//! two things at once: the next input line and the board's next timer
//! deadline, so an undo window closes on time even while the user is idle.
//! Timers are only fired between commands, never during one.

use std::{io::Write, str::FromStr};

use anyhow::{anyhow, Context, Result};
use log::{debug, error};
use planit_core::{
    display::escape_markdown, Board, DeleteTask, Deferred, FormField, Id, Key, KeyOutcome,
    ListView, ModalField, OperationStatus, PlanitError, SortKey, Theme,
};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::renderer::TerminalRenderer;

const HELP: &str = "\
## Commands

- `name <text>`, `time <HH:MM>`, `priority <low|medium|high>`: fill in the form
- `add [name]`: add a task from the form
- `clear` / `undo`: reset the form, and bring it back within 5 seconds
- `form`: show the form
- `list`, `sort <time|priority|created>`
- `toggle <task>`, `edit <task>`, `delete <task>`, `show <task>`
- `theme [light|dark|toggle]`
- `quit`

While editing: `name`, `time`, `priority`, `tab`, `backtab`, `save`, `cancel`.
A `<task>` is an ID or a row number.
";

/// Input field named by a `name`, `time` or `priority` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Name,
    Time,
    Priority,
}

impl From<InputField> for FormField {
    fn from(val: InputField) -> Self {
        match val {
            InputField::Name => FormField::Name,
            InputField::Time => FormField::Time,
            InputField::Priority => FormField::Priority,
        }
    }
}

impl From<InputField> for ModalField {
    fn from(val: InputField) -> Self {
        match val {
            InputField::Name => ModalField::Name,
            InputField::Time => ModalField::Time,
            InputField::Priority => ModalField::Priority,
        }
    }
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Fill in a form or dialog field
    Set(InputField, String),
    /// Submit the entry form, optionally setting the name first
    Add(Option<String>),
    Clear,
    Undo,
    Form,
    List,
    Sort(SortKey),
    Toggle(String),
    Edit(String),
    Delete(String),
    Show(String),
    /// Switch theme; `None` toggles
    Theme(Option<Theme>),
    /// A key press for the edit dialog
    Key(Key),
    Help,
    Quit,
}

fn required(rest: &str, usage: &str) -> Result<String, String> {
    if rest.is_empty() {
        Err(format!("Usage: {usage}"))
    } else {
        Ok(rest.to_string())
    }
}

impl FromStr for ShellCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match word.to_lowercase().as_str() {
            "name" => ShellCommand::Set(InputField::Name, rest.to_string()),
            "time" => ShellCommand::Set(InputField::Time, rest.to_string()),
            "priority" | "prio" => ShellCommand::Set(InputField::Priority, rest.to_string()),
            "add" | "submit" => ShellCommand::Add(Some(rest.to_string()).filter(|r| !r.is_empty())),
            "clear" => ShellCommand::Clear,
            "undo" => ShellCommand::Undo,
            "form" => ShellCommand::Form,
            "list" | "ls" => ShellCommand::List,
            "sort" => ShellCommand::Sort(SortKey::from_str(&required(
                rest,
                "sort <time|priority|created>",
            )?)?),
            "toggle" | "done" => ShellCommand::Toggle(required(rest, "toggle <task>")?),
            "edit" => ShellCommand::Edit(required(rest, "edit <task>")?),
            "delete" | "rm" => ShellCommand::Delete(required(rest, "delete <task>")?),
            "show" => ShellCommand::Show(required(rest, "show <task>")?),
            "theme" => match rest {
                "" | "toggle" => ShellCommand::Theme(None),
                other => ShellCommand::Theme(Some(Theme::from_str(other)?)),
            },
            "tab" => ShellCommand::Key(Key::Tab),
            "backtab" | "shift-tab" => ShellCommand::Key(Key::BackTab),
            "save" | "enter" => ShellCommand::Key(Key::Enter),
            "cancel" | "esc" | "escape" => ShellCommand::Key(Key::Escape),
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" | "q" => ShellCommand::Quit,
            other => return Err(format!("Unknown command: {other}. Type `help` for a list")),
        };
        Ok(command)
    }
}

/// Whether the session goes on after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive session over a board.
pub struct Shell {
    board: Board,
    terminal: TerminalRenderer,
    pending_delete: Option<String>,
}

impl Shell {
    /// Initializes `board` (rendering the list) and wraps it in a session.
    pub fn new(mut board: Board, mut terminal: TerminalRenderer) -> Self {
        board.init();
        terminal.set_theme(board.theme());
        Self {
            board,
            terminal,
            pending_delete: None,
        }
    }

    /// Reads commands from stdin until `quit` or end of input.
    pub async fn run(mut self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        self.say("Type `help` for commands.\n");

        loop {
            self.print_prompt();
            let wait = self.board.time_until_next_deadline();

            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line.context("Failed to read input")? else {
                        break;
                    };
                    self.fire_due();
                    if self.handle_line(&line) == Flow::Quit {
                        break;
                    }
                }
                _ = tokio::time::sleep(wait.unwrap_or_default()), if wait.is_some() => {
                    println!();
                    self.fire_due();
                }
            }
        }

        debug!("Shell finished");
        Ok(())
    }

    /// Handles one input line.
    pub fn handle_line(&mut self, line: &str) -> Flow {
        let line = line.trim();
        if let Some(id) = self.pending_delete.take() {
            self.confirm_delete(id, line);
            return Flow::Continue;
        }
        if line.is_empty() {
            return Flow::Continue;
        }

        match line.parse::<ShellCommand>() {
            Ok(ShellCommand::Quit) => Flow::Quit,
            Ok(command) => {
                if let Err(e) = self.execute(command) {
                    self.say(&OperationStatus::failure(format!("{e:#}")).to_string());
                }
                Flow::Continue
            }
            Err(message) => {
                self.say(&OperationStatus::failure(message).to_string());
                Flow::Continue
            }
        }
    }

    /// Text shown before each input line.
    pub fn prompt(&self) -> String {
        if self.pending_delete.is_some() {
            return "Delete? [y/N] ".to_string();
        }
        if let Some(session) = self.board.edit_session() {
            return format!("edit:{}> ", field_label(session.focus()));
        }
        if self.board.can_undo() {
            "planit (undo available)> ".to_string()
        } else {
            "planit> ".to_string()
        }
    }

    /// The latest pass for re-printing. Showing it again is not a new
    /// celebration.
    fn listing(&self) -> ListView {
        ListView {
            celebrate: false,
            ..self.board.view().clone()
        }
    }

    fn execute(&mut self, command: ShellCommand) -> Result<()> {
        if self.board.is_editing() {
            return self.execute_in_dialog(command);
        }

        match command {
            ShellCommand::Set(field, value) => self.board.set_form_field(field.into(), value),
            ShellCommand::Add(name) => {
                if let Some(name) = name {
                    self.board.set_form_field(FormField::Name, name);
                }
                let task = self.board.add_from_form()?;
                self.success(format!("Added '{}'", escape_markdown(&task.name)));
            }
            ShellCommand::Clear => {
                if self.board.clear_form() {
                    self.success("Form cleared. Type `undo` within 5 seconds to restore it");
                } else {
                    self.success("Form cleared");
                }
            }
            ShellCommand::Undo => {
                if !self.board.undo_clear() {
                    return Err(anyhow!("Nothing to undo"));
                }
                self.success("Form restored");
                self.show_form();
            }
            ShellCommand::Form => self.show_form(),
            ShellCommand::List => {
                let view = self.listing();
                self.terminal.render_view(&view)?;
            }
            ShellCommand::Sort(key) => {
                self.board.sort_by(key);
            }
            ShellCommand::Toggle(task) => {
                let id = self.board.resolve_task(&task)?;
                self.board.toggle_complete(&Id::new(id));
            }
            ShellCommand::Edit(task) => {
                let id = self.board.resolve_task(&task)?;
                let session = self.board.open_edit(&Id::new(id))?;
                self.say(&format!(
                    "Editing **{}**: time `{}`, priority `{}`. Change fields, then `save` or `cancel`.\n",
                    escape_markdown(&session.fields.name),
                    session.fields.time,
                    session.fields.priority
                ));
            }
            ShellCommand::Delete(task) => {
                let id = self.board.resolve_task(&task)?;
                if let Some(task) = self.board.get_task(&Id::new(&id)) {
                    self.say(&format!(
                        "Delete **{}**? This cannot be undone.\n",
                        escape_markdown(&task.name)
                    ));
                }
                self.pending_delete = Some(id);
            }
            ShellCommand::Show(task) => {
                let id = self.board.resolve_task(&task)?;
                let task = self
                    .board
                    .get_task(&Id::new(&id))
                    .ok_or_else(|| PlanitError::task_not_found(&id))?;
                self.terminal.render(&task.to_string())?;
            }
            ShellCommand::Theme(choice) => {
                let theme = match choice {
                    Some(theme) => {
                        self.board.set_theme(theme);
                        theme
                    }
                    None => self.board.toggle_theme(),
                };
                self.terminal.set_theme(theme);
                self.success(format!("Theme set to {theme}"));
            }
            ShellCommand::Key(_) => return Err(PlanitError::NoActiveEdit.into()),
            ShellCommand::Help => self.say(HELP),
            ShellCommand::Quit => {}
        }
        Ok(())
    }

    /// Commands while the edit dialog holds focus.
    fn execute_in_dialog(&mut self, command: ShellCommand) -> Result<()> {
        match command {
            ShellCommand::Set(field, value) => self.board.set_edit_field(field.into(), value)?,
            ShellCommand::Key(key) => match self.board.handle_key(key)? {
                KeyOutcome::Submit => self.success("Task saved"),
                KeyOutcome::Cancel => self.success("Edit cancelled"),
                KeyOutcome::FocusMoved(_) | KeyOutcome::Ignored => {}
            },
            ShellCommand::Help => self.say(HELP),
            _ => return Err(anyhow!("Finish the edit first with `save` or `cancel`")),
        }
        Ok(())
    }

    fn confirm_delete(&mut self, id: String, answer: &str) {
        if !matches!(answer.to_lowercase().as_str(), "y" | "yes") {
            self.success("Deletion cancelled");
            return;
        }
        match self.board.delete_task(&DeleteTask {
            id,
            confirmed: true,
        }) {
            Ok(Some(task)) => self.success(format!("Deleted '{}'", escape_markdown(&task.name))),
            Ok(None) => self.say(&OperationStatus::failure("Task no longer exists").to_string()),
            Err(e) => self.say(&OperationStatus::failure(e.to_string()).to_string()),
        }
    }

    fn fire_due(&mut self) {
        for event in self.board.tick() {
            match event {
                Deferred::UndoExpired => self.say("Undo expired.\n"),
            }
        }
    }

    fn show_form(&self) {
        let form = self.board.form();
        self.say(&format!(
            "- **Name**: {}\n- **Time**: {}\n- **Priority**: {}\n",
            escape_markdown(&form.name),
            form.time,
            form.priority
        ));
    }

    fn success(&self, message: impl Into<String>) {
        self.say(&OperationStatus::success(message).to_string());
    }

    fn say(&self, markdown: &str) {
        if let Err(e) = self.terminal.render(markdown) {
            error!("Failed to write output: {e}");
        }
    }

    fn print_prompt(&self) {
        print!("{}", self.prompt());
        if let Err(e) = std::io::stdout().flush() {
            debug!("Failed to flush prompt: {e}");
        }
    }
}

fn field_label(field: ModalField) -> &'static str {
    match field {
        ModalField::Name => "name",
        ModalField::Time => "time",
        ModalField::Priority => "priority",
        ModalField::Save => "save",
        ModalField::Cancel => "cancel",
    }
}
