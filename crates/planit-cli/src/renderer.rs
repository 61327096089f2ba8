//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text.
//! [`LiveRenderer`] plugs the terminal into the board's render pipeline for
//! the interactive shell.

use anyhow::Result;
use log::error;
use planit_core::{ListView, Renderer, Theme};
use termimad::{crossterm::style::Color, MadSkin};

/// Line printed when a render pass celebrates a finished list.
pub const CELEBRATION: &str = "🎉 🎊 Everything is done, nice work! 🎊 🎉";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    theme: Theme,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        Self {
            rich_enabled,
            theme: Theme::Light,
            skin: Self::skin_for(Theme::Light),
        }
    }

    /// Switch the color palette to match the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        if self.theme != theme {
            self.theme = theme;
            self.skin = Self::skin_for(theme);
        }
    }

    fn skin_for(theme: Theme) -> MadSkin {
        let mut skin = if theme.is_dark() {
            MadSkin::default_dark()
        } else {
            MadSkin::default_light()
        };

        let (header, accent) = if theme.is_dark() {
            (Color::Cyan, Color::Yellow)
        } else {
            (Color::Blue, Color::DarkRed)
        };
        skin.set_headers_fg(header);
        skin.bold.set_fg(accent);
        skin.italic.set_fg(Color::Magenta);
        skin.strikeout.set_fg(Color::DarkGrey);
        skin.inline_code.set_bg(Color::AnsiValue(238));
        skin
    }

    fn header_color(&self) -> &'static str {
        if self.theme.is_dark() {
            "\x1b[36m"
        } else {
            "\x1b[34m"
        }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            // Headers keep their hash symbols
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("{}{line}\x1b[0m", self.header_color());
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }

    /// Render a list view, followed by the celebration line if the pass
    /// celebrates.
    pub fn render_view(&mut self, view: &ListView) -> Result<()> {
        self.set_theme(view.theme);
        self.render(&view.to_string())?;
        if view.celebrate {
            self.render(&format!("\n**{CELEBRATION}**\n"))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Prints every render pass of the board.
pub struct LiveRenderer {
    terminal: TerminalRenderer,
}

impl LiveRenderer {
    pub fn new(terminal: TerminalRenderer) -> Self {
        Self { terminal }
    }
}

impl Renderer for LiveRenderer {
    fn render(&mut self, view: &ListView) {
        if let Err(e) = self.terminal.render_view(view) {
            error!("Failed to render task list: {e}");
        }
    }
}
