//! Planit CLI Application
//!
//! Command-line front end for the planit task list: one-shot subcommands
//! plus an interactive shell.

mod args;
mod cli;
mod renderer;
mod shell;

use anyhow::{Context, Result};
use args::{Args, Commands, ListArgs};
use clap::Parser;
use cli::Cli;
use log::info;
use planit_core::{BoardBuilder, OperationStatus};
use renderer::{LiveRenderer, TerminalRenderer};
use shell::Shell;

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        eprint!("{}", OperationStatus::failure(format!("{e:#}")));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let builder = BoardBuilder::new().with_database_path(database_file);

    info!("Planit started");

    match command {
        Some(Commands::Shell) => {
            let board = builder
                .with_renderer(LiveRenderer::new(TerminalRenderer::new(!no_color)))
                .build()
                .context("Failed to initialize task list")?;
            Shell::new(board, TerminalRenderer::new(!no_color))
                .run()
                .await
        }
        command => {
            let mut board = builder.build().context("Failed to initialize task list")?;
            board.init();
            Cli::new(board, TerminalRenderer::new(!no_color))
                .handle_command(command.unwrap_or_else(|| Commands::List(ListArgs::default())))
        }
    }
}
