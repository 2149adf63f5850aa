mod cli;
mod color;
mod commands;
mod domain;
mod integrations;
mod prompt;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Resolve color mode from CLI flag and environment variables
    let color_mode = color::ColorMode::resolve(cli.color);

    match cli.command {
        Commands::Branch => commands::branch::cmd_branch(color_mode),
        Commands::Commit => commands::commit::cmd_commit(color_mode),
        Commands::GenerateMessage => commands::generate_message::cmd_generate_message(color_mode),
    }
}
