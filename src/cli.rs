use clap::{Parser, Subcommand};

/// CLI for Massimo Dutti developers
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// When to use colored output
    #[arg(long, value_name = "WHEN", global = true, ignore_case = true)]
    pub color: Option<crate::color::ColorMode>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new branch from interactively collected details
    Branch,
    /// Create a commit with a formatted message based on the branch name
    Commit,
    /// Generate a message with RAMA, PR, and JIRA
    GenerateMessage,
}
