//! Command-line interface.

pub mod completions;
pub mod output;
pub mod resolve;

use clap::{Parser, Subcommand};

/// secenvs - Processes secure environment variables.
#[derive(Parser)]
#[command(
    name = "secenvs",
    about = "Processes secure environment variables",
    long_about = "Scans environment variables for any that require their values \
extracting via some other process, such as `pass show <key>`.\n\n\
A variable like DB_PASS=pass:db/creds is printed as `export DB_PASS=<secret>`, \
ready for the shell to evaluate:\n\n    eval \"$(secenvs)\"",
    version
)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands. Without one, secenvs resolves the environment.
#[derive(Subcommand)]
pub enum Command {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

/// Execute a parsed command line.
pub fn execute(command: Option<Command>) -> crate::error::Result<()> {
    match command {
        None => resolve::execute(),
        Some(Command::Completions { shell }) => completions::execute(shell),
    }
}
