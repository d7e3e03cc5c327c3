//! Command-line runner for the slack-bot pipeline actions.
//!
//! Usage:
//! ```bash
//! slack-bot upload --channels builds --file-path fastlane/test.png
//! slack-bot list                     # List registered actions
//! slack-bot describe <action>        # Show options and examples
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "slack-bot", author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Upload a file to Slack
    Upload(Box<commands::upload::UploadArgs>),

    /// List registered actions
    List(commands::list::ListArgs),

    /// Describe a specific action
    Describe(commands::describe::DescribeArgs),
}

// Inner args may carry the API token.
impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upload(_) => f.debug_tuple("Upload").finish(),
            Self::List(_) => f.debug_tuple("List").finish(),
            Self::Describe(_) => f.debug_tuple("Describe").finish(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("info".parse().context("failed to parse log directive")?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Command::Upload(args) => commands::upload::run(args).await,
        Command::List(args) => commands::list::run(args),
        Command::Describe(args) => commands::describe::run(args),
    }
}
