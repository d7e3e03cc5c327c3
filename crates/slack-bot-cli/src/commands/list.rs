//! List the actions this plugin registers.

use std::fmt::Write as _;

use anyhow::Result;
use clap::Args;
use console::style;
use slack_bot::{ActionEntry, actions};

/// Command-line arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Output format: "table" for human-readable table or "json" for
    /// machine-readable JSON
    #[arg(short, long, default_value = "table")]
    pub format: String,
}

pub fn run(args: &ListArgs) -> Result<()> {
    let entries: Vec<&ActionEntry> = actions().collect();

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print!("{}", render_table(&entries));
    }

    Ok(())
}

fn render_table(entries: &[&ActionEntry]) -> String {
    if entries.is_empty() {
        return "No actions found\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<30} {}",
        style("ACTION").bold(),
        style("DESCRIPTION").bold()
    );
    let _ = writeln!(out, "{}", "-".repeat(70));

    for entry in entries {
        let _ = writeln!(out, "{:<30} {}", entry.id, entry.description);
    }

    let _ = writeln!(
        out,
        "\n{} {} action(s) available",
        style("✓").green(),
        entries.len()
    );
    out
}
