//! Displays the options and examples of a registered action.

use std::fmt::Write as _;

use anyhow::Result;
use clap::Args;
use console::style;
use slack_bot::{ActionEntry, Platform, find_action};

#[derive(Args)]
pub struct DescribeArgs {
    /// Action ID to describe (e.g., "`file_upload_to_slack`").
    pub action: String,

    /// Output format: "text" or "json".
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn run(args: &DescribeArgs) -> Result<()> {
    let Some(entry) = find_action(&args.action) else {
        anyhow::bail!("action not found: {}", args.action);
    };

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(entry)?);
    } else {
        print!("{}", render(entry));
    }

    Ok(())
}

fn render(entry: &ActionEntry) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", style("Action Details").bold().underlined());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}: {}", style("ID").cyan(), entry.id);
    let _ = writeln!(
        out,
        "{}: {}",
        style("Description").cyan(),
        entry.description
    );
    if !entry.details.is_empty() {
        let _ = writeln!(out, "{}: {}", style("Details").cyan(), entry.details);
    }
    if !entry.authors.is_empty() {
        let _ = writeln!(
            out,
            "{}: {}",
            style("Authors").cyan(),
            entry.authors.join(", ")
        );
    }

    let platforms: Vec<_> = entry.platforms().into_iter().map(Platform::as_str).collect();
    let _ = writeln!(
        out,
        "{}: {}",
        style("Platforms").cyan(),
        platforms.join(", ")
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", style("Options").bold().underlined());
    let _ = writeln!(
        out,
        "{:<18} {:<42} {:<10} {}",
        style("KEY").bold(),
        style("ENV VAR").bold(),
        style("REQUIRED").bold(),
        style("DESCRIPTION").bold()
    );
    for option in entry.options {
        let required = if option.optional { "no" } else { "yes" };
        let mut description = option.description.to_string();
        if let Some(default_env) = option.default_env {
            let _ = write!(description, " (default: ${default_env})");
        }
        if option.sensitive {
            description.push_str(" [sensitive]");
        }
        let _ = writeln!(
            out,
            "{:<18} {:<42} {:<10} {}",
            option.key, option.env_name, required, description
        );
    }

    if !entry.example_code.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", style("Examples").bold().underlined());
        for example in entry.example_code {
            let _ = writeln!(out, "{example}");
            let _ = writeln!(out);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use slack_bot::FILE_UPLOAD_TO_SLACK;

    use super::*;

    #[test]
    fn test_render_upload_action_lists_options_and_examples() {
        let entry = find_action(FILE_UPLOAD_TO_SLACK).unwrap();
        let text = render(entry);

        assert!(text.contains("Upload a file to slack channel or DM to a slack user"));
        assert!(text.contains("crazymanish"));
        assert!(text.contains("ios, android, mac"));
        assert!(text.contains("FL_FILE_UPLOAD_TO_SLACK_BOT_TOKEN"));
        assert!(text.contains("(default: $SLACK_API_TOKEN) [sensitive]"));
        assert!(text.contains("FL_FILE_UPLOAD_TO_SLACK_THREAD_TS"));
        assert!(text.contains("file_path: \"fastlane/screenshots.zip\""));
    }

    #[test]
    fn test_run_unknown_action_is_an_error() {
        let args = DescribeArgs {
            action: "no_such_action".to_string(),
            format: "text".to_string(),
        };

        let err = run(&args).unwrap_err();
        assert_eq!(err.to_string(), "action not found: no_such_action");
    }
}
