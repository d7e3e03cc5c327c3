//! `slack-bot upload` command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result, bail, ensure};
use clap::Args;
use slack_bot::{
    FILE_UPLOAD_TO_SLACK, LaneContext, Platform, UploadConfig, UploadOptions, file_upload_to_slack,
    find_action,
};
use tracing::info;

/// Arguments for the `upload` command.
///
/// Unset flags fall back to the `[upload]` table of `--config`, then to the
/// option's environment variable.
#[derive(Args)]
pub struct UploadArgs {
    /// Slack bot token. Defaults to `FL_FILE_UPLOAD_TO_SLACK_BOT_TOKEN`, then
    /// `SLACK_API_TOKEN`.
    #[arg(long)]
    pub api_token: Option<String>,

    /// Comma-separated list of channels to share the file in.
    #[arg(long)]
    pub channels: Option<String>,

    /// Path of the file to upload.
    #[arg(long)]
    pub file_path: Option<String>,

    /// Name to upload the file as.
    #[arg(long)]
    pub file_name: Option<String>,

    #[arg(long)]
    pub file_type: Option<String>,

    #[arg(long)]
    pub title: Option<String>,

    /// Message text introducing the file.
    #[arg(long)]
    pub initial_comment: Option<String>,

    /// Parent message `ts` to upload the file as a reply.
    #[arg(long)]
    pub thread_ts: Option<String>,

    /// Slack Web API base URL.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// TOML file with an `[upload]` table.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Lane context JSON; read if present and written back after the run.
    #[arg(long)]
    pub context: Option<PathBuf>,

    /// Lane name for a fresh context.
    #[arg(long, default_value = "default")]
    pub lane: String,

    /// Platform the pipeline is building for.
    #[arg(long, default_value = "ios")]
    pub platform: Platform,
}

impl UploadArgs {
    /// Option values given directly on the command line.
    pub fn to_options(&self) -> UploadOptions {
        UploadOptions {
            api_token: self.api_token.clone(),
            channels: self.channels.clone(),
            file_path: self.file_path.clone(),
            file_name: self.file_name.clone(),
            file_type: self.file_type.clone(),
            title: self.title.clone(),
            initial_comment: self.initial_comment.clone(),
            thread_ts: self.thread_ts.clone(),
            endpoint: self.endpoint.clone(),
        }
    }
}

pub async fn run(args: &UploadArgs) -> Result<()> {
    let entry = find_action(FILE_UPLOAD_TO_SLACK).context("upload action is not registered")?;
    ensure!(
        (entry.is_supported)(args.platform),
        "{} is not supported on {}",
        entry.id,
        args.platform.as_str()
    );

    let options = load_options(args)?;
    let config = UploadConfig::from_env(&options).context("invalid upload configuration")?;

    let mut ctx = load_context(args)?;
    let result = file_upload_to_slack(&mut ctx, &config).await;

    if let Some(path) = &args.context {
        ctx.save(path)
            .with_context(|| format!("failed to write lane context: {}", path.display()))?;
        info!(path = %path.display(), "Saved lane context");
    }

    match result {
        Some(result) => {
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
        None => bail!("{} produced no result", entry.id),
    }
}

fn load_options(args: &UploadArgs) -> Result<UploadOptions> {
    let base = match &args.config {
        Some(path) => UploadOptions::load(path)
            .with_context(|| format!("failed to load config file: {}", path.display()))?,
        None => UploadOptions::default(),
    };

    Ok(base.merge(args.to_options()))
}

fn load_context(args: &UploadArgs) -> Result<LaneContext> {
    match &args.context {
        Some(path) if path.exists() => LaneContext::load(path)
            .with_context(|| format!("failed to read lane context: {}", path.display())),
        _ => Ok(LaneContext::new(&args.lane)),
    }
}
