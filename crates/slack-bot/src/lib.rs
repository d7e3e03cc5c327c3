//! # Slack bot pipeline actions
//!
//! This crate provides the `file_upload_to_slack` action for build pipelines.
//! It uploads one local file through Slack's external upload flow:
//!
//! 1. `files.getUploadURLExternal` hands out a one-time upload URL and file ID
//! 2. The raw bytes are posted to that URL
//! 3. `files.completeUploadExternal` finalizes the file and optionally shares
//!    it to channels or a thread
//!
//! ## Running the action
//!
//! ```no_run
//! use slack_bot::{LaneContext, UploadConfig, UploadOptions, file_upload_to_slack};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = UploadOptions {
//!     channels: Some("ios-builds".to_string()),
//!     file_path: Some("fastlane/test.png".to_string()),
//!     ..UploadOptions::default()
//! };
//! // The token falls back to FL_FILE_UPLOAD_TO_SLACK_BOT_TOKEN, then SLACK_API_TOKEN.
//! let config = UploadConfig::from_env(&options)?;
//!
//! let mut ctx = LaneContext::new("beta");
//! if let Some(result) = file_upload_to_slack(&mut ctx, &config).await {
//!     println!("Slack answered {}", result.status);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! A failed run returns `None`; the reason is only logged through `tracing`.
//!
//! ## Discovery
//!
//! Actions register an [`ActionEntry`] at compile time. Use [`actions`] or
//! [`find_action`] to list them and render their options and examples.

mod action;
mod client;
mod config;
mod context;
mod error;
mod filename;
mod registry;
mod types;

pub use action::{FILE_UPLOAD_TO_SLACK, file_upload_to_slack};
pub use client::SlackClient;
pub use config::{
    ConfigError, DEFAULT_SLACK_ENDPOINT, OptionKey, OptionSpec, UPLOAD_OPTIONS, UploadConfig,
    UploadOptions, normalize_base_url,
};
pub use context::{ContextError, FILE_UPLOAD_TO_SLACK_RESULT, LaneContext};
pub use error::UploadError;
pub use filename::{DisplayMetadata, resolve_upload_filename};
pub use registry::{ActionEntry, Platform, actions, find_action};
pub use secrecy::SecretString;
pub use types::{CompleteUpload, CompletionResult, UploadTicket, parse_json_object};
