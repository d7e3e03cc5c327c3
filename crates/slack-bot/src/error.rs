//! Failure taxonomy for the upload workflow.

use std::path::PathBuf;

use serde_json::{Map, Value};

/// Reasons an upload run stops early.
///
/// The action boundary logs these and reports "no result"; callers of
/// [`crate::file_upload_to_slack`] never see them directly.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum UploadError {
    /// The local file could not be inspected or read.
    #[error("failed to read '{}': {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Slack did not hand out an upload URL.
    #[error("Failed to get upload URL from Slack: {}", Value::Object(.response.clone()))]
    UploadUrlRejected { response: Map<String, Value> },

    /// The upload URL answered with something other than 200.
    #[error("File upload to Slack upload_url failed with status {status}")]
    TransferFailed { status: u16 },

    /// The endpoint and method could not be joined into a URL.
    #[error("invalid Slack endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// Transport-level failure talking to Slack.
    #[error("Exception: {0}")]
    Http(#[from] reqwest::Error),

    /// The `files` payload could not be encoded.
    #[error("failed to encode files payload: {0}")]
    Encode(#[from] serde_json::Error),
}
