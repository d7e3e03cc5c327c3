//! Type definitions for the Slack external upload API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Outcome of `files.completeUploadExternal`, handed back to the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionResult {
    /// Raw HTTP status code of the completion call.
    pub status: u16,
    /// Raw response body, empty if Slack sent none.
    pub body: String,
    /// Parsed body; empty when the body is not a JSON object.
    pub json: Map<String, Value>,
}

impl CompletionResult {
    pub(crate) fn from_parts(status: u16, body: String) -> Self {
        let json = parse_json_object(&body);
        Self { status, body, json }
    }
}

/// Upload slot handed out by `files.getUploadURLExternal`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTicket {
    pub upload_url: String,
    pub file_id: String,
}

impl UploadTicket {
    /// Extracts the ticket from a parsed response.
    ///
    /// Returns `None` unless `ok` is truthy and both `upload_url` and
    /// `file_id` are non-empty strings.
    pub(crate) fn from_response(response: &Map<String, Value>) -> Option<Self> {
        if !response.get("ok").is_some_and(is_truthy) {
            return None;
        }

        let upload_url = non_empty_str(response.get("upload_url"))?;
        let file_id = non_empty_str(response.get("file_id"))?;

        Some(Self {
            upload_url: upload_url.to_string(),
            file_id: file_id.to_string(),
        })
    }
}

/// Parameters of the completion call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompleteUpload {
    pub file_id: String,
    pub title: Option<String>,
    pub channels: Option<String>,
    pub initial_comment: Option<String>,
    pub thread_ts: Option<String>,
}

impl CompleteUpload {
    /// Builds the form fields for `files.completeUploadExternal`.
    ///
    /// Optional fields appear only when supplied.
    ///
    /// # Errors
    ///
    /// Returns an error if the `files` array cannot be serialized.
    pub fn form_fields(&self) -> serde_json::Result<Vec<(&'static str, String)>> {
        let files = [FileRef {
            id: &self.file_id,
            title: self.title.as_deref(),
        }];

        let mut fields = vec![("files", serde_json::to_string(&files)?)];

        let optional = [
            ("channels", &self.channels),
            ("initial_comment", &self.initial_comment),
            ("thread_ts", &self.thread_ts),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                fields.push((key, value.clone()));
            }
        }

        Ok(fields)
    }
}

#[derive(Debug, Serialize)]
struct FileRef<'a> {
    id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
}

/// Parses `body` as a JSON object, yielding an empty map for anything else.
pub fn parse_json_object(body: &str) -> Map<String, Value> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

/// Anything but a missing value, `null` or `false` counts as set.
fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}
