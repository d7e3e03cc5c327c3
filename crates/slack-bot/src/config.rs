//! Option registry and typed configuration for the upload action.
//!
//! Every option may come from three places, checked in order:
//!
//! 1. An explicit value (CLI flag or `[upload]` TOML entry)
//! 2. The option's own environment variable
//! 3. A fallback environment variable (only the API token has one)
//!
//! Empty environment values are treated as unset.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Default Slack Web API base URL.
pub const DEFAULT_SLACK_ENDPOINT: &str = "https://slack.com/api";

/// Identifies one option of the upload action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKey {
    ApiToken,
    Channels,
    FilePath,
    FileName,
    FileType,
    Title,
    InitialComment,
    ThreadTs,
    Endpoint,
}

impl OptionKey {
    /// Name used for the option in pipelines and config files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ApiToken => "api_token",
            Self::Channels => "channels",
            Self::FilePath => "file_path",
            Self::FileName => "file_name",
            Self::FileType => "file_type",
            Self::Title => "title",
            Self::InitialComment => "initial_comment",
            Self::ThreadTs => "thread_ts",
            Self::Endpoint => "endpoint",
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Describes one recognised option of the action.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OptionSpec {
    pub key: OptionKey,
    pub env_name: &'static str,
    pub description: &'static str,
    /// Value must never be printed or logged.
    pub sensitive: bool,
    pub optional: bool,
    /// Environment variable consulted when `env_name` is unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_env: Option<&'static str>,
}

/// All options understood by `file_upload_to_slack`, in display order.
pub static UPLOAD_OPTIONS: [OptionSpec; 9] = [
    OptionSpec {
        key: OptionKey::ApiToken,
        env_name: "FL_FILE_UPLOAD_TO_SLACK_BOT_TOKEN",
        description: "Slack bot Token",
        sensitive: true,
        optional: false,
        default_env: Some("SLACK_API_TOKEN"),
    },
    OptionSpec {
        key: OptionKey::Channels,
        env_name: "FL_FETCH_FILES_SLACK_CHANNELS",
        description: "Comma-separated list of slack #channel names where the file will be shared",
        sensitive: false,
        optional: false,
        default_env: None,
    },
    OptionSpec {
        key: OptionKey::FilePath,
        env_name: "FL_FILE_UPLOAD_TO_SLACK_FILE_PATH",
        description: "relative file path which will upload to slack",
        sensitive: false,
        optional: false,
        default_env: None,
    },
    OptionSpec {
        key: OptionKey::FileName,
        env_name: "FL_FILE_UPLOAD_TO_SLACK_FILE_NAME",
        description: "This is optional filename of the file",
        sensitive: false,
        optional: true,
        default_env: None,
    },
    OptionSpec {
        key: OptionKey::FileType,
        env_name: "FL_FILE_UPLOAD_TO_SLACK_FILE_TYPE",
        description: "This is optional filetype of the file",
        sensitive: false,
        optional: true,
        default_env: None,
    },
    OptionSpec {
        key: OptionKey::Title,
        env_name: "FL_FILE_UPLOAD_TO_SLACK_TITLE",
        description: "This is optional Title of file",
        sensitive: false,
        optional: true,
        default_env: None,
    },
    OptionSpec {
        key: OptionKey::InitialComment,
        env_name: "FL_FILE_UPLOAD_TO_SLACK_INITIAL_COMMENT",
        description: "This is optional message text introducing the file",
        sensitive: false,
        optional: true,
        default_env: None,
    },
    OptionSpec {
        key: OptionKey::ThreadTs,
        env_name: "FL_FILE_UPLOAD_TO_SLACK_THREAD_TS",
        description: "Provide another message's ts value to make this message a reply",
        sensitive: false,
        optional: true,
        default_env: None,
    },
    OptionSpec {
        key: OptionKey::Endpoint,
        env_name: "FL_FILE_UPLOAD_TO_SLACK_ENDPOINT",
        description: "Slack Web API base URL (defaults to https://slack.com/api)",
        sensitive: false,
        optional: true,
        default_env: None,
    },
];

/// Errors that can occur while loading or resolving configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// I/O error when reading a config file.
    #[error("I/O error reading '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error when a config file is malformed.
    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// A required option has no value from any source.
    #[error("missing required option '{key}' (set it explicitly or via {env_name})")]
    MissingOption {
        key: &'static str,
        env_name: &'static str,
    },

    /// An option was supplied but cannot be used.
    #[error("invalid option '{key}': {reason}")]
    InvalidOption { key: &'static str, reason: String },
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    upload: UploadOptions,
}

/// Raw, unresolved option values.
#[derive(Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UploadOptions {
    pub api_token: Option<String>,
    pub channels: Option<String>,
    pub file_path: Option<String>,
    pub file_name: Option<String>,
    pub file_type: Option<String>,
    pub title: Option<String>,
    pub initial_comment: Option<String>,
    pub thread_ts: Option<String>,
    pub endpoint: Option<String>,
}

impl fmt::Debug for UploadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadOptions")
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("channels", &self.channels)
            .field("file_path", &self.file_path)
            .field("file_name", &self.file_name)
            .field("file_type", &self.file_type)
            .field("title", &self.title)
            .field("initial_comment", &self.initial_comment)
            .field("thread_ts", &self.thread_ts)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl UploadOptions {
    /// Loads options from the `[upload]` table of a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `Err(ConfigError)` if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let file: ConfigFile = toml::from_str(&contents)?;
        Ok(file.upload)
    }

    /// Overlays `other` on top of `self`; values set in `other` win.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_token: other.api_token.or(self.api_token),
            channels: other.channels.or(self.channels),
            file_path: other.file_path.or(self.file_path),
            file_name: other.file_name.or(self.file_name),
            file_type: other.file_type.or(self.file_type),
            title: other.title.or(self.title),
            initial_comment: other.initial_comment.or(self.initial_comment),
            thread_ts: other.thread_ts.or(self.thread_ts),
            endpoint: other.endpoint.or(self.endpoint),
        }
    }

    fn explicit(&self, key: OptionKey) -> Option<&String> {
        match key {
            OptionKey::ApiToken => self.api_token.as_ref(),
            OptionKey::Channels => self.channels.as_ref(),
            OptionKey::FilePath => self.file_path.as_ref(),
            OptionKey::FileName => self.file_name.as_ref(),
            OptionKey::FileType => self.file_type.as_ref(),
            OptionKey::Title => self.title.as_ref(),
            OptionKey::InitialComment => self.initial_comment.as_ref(),
            OptionKey::ThreadTs => self.thread_ts.as_ref(),
            OptionKey::Endpoint => self.endpoint.as_ref(),
        }
    }
}

/// Fully resolved settings for one upload run.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub api_token: SecretString,
    pub file_path: PathBuf,
    pub channels: Option<String>,
    pub file_name: Option<String>,
    pub file_type: Option<String>,
    pub title: Option<String>,
    pub initial_comment: Option<String>,
    pub thread_ts: Option<String>,
    /// Normalized base URL, without a trailing slash.
    pub endpoint: String,
}

impl UploadConfig {
    /// Creates a config with only the token and file path set.
    pub fn new(api_token: impl Into<String>, file_path: impl Into<PathBuf>) -> Self {
        Self {
            api_token: SecretString::from(api_token.into()),
            file_path: file_path.into(),
            channels: None,
            file_name: None,
            file_type: None,
            title: None,
            initial_comment: None,
            thread_ts: None,
            endpoint: DEFAULT_SLACK_ENDPOINT.to_string(),
        }
    }

    /// Resolves options against the process environment.
    ///
    /// # Errors
    ///
    /// See [`UploadConfig::resolve`].
    pub fn from_env(options: &UploadOptions) -> Result<Self, ConfigError> {
        Self::resolve(options, |name| std::env::var(name).ok())
    }

    /// Resolves options, consulting `env` for anything not given explicitly.
    ///
    /// # Errors
    ///
    /// Returns `Err(ConfigError)` if:
    /// - A required option (`api_token`, `channels`, `file_path`) has no
    ///   non-empty value
    /// - The endpoint is blank
    pub fn resolve<F>(options: &UploadOptions, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(String::new(), PathBuf::new());

        for spec in &UPLOAD_OPTIONS {
            let value = lookup(spec, options, &env);

            if !spec.optional && value.as_deref().is_none_or(str::is_empty) {
                return Err(ConfigError::MissingOption {
                    key: spec.key.as_str(),
                    env_name: spec.env_name,
                });
            }

            let Some(value) = value else { continue };

            match spec.key {
                OptionKey::ApiToken => config.api_token = SecretString::from(value),
                OptionKey::Channels => config.channels = Some(value),
                OptionKey::FilePath => config.file_path = PathBuf::from(value),
                OptionKey::FileName => config.file_name = Some(value),
                OptionKey::FileType => config.file_type = Some(value),
                OptionKey::Title => config.title = Some(value),
                OptionKey::InitialComment => config.initial_comment = Some(value),
                OptionKey::ThreadTs => config.thread_ts = Some(value),
                OptionKey::Endpoint => config.endpoint = normalize_base_url(&value)?,
            }
        }

        Ok(config)
    }
}

fn lookup<F>(spec: &OptionSpec, options: &UploadOptions, env: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let from_env = |name: &str| env(name).filter(|value| !value.is_empty());

    options
        .explicit(spec.key)
        .cloned()
        .or_else(|| from_env(spec.env_name))
        .or_else(|| spec.default_env.and_then(from_env))
}

/// Normalizes a Slack API endpoint URL by trimming trailing slashes.
///
/// # Errors
///
/// Returns an error if the endpoint is empty or contains only whitespace.
pub fn normalize_base_url(endpoint: &str) -> Result<String, ConfigError> {
    let trimmed = endpoint.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidOption {
            key: "endpoint",
            reason: "endpoint must not be empty".to_string(),
        });
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}
