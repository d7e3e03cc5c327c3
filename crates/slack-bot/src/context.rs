//! Shared state for the steps of one pipeline run.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

/// Key under which a successful upload publishes its [`crate::CompletionResult`].
pub const FILE_UPLOAD_TO_SLACK_RESULT: &str = "FILE_UPLOAD_TO_SLACK_RESULT";

/// Errors that can occur when reading or persisting a lane context.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ContextError {
    /// The requested value was never published.
    #[error("shared value '{0}' not found")]
    NotFound(String),

    /// The value exists but has a different shape.
    #[error("failed to deserialize shared value: {0}")]
    DeserializationError(String),

    /// The context file could not be read or written.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The context file does not hold a valid context.
    #[error("invalid context file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Values published by earlier steps for later ones.
///
/// Each successful step overwrites its own key; there is no locking, a
/// context belongs to exactly one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaneContext {
    #[serde(default)]
    lane: String,
    #[serde(default)]
    shared_values: BTreeMap<String, Value>,
}

impl LaneContext {
    /// Creates an empty context for the named lane.
    #[must_use]
    pub fn new(lane: &str) -> Self {
        Self {
            lane: lane.to_string(),
            shared_values: BTreeMap::new(),
        }
    }

    /// Name of the lane this context belongs to.
    #[must_use]
    pub fn lane(&self) -> &str {
        &self.lane
    }

    /// Publishes `value` under `key`, replacing any earlier value.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::Json`] if `value` cannot be represented as
    /// JSON.
    pub fn publish<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), ContextError> {
        let value = serde_json::to_value(value)?;
        self.shared_values.insert(key.to_string(), value);
        Ok(())
    }

    /// Raw access to a published value.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.shared_values.get(key)
    }

    /// Retrieves a published value, deserializing into the requested type.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::NotFound`] if nothing was published under
    /// `key`, or [`ContextError::DeserializationError`] if it has another
    /// shape.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T, ContextError> {
        let value = self
            .shared_values
            .get(key)
            .ok_or_else(|| ContextError::NotFound(key.to_string()))?;

        T::deserialize(value).map_err(|e| ContextError::DeserializationError(e.to_string()))
    }

    /// Reads a context previously written with [`LaneContext::save`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a context.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ContextError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ContextError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Writes the context as pretty JSON so a later step can pick it up.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ContextError> {
        let path = path.as_ref();
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|source| ContextError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
