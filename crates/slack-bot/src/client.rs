//! Thin HTTP client for the three upload calls.

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::{
    config::UploadConfig,
    error::UploadError,
    types::{CompleteUpload, CompletionResult, UploadTicket, parse_json_object},
};

#[derive(Debug, Clone)]
pub struct SlackClient {
    http: reqwest::Client,
    base_url: String,
    access_token: SecretString,
}

impl SlackClient {
    /// Creates a client for `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>, access_token: SecretString) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            access_token,
        }
    }

    pub fn from_config(config: &UploadConfig) -> Self {
        Self::new(config.endpoint.clone(), config.api_token.clone())
    }

    /// Builds a full URL for a Slack API method.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL and method cannot be combined into a
    /// valid URL.
    fn url(&self, method: &str) -> Result<reqwest::Url, UploadError> {
        let full_url = format!("{}/{}", self.base_url, method);
        reqwest::Url::parse(&full_url).map_err(|e| UploadError::InvalidEndpoint {
            endpoint: self.base_url.clone(),
            reason: e.to_string(),
        })
    }

    /// Sends an authenticated form POST and returns the status and raw body.
    async fn post_form(
        &self,
        method: &str,
        form: &[(&str, String)],
    ) -> Result<(u16, String), UploadError> {
        let url = self.url(method)?;
        let response = self
            .http
            .post(url)
            .bearer_auth(self.access_token.expose_secret())
            .form(form)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(method, status, "Slack API call finished");
        Ok((status, body))
    }

    /// Requests an upload slot for `length` bytes named `filename`.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::UploadUrlRejected`] unless the response has a
    /// truthy `ok` and non-empty `upload_url` and `file_id`; transport
    /// failures surface as [`UploadError::Http`].
    pub async fn get_upload_url(
        &self,
        filename: &str,
        length: u64,
    ) -> Result<UploadTicket, UploadError> {
        let form = [
            ("filename", filename.to_string()),
            ("length", length.to_string()),
        ];
        let (_, body) = self.post_form("files.getUploadURLExternal", &form).await?;

        let response = parse_json_object(&body);
        UploadTicket::from_response(&response)
            .ok_or(UploadError::UploadUrlRejected { response })
    }

    /// Posts the raw file bytes to a pre-signed upload URL.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::TransferFailed`] for any status other than 200.
    pub async fn send_file_bytes(
        &self,
        upload_url: &str,
        bytes: Vec<u8>,
    ) -> Result<(), UploadError> {
        let response = self
            .http
            .post(upload_url)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(bytes)
            .send()
            .await?;

        let status = response.status().as_u16();
        if status == 200 {
            Ok(())
        } else {
            Err(UploadError::TransferFailed { status })
        }
    }

    /// Finalizes an upload and wraps whatever Slack answered.
    ///
    /// Neither the status nor `ok` is checked.
    ///
    /// # Errors
    ///
    /// Returns an error only if the request could not be built or sent.
    pub async fn complete_upload(
        &self,
        request: &CompleteUpload,
    ) -> Result<CompletionResult, UploadError> {
        let form = request.form_fields()?;
        let (status, body) = self
            .post_form("files.completeUploadExternal", &form)
            .await?;
        Ok(CompletionResult::from_parts(status, body))
    }
}
