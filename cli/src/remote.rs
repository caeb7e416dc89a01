//! Remote summarizer over the messages HTTP API.

use std::time::Duration;

use docsift::{Error, Result, Summarizer};
use serde_json::{json, Value};

/// Default messages endpoint.
pub const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";

/// Default model.
pub const DEFAULT_MODEL: &str = "claude-3-haiku-20240307";

const API_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 2000;
const TIMEOUT: Duration = Duration::from_secs(60);

/// A summarizer that posts the prompt to a messages endpoint.
pub struct RemoteSummarizer {
    client: reqwest::Client,
    runtime: tokio::runtime::Runtime,
    api_key: String,
    model: String,
    api_url: String,
}

impl RemoteSummarizer {
    /// Create a summarizer with the default model and endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(TIMEOUT)
            .build()
            .map_err(|e| Error::Summarizer(e.to_string()))?;
        let runtime = tokio::runtime::Runtime::new()?;

        Ok(Self {
            client,
            runtime,
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        })
    }

    /// Set the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the endpoint URL.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    fn request_body(&self, prompt: &str) -> Value {
        json!({
            "model": self.model,
            "max_tokens": MAX_TOKENS,
            "messages": [
                {"role": "user", "content": prompt}
            ]
        })
    }

    async fn post(&self, prompt: &str) -> Result<String> {
        let response = self
            .client
            .post(&self.api_url)
            .header("content-type", "application/json")
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .body(self.request_body(prompt).to_string())
            .send()
            .await
            .map_err(|e| Error::Summarizer(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Summarizer(e.to_string()))?;

        if !status.is_success() {
            return Err(Error::Summarizer(format!("HTTP {}: {}", status, body)));
        }

        response_text(&body)
    }
}

impl Summarizer for RemoteSummarizer {
    fn name(&self) -> &str {
        &self.model
    }

    fn complete(&self, prompt: &str) -> Result<String> {
        log::debug!("Posting {} prompt chars to {}", prompt.len(), self.api_url);
        self.runtime.block_on(self.post(prompt))
    }
}

/// Pull the first text block out of a messages API response.
fn response_text(body: &str) -> Result<String> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| Error::Summarizer(e.to_string()))?;

    value["content"][0]["text"]
        .as_str()
        .map(String::from)
        .ok_or_else(|| Error::Summarizer("response has no text content".to_string()))
}
