//! Webhook client for the remote summarization service.
//!
//! Uses reqwest for the POST and a tokio timer to bound the whole exchange.

use crate::summary::{self, ResponseError, Summary};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// User-Agent string identifying this client
const USER_AGENT: &str = concat!(
    "linksumma/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/cladam/linksumma)"
);

/// Default bound on a single summarization request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Message shown for transport failures and unreadable responses.
pub const GENERIC_FAILURE: &str =
    "An unexpected error occurred. Please verify the URL and try again.";

#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("Server error: {0}")]
    Server(u16),
    #[error(transparent)]
    Response(#[from] ResponseError),
    #[error("Request took too long. Please try again.")]
    Timeout,
    #[error("{}", GENERIC_FAILURE)]
    Network(#[source] reqwest::Error),
    #[error("{}", GENERIC_FAILURE)]
    MalformedBody(#[source] serde_json::Error),
}

impl WebhookError {
    /// Short label for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            WebhookError::Server(_) => "server",
            WebhookError::Response(ResponseError::Application(_)) => "application",
            WebhookError::Response(ResponseError::EmptyResult) => "empty-result",
            WebhookError::Timeout => "timeout",
            WebhookError::Network(_) => "network",
            WebhookError::MalformedBody(_) => "malformed-body",
        }
    }

    fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            WebhookError::Timeout
        } else {
            WebhookError::Network(err)
        }
    }
}

/// Anything that can turn a URL into a summary.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, url: &str) -> Result<Summary, WebhookError>;
}

/// Where and how long to wait for the webhook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookSettings {
    pub endpoint: Url,
    pub timeout: Duration,
}

impl WebhookSettings {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Serialize)]
struct SummaryRequest<'a> {
    url: &'a str,
}

/// Summarizer backed by an HTTP webhook.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: Client,
    settings: WebhookSettings,
}

impl WebhookClient {
    pub fn new(settings: WebhookSettings) -> Result<Self, WebhookError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(WebhookError::Network)?;
        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &WebhookSettings {
        &self.settings
    }

    async fn exchange(&self, url: &str) -> Result<Summary, WebhookError> {
        // .json() also sets Content-Type: application/json
        let response = self
            .client
            .post(self.settings.endpoint.clone())
            .json(&SummaryRequest { url })
            .send()
            .await
            .map_err(WebhookError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(WebhookError::Server(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(WebhookError::from_transport)?;
        let value: serde_json::Value =
            serde_json::from_slice(&body).map_err(WebhookError::MalformedBody)?;

        Ok(summary::interpret(&value)?)
    }
}

#[async_trait]
impl Summarizer for WebhookClient {
    async fn summarize(&self, url: &str) -> Result<Summary, WebhookError> {
        // Dropping the exchange future on expiry aborts the in-flight request.
        match tokio::time::timeout(self.settings.timeout, self.exchange(url)).await {
            Ok(result) => result,
            Err(_) => Err(WebhookError::Timeout),
        }
    }
}
