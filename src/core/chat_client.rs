//! HTTP client for the chat endpoint.
//!
//! One request per send: `POST {endpoint}/chat` with `{"message": ...}`.
//! Failures are reported as [`ChatError`] and turned into visible content by
//! [`ChatOutcome`]; nothing here retries or times out on its own.

use std::error::Error as StdError;
use std::fmt;

use async_trait::async_trait;
use tracing::debug;

use crate::api::{extract_error, extract_reply, ChatRequest, HealthReport, CHAT_PATH, HEALTH_PATH};
use crate::core::message::{error_content, NO_REPLY_CONTENT};
use crate::utils::url::{construct_api_url, normalize_base_url};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// The request never produced an HTTP response.
    Transport(String),
    /// The endpoint answered with a non-success status.
    Server { status: u16, detail: Option<String> },
}

impl fmt::Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatError::Transport(description) => write!(f, "{description}"),
            ChatError::Server {
                detail: Some(detail),
                ..
            } => write!(f, "{detail}"),
            ChatError::Server {
                status,
                detail: None,
            } => write!(f, "Request failed with status code {status}"),
        }
    }
}

impl StdError for ChatError {}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        ChatError::Transport(describe_transport_error(&err))
    }
}

/// Flattens an error and its sources into one line.
fn describe_transport_error(err: &(dyn StdError + 'static)) -> String {
    let mut description = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !description.contains(&text) {
            description.push_str(": ");
            description.push_str(&text);
        }
        source = cause.source();
    }
    description
}

/// How a settled exchange should be displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOutcome {
    Reply(String),
    NoReply,
    Failed(String),
}

impl ChatOutcome {
    /// Final content for the exchange's placeholder.
    pub fn content(&self) -> String {
        match self {
            ChatOutcome::Reply(text) => text.clone(),
            ChatOutcome::NoReply => NO_REPLY_CONTENT.to_string(),
            ChatOutcome::Failed(detail) => error_content(detail),
        }
    }
}

impl From<Result<Option<String>, ChatError>> for ChatOutcome {
    fn from(result: Result<Option<String>, ChatError>) -> Self {
        match result {
            Ok(Some(reply)) => ChatOutcome::Reply(reply),
            Ok(None) => ChatOutcome::NoReply,
            Err(err) => ChatOutcome::Failed(err.to_string()),
        }
    }
}

/// Something that turns a user message into a reply.
#[async_trait]
pub trait ChatEndpoint: Send + Sync {
    /// Sends `message` and returns the reply text, if the endpoint gave one.
    async fn send(&self, message: &str) -> Result<Option<String>, ChatError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub http_status: u16,
    pub report: HealthReport,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        (200..300).contains(&self.http_status)
    }
}

#[derive(Clone)]
pub struct HttpChatEndpoint {
    client: reqwest::Client,
    base_url: String,
}

impl HttpChatEndpoint {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Queries `GET {endpoint}/health`.
    ///
    /// Non-success statuses are still reported as a [`HealthStatus`] so the
    /// caller can show whatever the server said about itself.
    pub async fn check_health(&self) -> Result<HealthStatus, ChatError> {
        let url = construct_api_url(&self.base_url, HEALTH_PATH);
        debug!(%url, "checking endpoint health");

        let response = self.client.get(&url).send().await?;
        let http_status = response.status().as_u16();
        let body = response.text().await?;
        let report = serde_json::from_str::<HealthReport>(&body).unwrap_or_default();

        Ok(HealthStatus {
            http_status,
            report,
        })
    }
}

#[async_trait]
impl ChatEndpoint for HttpChatEndpoint {
    async fn send(&self, message: &str) -> Result<Option<String>, ChatError> {
        let url = construct_api_url(&self.base_url, CHAT_PATH);
        debug!(%url, chars = message.chars().count(), "sending chat request");

        let response = self
            .client
            .post(&url)
            .json(&ChatRequest { message })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            debug!(status = status.as_u16(), "chat endpoint returned an error");
            return Err(ChatError::Server {
                status: status.as_u16(),
                detail: extract_error(&body),
            });
        }

        Ok(extract_reply(&body))
    }
}
