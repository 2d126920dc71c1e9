//! JSON payloads exchanged with the chat endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const CHAT_PATH: &str = "chat";
pub const HEALTH_PATH: &str = "health";

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
pub struct HealthReport {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub code: Option<u16>,
}

/// Extracts the reply text from a success body.
///
/// Missing, null, non-string and blank replies all count as no reply.
pub fn extract_reply(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("reply")
        .and_then(Value::as_str)
        .filter(|reply| !reply.trim().is_empty())
        .map(str::to_owned)
}

/// Extracts the server-provided error message from an error body.
pub fn extract_error(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body.trim()).ok()?;
    let detail = match value.get("error")? {
        Value::String(message) => Some(message.clone()),
        Value::Object(map) => map
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_owned),
        _ => None,
    }?;

    let collapsed = detail.split_whitespace().collect::<Vec<_>>().join(" ");
    (!collapsed.is_empty()).then_some(collapsed)
}
