use std::fmt;

/// Content shown in an assistant placeholder while its request is in flight.
pub const PENDING_CONTENT: &str = "…thinking";

/// Content used when the endpoint answers successfully without a usable reply.
pub const NO_REPLY_CONTENT: &str = "(no reply)";

/// Prefix that marks a placeholder resolved with a failure.
pub const ERROR_MARKER: &str = "⚠️ Error: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(u64);

impl From<u64> for MessageId {
    fn from(value: u64) -> Self {
        MessageId(value)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Label shown in front of the message body.
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Assistant => "Bot",
        }
    }

    pub fn is_assistant(self) -> bool {
        self == Role::Assistant
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStatus {
    Pending,
    Resolved,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub content: String,
    pub status: MessageStatus,
}

impl Message {
    pub fn user(id: MessageId, content: impl Into<String>) -> Self {
        Self {
            id,
            role: Role::User,
            content: content.into(),
            status: MessageStatus::Resolved,
        }
    }

    pub fn placeholder(id: MessageId) -> Self {
        Self {
            id,
            role: Role::Assistant,
            content: PENDING_CONTENT.to_string(),
            status: MessageStatus::Pending,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == MessageStatus::Pending
    }

    pub fn is_error(&self) -> bool {
        self.role.is_assistant() && self.content.starts_with(ERROR_MARKER)
    }
}

/// Builds the visible content for a failed exchange.
pub fn error_content(detail: &str) -> String {
    format!("{ERROR_MARKER}{detail}")
}
