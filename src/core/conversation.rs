//! Ordered message history for a single chat session.
//!
//! Every send appends a user message and an assistant placeholder together.
//! Placeholders are later resolved by id, so completions that arrive out of
//! order still land on the message that was created for them.

use crate::core::message::{Message, MessageId, MessageStatus, Role};

/// Ids handed out for one send action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exchange {
    pub user_id: MessageId,
    pub placeholder_id: MessageId,
}

#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<Message>,
    next_id: u64,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|message| message.id == id)
    }

    pub fn pending_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_pending()).count()
    }

    fn allocate_id(&mut self) -> MessageId {
        self.next_id += 1;
        MessageId::from(self.next_id)
    }

    /// Appends the user message and its pending assistant placeholder.
    pub fn begin_exchange(&mut self, text: impl Into<String>) -> Exchange {
        let user_id = self.allocate_id();
        let placeholder_id = self.allocate_id();

        self.messages.push(Message::user(user_id, text));
        self.messages.push(Message::placeholder(placeholder_id));

        Exchange {
            user_id,
            placeholder_id,
        }
    }

    /// Sets the final content of a pending placeholder.
    ///
    /// Returns `false` when `id` does not name a pending assistant message;
    /// the conversation is left untouched in that case.
    pub fn resolve(&mut self, id: MessageId, content: impl Into<String>) -> bool {
        let Some(message) = self.messages.iter_mut().find(|message| message.id == id) else {
            return false;
        };

        if message.role != Role::Assistant || message.status != MessageStatus::Pending {
            return false;
        }

        message.content = content.into();
        message.status = MessageStatus::Resolved;
        true
    }
}
