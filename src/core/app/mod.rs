//! State behind the conversation view: the message list, the input buffer
//! and the scroll position of the transcript.
//!
//! Everything here is mutated from the UI event loop only. Network work is
//! described by [`PendingExchange`] values that the loop hands to the
//! [`ChatService`](crate::core::chat_service::ChatService); results come back
//! through [`App::apply_outcome`].

use ratatui::crossterm::event::KeyEvent;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders};
use tracing::debug;
use tui_textarea::{CursorMove, Input as TAInput, TextArea};

use crate::core::chat_client::ChatOutcome;
use crate::core::chat_service::PendingExchange;
use crate::core::conversation::Conversation;
use crate::core::message::MessageId;

pub const INPUT_PLACEHOLDER: &str = "Type your message and press Enter…";

pub struct App {
    pub conversation: Conversation,
    input: TextArea<'static>,
    scroll_from_bottom: u16,
    endpoint: String,
    exit_requested: bool,
}

fn build_input(lines: Vec<String>) -> TextArea<'static> {
    let mut textarea = TextArea::new(lines);
    textarea.set_placeholder_text(INPUT_PLACEHOLDER);
    textarea.set_cursor_line_style(Style::default());
    textarea.set_block(Block::default().borders(Borders::ALL));
    textarea
}

impl App {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            conversation: Conversation::new(),
            input: build_input(Vec::new()),
            scroll_from_bottom: 0,
            endpoint: endpoint.into(),
            exit_requested: false,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn input(&self) -> &TextArea<'static> {
        &self.input
    }

    pub fn input_text(&self) -> String {
        self.input.lines().join("\n")
    }

    pub fn input_line_count(&self) -> usize {
        self.input.lines().len().max(1)
    }

    /// Replaces the whole input buffer, leaving the cursor at the end.
    pub fn set_input(&mut self, text: &str) {
        let lines = text.split('\n').map(str::to_owned).collect();
        self.input = build_input(lines);
        self.input.move_cursor(CursorMove::Bottom);
        self.input.move_cursor(CursorMove::End);
    }

    pub fn clear_input(&mut self) {
        self.input = build_input(Vec::new());
    }

    /// Feeds an editing key to the input buffer; returns whether it changed.
    pub fn handle_input_key(&mut self, key: KeyEvent) -> bool {
        self.input.input(TAInput::from(key))
    }

    pub fn insert_newline(&mut self) {
        self.input.insert_newline();
    }

    /// Inserts pasted text at the cursor.
    pub fn insert_text(&mut self, text: &str) -> bool {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        self.input.insert_str(normalized)
    }

    /// Records a send and clears the input.
    ///
    /// Returns `None` without touching any state when the trimmed input is
    /// empty. Otherwise the user message and its placeholder are already in
    /// the conversation when this returns.
    pub fn submit(&mut self) -> Option<PendingExchange> {
        let text = self.input_text().trim().to_string();
        if text.is_empty() {
            return None;
        }

        let exchange = self.conversation.begin_exchange(text.clone());
        self.clear_input();
        self.scroll_to_bottom();
        debug!(placeholder = %exchange.placeholder_id, "submitted message");

        Some(PendingExchange {
            placeholder_id: exchange.placeholder_id,
            text,
        })
    }

    /// Writes a settled exchange into its placeholder.
    pub fn apply_outcome(&mut self, placeholder_id: MessageId, outcome: &ChatOutcome) -> bool {
        let applied = self.conversation.resolve(placeholder_id, outcome.content());
        if !applied {
            debug!(placeholder = %placeholder_id, "outcome for unknown or settled placeholder");
        }
        applied
    }

    /// Lines between the bottom of the transcript and the bottom of the view.
    pub fn scroll_from_bottom(&self) -> u16 {
        self.scroll_from_bottom
    }

    pub fn scroll_up(&mut self, lines: u16, max_offset: u16) {
        self.scroll_from_bottom = self.scroll_from_bottom.saturating_add(lines).min(max_offset);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll_from_bottom = self.scroll_from_bottom.saturating_sub(lines);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_from_bottom = 0;
    }

    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}
