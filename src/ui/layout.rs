use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::widgets::Block;

pub const SEND_BUTTON_WIDTH: u16 = 10;
pub const MIN_INPUT_ROWS: u16 = 2;
pub const MAX_INPUT_ROWS: u16 = 6;

/// Screen regions of the chat view, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatLayout {
    pub header: Rect,
    pub title: Rect,
    pub messages: Rect,
    pub input: Rect,
    pub send: Rect,
}

impl ChatLayout {
    pub fn compute(area: Rect, input_lines: usize) -> Self {
        let input_rows = u16::try_from(input_lines)
            .unwrap_or(u16::MAX)
            .clamp(MIN_INPUT_ROWS, MAX_INPUT_ROWS);

        let [header, title, messages, input_row] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(input_rows + 2), // +2 for borders
        ])
        .areas(area);

        let [input, send] =
            Layout::horizontal([Constraint::Min(10), Constraint::Length(SEND_BUTTON_WIDTH)])
                .areas(input_row);

        Self {
            header,
            title,
            messages,
            input,
            send,
        }
    }

    /// Area inside the transcript border.
    pub fn transcript_viewport(&self) -> Rect {
        Block::bordered().inner(self.messages)
    }

    pub fn is_on_send(&self, column: u16, row: u16) -> bool {
        self.send.contains(Position::new(column, row))
    }
}
