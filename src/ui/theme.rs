use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // Chrome
    pub header_style: Style,
    pub title_style: Style,
    pub border_style: Style,

    // Transcript
    pub user_prefix_style: Style,
    pub user_text_style: Style,
    pub assistant_prefix_style: Style,
    pub assistant_text_style: Style,
    pub pending_text_style: Style,
    pub error_text_style: Style,

    // Send control
    pub send_enabled_style: Style,
    pub send_disabled_style: Style,
}

impl Theme {
    pub fn dark_default() -> Self {
        Theme {
            header_style: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            title_style: Style::default().fg(Color::Gray),
            border_style: Style::default().fg(Color::DarkGray),

            user_prefix_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            user_text_style: Style::default().fg(Color::Cyan),
            assistant_prefix_style: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            assistant_text_style: Style::default().fg(Color::White),
            pending_text_style: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            error_text_style: Style::default().fg(Color::Red),

            send_enabled_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            send_disabled_style: Style::default().fg(Color::DarkGray),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark_default()
    }
}
