use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::core::app::App;
use crate::core::message::{Message, Role};
use crate::core::text_wrapping::wrap_text;
use crate::ui::layout::ChatLayout;
use crate::ui::theme::Theme;
use unicode_width::UnicodeWidthStr;

pub const APP_HEADER: &str = "My AI Assistant";
pub const CHAT_TITLE: &str = "🤖 GPT Chatbot";
pub const SEND_LABEL: &str = "Send";

/// Draw the whole chat view. Reads `app` only.
pub fn ui(f: &mut Frame, app: &App) {
    let theme = Theme::default();
    let layout = ChatLayout::compute(f.area(), app.input_line_count());

    f.render_widget(
        Paragraph::new(APP_HEADER)
            .style(theme.header_style)
            .alignment(Alignment::Center),
        layout.header,
    );
    let title_width = u16::try_from(CHAT_TITLE.width()).unwrap_or(u16::MAX);
    let [title_area, endpoint_area] =
        Layout::horizontal([Constraint::Length(title_width), Constraint::Min(0)])
            .areas(layout.title);
    f.render_widget(
        Paragraph::new(CHAT_TITLE).style(theme.title_style),
        title_area,
    );
    f.render_widget(
        Paragraph::new(app.endpoint())
            .style(theme.border_style)
            .alignment(Alignment::Right),
        endpoint_area,
    );

    let (lines, top) = transcript_view(app, &layout, &theme);
    let transcript = Paragraph::new(lines)
        .block(Block::bordered().border_style(theme.border_style))
        .scroll((top, 0));
    f.render_widget(transcript, layout.messages);

    f.render_widget(app.input(), layout.input);

    let send_style = if app.input_text().trim().is_empty() {
        theme.send_disabled_style
    } else {
        theme.send_enabled_style
    };
    let send = Paragraph::new(SEND_LABEL)
        .style(send_style)
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(theme.border_style));
    f.render_widget(send, layout.send);
}

/// Largest useful distance from the bottom of the transcript for `area`.
pub fn max_scroll_offset(app: &App, area: Rect) -> u16 {
    let layout = ChatLayout::compute(area, app.input_line_count());
    let viewport = layout.transcript_viewport();
    let lines =
        build_transcript_lines(app.conversation.messages(), viewport.width, &Theme::default());
    line_count(&lines).saturating_sub(viewport.height)
}

fn line_count(lines: &[Line<'_>]) -> u16 {
    u16::try_from(lines.len()).unwrap_or(u16::MAX)
}

fn transcript_view(app: &App, layout: &ChatLayout, theme: &Theme) -> (Vec<Line<'static>>, u16) {
    let viewport = layout.transcript_viewport();
    let lines = build_transcript_lines(app.conversation.messages(), viewport.width, theme);
    let max_offset = line_count(&lines).saturating_sub(viewport.height);
    let from_bottom = app.scroll_from_bottom().min(max_offset);
    (lines, max_offset - from_bottom)
}

fn content_style(message: &Message, theme: &Theme) -> ratatui::style::Style {
    match message.role {
        Role::User => theme.user_text_style,
        Role::Assistant if message.is_pending() => theme.pending_text_style,
        Role::Assistant if message.is_error() => theme.error_text_style,
        Role::Assistant => theme.assistant_text_style,
    }
}

/// Pre-wrapped transcript rows, oldest message first, with a blank row
/// between messages.
pub fn build_transcript_lines(
    messages: &[Message],
    width: u16,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (index, message) in messages.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }

        let prefix = format!("{}: ", message.role.label());
        let prefix_style = match message.role {
            Role::User => theme.user_prefix_style,
            Role::Assistant => theme.assistant_prefix_style,
        };
        let body_style = content_style(message, theme);

        let rows = wrap_text(&format!("{prefix}{}", message.content), usize::from(width));
        for (row_index, row) in rows.into_iter().enumerate() {
            let line = match row.strip_prefix(&prefix) {
                Some(rest) if row_index == 0 => Line::from(vec![
                    Span::styled(prefix.clone(), prefix_style),
                    Span::styled(rest.to_string(), body_style),
                ]),
                _ => Line::from(Span::styled(row, body_style)),
            };
            lines.push(line);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chat_client::ChatOutcome;
    use crate::utils::test_utils::create_test_app;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn buffer_rows(buffer: &Buffer) -> Vec<String> {
        let width = usize::from(buffer.area.width);
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    fn draw(app: &App, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        terminal.draw(|f| ui(f, app)).expect("draw");
        terminal.backend().buffer().clone()
    }

    #[test]
    fn renders_chrome_input_and_send_control() {
        let app = create_test_app();
        let text = buffer_rows(&draw(&app, 60, 16)).join("\n");

        assert!(text.contains(APP_HEADER));
        assert!(text.contains("GPT Chatbot"));
        assert!(text.contains("Type your message and press Enter…"));
        assert!(text.contains(SEND_LABEL));
        assert!(text.contains("http://localhost:5000"));
    }

    #[test]
    fn renders_role_labels_and_contents() {
        let mut app = create_test_app();
        app.set_input("hello");
        let pending = app.submit().unwrap();
        let text = buffer_rows(&draw(&app, 60, 16)).join("\n");
        assert!(text.contains("You: hello"));
        assert!(text.contains("Bot: …thinking"));

        app.apply_outcome(pending.placeholder_id, &ChatOutcome::Reply("Hello!".into()));
        let text = buffer_rows(&draw(&app, 60, 16)).join("\n");
        assert!(text.contains("Bot: Hello!"));
        assert!(!text.contains("thinking"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let mut app = create_test_app();
        app.set_input("first");
        app.submit();
        app.set_input("draft in progress");

        let mut terminal = Terminal::new(TestBackend::new(50, 14)).expect("terminal");
        terminal.draw(|f| ui(f, &app)).expect("draw");
        let first = terminal.backend().buffer().clone();
        terminal.draw(|f| ui(f, &app)).expect("draw");

        assert_eq!(&first, terminal.backend().buffer());
        assert_eq!(first, draw(&app, 50, 14));
    }

    #[test]
    fn transcript_lines_wrap_and_separate_messages() {
        let mut app = create_test_app();
        app.set_input("one two three four");
        app.submit();

        let lines = build_transcript_lines(app.conversation.messages(), 20, &Theme::default());
        let rows: Vec<String> = lines.iter().map(|line| line.to_string()).collect();
        assert_eq!(rows, vec!["You: one two three", "four", "", "Bot: …thinking"]);
    }

    #[test]
    fn control_characters_in_replies_are_not_drawn() {
        let mut app = create_test_app();
        app.set_input("hi");
        let pending = app.submit().unwrap();
        app.apply_outcome(
            pending.placeholder_id,
            &ChatOutcome::Reply("alpha\r\nbeta\tgamma".into()),
        );

        let lines = build_transcript_lines(app.conversation.messages(), 40, &Theme::default());
        let rows: Vec<String> = lines.iter().map(|line| line.to_string()).collect();
        assert_eq!(rows, vec!["You: hi", "", "Bot: alpha", "beta    gamma"]);

        let buffer = draw(&app, 60, 16);
        assert!(buffer
            .content
            .iter()
            .all(|cell| !cell.symbol().chars().any(char::is_control)));
    }

    #[test]
    fn newest_messages_stay_visible_when_transcript_overflows() {
        let mut app = create_test_app();
        for index in 0..10 {
            app.set_input(&format!("message {index}"));
            app.submit();
        }

        let text = buffer_rows(&draw(&app, 40, 14)).join("\n");
        assert!(text.contains("You: message 9"));
        assert!(!text.contains("You: message 0"));
    }

    #[test]
    fn scrolling_up_reveals_older_messages() {
        let mut app = create_test_app();
        for index in 0..10 {
            app.set_input(&format!("message {index}"));
            app.submit();
        }
        let area = Rect::new(0, 0, 40, 14);
        let max = max_scroll_offset(&app, area);
        assert!(max > 0);

        app.scroll_up(u16::MAX, max);
        let text = buffer_rows(&draw(&app, 40, 14)).join("\n");
        assert!(text.contains("You: message 0"));
        assert!(!text.contains("You: message 9"));
    }
}
