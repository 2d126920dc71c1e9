//! Terminal event loop for the chat view.
//!
//! A background task forwards crossterm events over a channel. The loop
//! applies them to [`App`], hands submitted messages to the
//! [`ChatService`], and writes settled exchanges back into their
//! placeholders as they arrive, in whatever order the server answers.

pub mod keybindings;
pub mod lifecycle;

use std::{error::Error, sync::Arc, time::Duration};

use ratatui::crossterm::event::{
    self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::core::app::App;
use crate::core::chat_client::{ChatOutcome, HttpChatEndpoint};
use crate::core::chat_service::{ChatService, PendingExchange};
use crate::core::message::MessageId;
use crate::ui::layout::ChatLayout;
use crate::ui::renderer::{max_scroll_offset, ui};

use keybindings::{classify_key, KeyAction};
use lifecycle::{restore_terminal, setup_terminal, ChatTerminal};

const MOUSE_SCROLL_LINES: u16 = 3;

#[derive(Debug)]
pub enum UiEvent {
    Crossterm(Event),
}

fn spawn_event_reader(event_tx: mpsc::UnboundedSender<UiEvent>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            if let Ok(true) = event::poll(Duration::from_millis(10)) {
                match event::read() {
                    Ok(ev) => {
                        if event_tx.send(UiEvent::Crossterm(ev)).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        continue;
                    }
                }
            } else {
                tokio::task::yield_now().await;
            }
        }
    })
}

/// Applies one terminal event to `app`.
///
/// `area` is the current terminal size, used for scroll limits and for
/// hit-testing the Send control. Returns the exchange to start when the
/// event submitted a message.
pub fn handle_event(app: &mut App, event: Event, area: Rect) -> Option<PendingExchange> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match classify_key(&key) {
            KeyAction::Quit => {
                app.request_exit();
                None
            }
            KeyAction::Submit => app.submit(),
            KeyAction::InsertNewline => {
                app.insert_newline();
                None
            }
            KeyAction::Edit => {
                app.handle_input_key(key);
                None
            }
        },
        Event::Paste(text) => {
            app.insert_text(&text);
            None
        }
        Event::Mouse(mouse) => handle_mouse(app, mouse, area),
        _ => None,
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent, area: Rect) -> Option<PendingExchange> {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            let max_offset = max_scroll_offset(app, area);
            app.scroll_up(MOUSE_SCROLL_LINES, max_offset);
            None
        }
        MouseEventKind::ScrollDown => {
            app.scroll_down(MOUSE_SCROLL_LINES);
            None
        }
        MouseEventKind::Down(MouseButton::Left) => {
            let layout = ChatLayout::compute(area, app.input_line_count());
            if layout.is_on_send(mouse.column, mouse.row) {
                app.submit()
            } else {
                None
            }
        }
        _ => None,
    }
}

fn terminal_area(terminal: &ChatTerminal) -> Result<Rect, Box<dyn Error>> {
    let size = terminal.size()?;
    Ok(Rect::new(0, 0, size.width, size.height))
}

async fn event_loop(
    terminal: &mut ChatTerminal,
    app: &mut App,
    service: &ChatService,
    outcome_rx: &mut mpsc::UnboundedReceiver<(MessageId, ChatOutcome)>,
) -> Result<(), Box<dyn Error>> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<UiEvent>();
    let event_reader_handle = spawn_event_reader(event_tx);

    let result = 'main_loop: loop {
        if let Err(err) = terminal.draw(|f| ui(f, app)) {
            break 'main_loop Err(err.into());
        }

        tokio::select! {
            Some(UiEvent::Crossterm(ev)) = event_rx.recv() => {
                let area = match terminal_area(terminal) {
                    Ok(area) => area,
                    Err(err) => break 'main_loop Err(err),
                };
                if let Some(exchange) = handle_event(app, ev, area) {
                    service.spawn_exchange(exchange);
                }
            }
            Some((placeholder_id, outcome)) = outcome_rx.recv() => {
                app.apply_outcome(placeholder_id, &outcome);
            }
            else => break 'main_loop Ok(()),
        }

        if app.exit_requested() {
            break 'main_loop Ok(());
        }
    };

    event_reader_handle.abort();
    result
}

pub async fn run_chat(endpoint: String) -> Result<(), Box<dyn Error>> {
    let client = reqwest::Client::builder().build()?;
    let http_endpoint = HttpChatEndpoint::new(client, &endpoint);
    info!(endpoint = %http_endpoint.base_url(), "starting chat");

    let (service, mut outcome_rx) = ChatService::new(Arc::new(http_endpoint));
    let mut app = App::new(endpoint);

    let mut terminal = setup_terminal()?;
    let loop_result = event_loop(&mut terminal, &mut app, &service, &mut outcome_rx).await;
    let restore_result = restore_terminal(&mut terminal);

    debug!(
        messages = app.conversation.len(),
        pending = app.conversation.pending_count(),
        "chat closed"
    );
    first_error(loop_result, restore_result)
}

/// The loop's error wins over a failure to restore the terminal.
fn first_error(
    loop_result: Result<(), Box<dyn Error>>,
    restore_result: Result<(), Box<dyn Error>>,
) -> Result<(), Box<dyn Error>> {
    loop_result.and(restore_result)
}
