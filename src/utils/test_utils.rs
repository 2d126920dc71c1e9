//! Shared fixtures for unit tests: a local HTTP chat endpoint and an
//! in-memory endpoint whose replies are released by hand.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;

use crate::core::app::App;
use crate::core::chat_client::{ChatEndpoint, ChatError};

pub fn create_test_app() -> App {
    App::new("http://localhost:5000")
}

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct FakeResponse {
    status: u16,
    body: String,
    delay: Duration,
}

impl FakeResponse {
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

pub struct FakeEndpoint {
    pub base_url: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    _server: JoinHandle<()>,
}

impl FakeEndpoint {
    pub async fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().await.clone()
    }
}

/// Serves every connection with `handler`, one task per connection.
///
/// Must be called from inside a Tokio runtime.
pub fn spawn_fake_endpoint<F>(handler: F) -> FakeEndpoint
where
    F: Fn(&CapturedRequest) -> FakeResponse + Send + Sync + 'static,
{
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").expect("listener should bind");
    std_listener
        .set_nonblocking(true)
        .expect("listener should switch to non-blocking");
    let addr = std_listener.local_addr().expect("local addr should resolve");
    let listener = TcpListener::from_std(std_listener).expect("listener should register");

    let requests = Arc::new(Mutex::new(Vec::new()));
    let captured = Arc::clone(&requests);
    let handler = Arc::new(handler);

    let server = tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let captured = Arc::clone(&captured);
            let handler = Arc::clone(&handler);
            tokio::spawn(async move {
                let Ok(request) = read_request(&mut stream).await else {
                    return;
                };
                let response = (handler.as_ref())(&request);
                captured.lock().await.push(request);
                if !response.delay.is_zero() {
                    tokio::time::sleep(response.delay).await;
                }
                let _ = write_response(&mut stream, &response).await;
            });
        }
    });

    FakeEndpoint {
        base_url: format!("http://{addr}"),
        requests,
        _server: server,
    }
}

/// A base URL that refuses connections.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("listener should bind");
    let addr = listener.local_addr().expect("local addr should resolve");
    drop(listener);
    format!("http://{addr}")
}

fn find_header_end(buffer: &[u8]) -> Option<usize> {
    buffer
        .windows(4)
        .position(|window| window == b"\r\n\r\n")
        .map(|pos| pos + 4)
}

async fn read_request(stream: &mut TcpStream) -> std::io::Result<CapturedRequest> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        if let Some(end) = find_header_end(&buffer) {
            break end;
        }
        let read = stream.read(&mut chunk).await?;
        if read == 0 {
            return Err(std::io::ErrorKind::UnexpectedEof.into());
        }
        buffer.extend_from_slice(&chunk[..read]);
    };

    let head = String::from_utf8_lossy(&buffer[..header_end]).to_string();
    let mut lines = head.lines();
    let mut request_line = lines.next().unwrap_or_default().split_whitespace();
    let method = request_line.next().unwrap_or_default().to_string();
    let path = request_line.next().unwrap_or_default().to_string();
    let content_length = lines
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buffer.len() < header_end + content_length {
        let read = stream.read(&mut chunk).await?;
        if read == 0 {
            return Err(std::io::ErrorKind::UnexpectedEof.into());
        }
        buffer.extend_from_slice(&chunk[..read]);
    }

    let body = String::from_utf8_lossy(&buffer[header_end..header_end + content_length]).to_string();
    Ok(CapturedRequest { method, path, body })
}

async fn write_response(stream: &mut TcpStream, response: &FakeResponse) -> std::io::Result<()> {
    let reason = if (200..300).contains(&response.status) {
        "OK"
    } else {
        "Error"
    };
    let payload = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        reason,
        response.body.len(),
        response.body
    );
    stream.write_all(payload.as_bytes()).await?;
    stream.flush().await?;
    stream.shutdown().await
}

type GatedReply = Result<Option<String>, ChatError>;

/// Endpoint whose replies are released explicitly, one gate per message.
#[derive(Default)]
pub struct GatedEndpoint {
    gates: std::sync::Mutex<HashMap<String, oneshot::Receiver<GatedReply>>>,
}

impl GatedEndpoint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `message`; the returned sender settles its request.
    pub fn gate(&self, message: &str) -> oneshot::Sender<GatedReply> {
        let (tx, rx) = oneshot::channel();
        self.gates
            .lock()
            .expect("gate map lock")
            .insert(message.to_string(), rx);
        tx
    }
}

#[async_trait]
impl ChatEndpoint for GatedEndpoint {
    async fn send(&self, message: &str) -> Result<Option<String>, ChatError> {
        let gate = self.gates.lock().expect("gate map lock").remove(message);
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ChatError::Transport("gate dropped".into()))),
            None => Err(ChatError::Transport(format!("no gate for {message:?}"))),
        }
    }
}
