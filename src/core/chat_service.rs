use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::core::chat_client::{ChatEndpoint, ChatOutcome};
use crate::core::message::MessageId;

/// A send that has been recorded in the conversation but not yet issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingExchange {
    pub placeholder_id: MessageId,
    pub text: String,
}

/// Runs chat requests in the background and reports each outcome tagged
/// with the placeholder it belongs to.
#[derive(Clone)]
pub struct ChatService {
    endpoint: Arc<dyn ChatEndpoint>,
    tx: mpsc::UnboundedSender<(MessageId, ChatOutcome)>,
}

impl ChatService {
    pub fn new(
        endpoint: Arc<dyn ChatEndpoint>,
    ) -> (Self, mpsc::UnboundedReceiver<(MessageId, ChatOutcome)>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { endpoint, tx }, rx)
    }

    pub fn spawn_exchange(&self, exchange: PendingExchange) {
        let endpoint = Arc::clone(&self.endpoint);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let PendingExchange {
                placeholder_id,
                text,
            } = exchange;

            let outcome = run_exchange(endpoint.as_ref(), &text).await;
            if tx.send((placeholder_id, outcome)).is_err() {
                debug!(%placeholder_id, "chat outcome dropped; receiver closed");
            }
        });
    }
}

/// Performs one round trip and folds any failure into the outcome.
pub async fn run_exchange(endpoint: &dyn ChatEndpoint, text: &str) -> ChatOutcome {
    let outcome = ChatOutcome::from(endpoint.send(text).await);
    match &outcome {
        ChatOutcome::Failed(detail) => warn!(%detail, "chat request failed"),
        ChatOutcome::NoReply => debug!("chat endpoint returned no reply"),
        ChatOutcome::Reply(reply) => {
            debug!(chars = reply.chars().count(), "chat reply received")
        }
    }
    outcome
}
