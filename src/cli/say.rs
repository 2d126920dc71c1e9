//! TUI-less "say" command

use std::error::Error;

use crate::core::chat_client::{ChatEndpoint, ChatOutcome, HttpChatEndpoint};
use crate::core::chat_service::run_exchange;

/// Sends `prompt` and returns the text that would replace the placeholder.
///
/// Failures come back as `Err` carrying the error-marked content.
pub async fn say_once(endpoint: &dyn ChatEndpoint, prompt: &str) -> Result<String, String> {
    match run_exchange(endpoint, prompt).await {
        outcome @ ChatOutcome::Failed(_) => Err(outcome.content()),
        outcome => Ok(outcome.content()),
    }
}

pub async fn run_say(prompt: Vec<String>, endpoint: &str) -> Result<(), Box<dyn Error>> {
    let prompt = prompt.join(" ");
    if prompt.trim().is_empty() {
        eprintln!("Usage: chatpane say <prompt>");
        std::process::exit(1);
    }

    let client = reqwest::Client::builder().build()?;
    let endpoint = HttpChatEndpoint::new(client, endpoint);

    match say_once(&endpoint, prompt.trim()).await {
        Ok(reply) => {
            println!("{reply}");
            Ok(())
        }
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(1);
        }
    }
}
