use std::error::Error;

use crate::core::chat_client::{HealthStatus, HttpChatEndpoint};

pub fn format_health(base_url: &str, status: &HealthStatus) -> String {
    let mut line = if status.is_healthy() {
        format!("✅ {base_url} is up (HTTP {})", status.http_status)
    } else {
        format!("⚠️  {base_url} answered HTTP {}", status.http_status)
    };

    let report = &status.report;
    if let Some(reported) = &report.status {
        line.push_str(&format!(", status: {reported}"));
    }
    if let Some(model) = &report.model {
        line.push_str(&format!(", model: {model}"));
    }
    if let Some(code) = report.code {
        line.push_str(&format!(", upstream code: {code}"));
    }
    line
}

pub async fn run_health(endpoint: &str) -> Result<(), Box<dyn Error>> {
    let client = reqwest::Client::builder().build()?;
    let endpoint = HttpChatEndpoint::new(client, endpoint);

    let status = match endpoint.check_health().await {
        Ok(status) => status,
        Err(err) => {
            eprintln!("❌ {} is unreachable: {err}", endpoint.base_url());
            std::process::exit(1);
        }
    };

    println!("{}", format_health(endpoint.base_url(), &status));
    if !status.is_healthy() {
        std::process::exit(1);
    }
    Ok(())
}
