//! Command-line interface parsing and handling

pub mod health;
pub mod say;

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::cli::health::run_health;
use crate::cli::say::run_say;
use crate::core::config::{Config, ENDPOINT_ENV_VAR};
use crate::ui::chat_loop::run_chat;
use crate::utils::logging::init_file_logging;

#[derive(Parser, Debug)]
#[command(name = "chatpane")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_DESCRIBE"), ")"))]
#[command(about = "A minimal terminal chat client for an HTTP chat endpoint")]
#[command(
    long_about = "Chatpane is a full-screen terminal chat window. Each message you send is \
POSTed as {\"message\": ...} to <endpoint>/chat and the reply is shown in the transcript.\n\n\
Endpoint resolution (first match wins):\n\
  --endpoint <URL>       Command-line flag\n\
  CHATPANE_ENDPOINT      Environment variable\n\
  chatpane set endpoint  Saved configuration\n\
  http://localhost:5000  Built-in default\n\n\
Controls:\n\
  Enter                  Send the message\n\
  Alt+Enter/Shift+Enter  Insert a newline\n\
  Mouse wheel            Scroll through the transcript\n\
  Esc/Ctrl+C             Quit"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base URL of the chat server
    #[arg(short = 'e', long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Write debug logs to this file
    #[arg(short = 'l', long, global = true, value_name = "FILE")]
    pub log: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Open the chat window (default)
    Chat,
    /// Send one message and print the reply
    Say {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        prompt: Vec<String>,
    },
    /// Check that the endpoint is up
    Health,
    /// Set a configuration value, or show the configuration when no value is given
    Set {
        key: String,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Option<Vec<String>>,
    },
    /// Clear a configuration value
    Unset { key: String },
}

#[derive(Debug)]
pub struct UnknownConfigKey(pub String);

impl std::fmt::Display for UnknownConfigKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown config key: {} (supported: endpoint)", self.0)
    }
}

impl Error for UnknownConfigKey {}

/// Applies `set <key> <value...>`. Returns `Ok(None)` when there was no value
/// to set, in which case the caller shows the configuration instead.
pub fn set_config_value(
    config: &mut Config,
    key: &str,
    value: Option<&[String]>,
) -> Result<Option<String>, UnknownConfigKey> {
    match key {
        "endpoint" => {
            let value = value.map(|parts| parts.join(" ")).unwrap_or_default();
            if value.trim().is_empty() {
                return Ok(None);
            }
            config.set_endpoint(&value);
            Ok(config.endpoint.clone())
        }
        other => Err(UnknownConfigKey(other.to_string())),
    }
}

pub fn unset_config_value(config: &mut Config, key: &str) -> Result<(), UnknownConfigKey> {
    match key {
        "endpoint" => {
            config.unset_endpoint();
            Ok(())
        }
        other => Err(UnknownConfigKey(other.to_string())),
    }
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tokio::runtime::Runtime::new()?.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    if let Some(path) = args.log.as_deref() {
        init_file_logging(path)?;
    }

    match args.command.unwrap_or(Commands::Chat) {
        Commands::Set { key, value } => {
            let mut config = Config::load()?;
            match set_config_value(&mut config, &key, value.as_deref())? {
                Some(endpoint) => {
                    let path = config.save()?;
                    debug!(path = %path.display(), "saved configuration");
                    println!("✅ Set {key} to: {endpoint}");
                }
                None => config.print_all(),
            }
            Ok(())
        }
        Commands::Unset { key } => {
            let mut config = Config::load()?;
            unset_config_value(&mut config, &key)?;
            config.save()?;
            println!("✅ Unset {key}");
            Ok(())
        }
        command => {
            let env_endpoint = std::env::var(ENDPOINT_ENV_VAR).ok();
            let endpoint = Config::load()?
                .resolve_endpoint(args.endpoint.as_deref(), env_endpoint.as_deref());

            match command {
                Commands::Say { prompt } => run_say(prompt, &endpoint).await,
                Commands::Health => run_health(&endpoint).await,
                _ => run_chat(endpoint).await,
            }
        }
    }
}

#[cfg(test)]
mod tests;
