use super::*;
use crate::cli::say::say_once;
use crate::core::chat_client::HttpChatEndpoint;
use crate::core::message::{ERROR_MARKER, NO_REPLY_CONTENT};
use crate::utils::test_utils::{spawn_fake_endpoint, FakeResponse};

#[test]
fn no_subcommand_means_chat() {
    let args = Args::try_parse_from(["chatpane"]).unwrap();
    assert!(args.command.is_none());
    assert!(args.endpoint.is_none());
}

#[test]
fn endpoint_flag_applies_to_subcommands() {
    let args =
        Args::try_parse_from(["chatpane", "--endpoint", "http://h:1", "say", "hi"]).unwrap();
    assert_eq!(args.endpoint.as_deref(), Some("http://h:1"));
    assert_eq!(
        args.command,
        Some(Commands::Say {
            prompt: vec!["hi".into()]
        })
    );
}

#[test]
fn say_collects_every_word() {
    let args = Args::try_parse_from(["chatpane", "say", "what", "is", "-1?"]).unwrap();
    assert_eq!(
        args.command,
        Some(Commands::Say {
            prompt: vec!["what".into(), "is".into(), "-1?".into()]
        })
    );
}

#[test]
fn set_endpoint_normalizes_and_stores() {
    let mut config = Config::default();
    let value = vec!["http://chat.local:8080/".to_string()];

    let stored = set_config_value(&mut config, "endpoint", Some(&value)).unwrap();

    assert_eq!(stored.as_deref(), Some("http://chat.local:8080"));
    assert_eq!(config.endpoint.as_deref(), Some("http://chat.local:8080"));
}

#[test]
fn set_without_value_changes_nothing() {
    let mut config = Config::default();
    assert_eq!(set_config_value(&mut config, "endpoint", None).unwrap(), None);
    assert_eq!(config, Config::default());
}

#[test]
fn unknown_keys_are_rejected() {
    let mut config = Config::default();
    let err = set_config_value(&mut config, "model", Some(&["x".to_string()])).unwrap_err();
    assert!(err.to_string().contains("model"));
    assert!(unset_config_value(&mut config, "model").is_err());
}

#[test]
fn unset_endpoint_clears_it() {
    let mut config = Config {
        endpoint: Some("http://h".into()),
    };
    unset_config_value(&mut config, "endpoint").unwrap();
    assert_eq!(config.endpoint, None);
}

#[tokio::test]
async fn say_prints_reply_or_fallback() {
    let server = spawn_fake_endpoint(|request| {
        if request.body.contains("silent") {
            FakeResponse::json(200, "{}")
        } else {
            FakeResponse::json(200, r#"{"reply":"pong"}"#)
        }
    });
    let endpoint = HttpChatEndpoint::new(reqwest::Client::new(), &server.base_url);

    assert_eq!(say_once(&endpoint, "ping").await, Ok("pong".to_string()));
    assert_eq!(
        say_once(&endpoint, "silent").await,
        Ok(NO_REPLY_CONTENT.to_string())
    );
}

#[tokio::test]
async fn say_reports_server_error_with_marker() {
    let server =
        spawn_fake_endpoint(|_| FakeResponse::json(500, r#"{"error":"model unavailable"}"#));
    let endpoint = HttpChatEndpoint::new(reqwest::Client::new(), &server.base_url);

    let message = say_once(&endpoint, "ping").await.unwrap_err();
    assert_eq!(message, format!("{ERROR_MARKER}model unavailable"));
}
