//! Chatpane is a minimal terminal chat window for an HTTP chat endpoint.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the conversation, the input buffer, configuration, and the
//!   client that talks to the endpoint.
//! - [`ui`] renders the terminal interface and runs the interactive event loop
//!   that drives user input and display updates.
//! - [`api`] defines the JSON payloads exchanged with the endpoint.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`], which dispatches into [`ui::chat_loop`] for
//! interactive sessions.

pub mod api;
pub mod cli;
pub mod core;
pub mod ui;
pub mod utils;
