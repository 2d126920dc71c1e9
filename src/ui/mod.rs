//! Terminal UI layer for the chat view.
//!
//! - [`chat_loop`]: terminal setup and the event loop that feeds input into
//!   [`crate::core::app::App`] and applies chat outcomes.
//! - [`renderer`] and [`layout`]: frame composition.
//! - [`theme`]: colours and text styles.

pub mod chat_loop;
pub mod layout;
pub mod renderer;
pub mod theme;
