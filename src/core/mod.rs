pub mod app;
pub mod chat_client;
pub mod chat_service;
pub mod config;
pub mod conversation;
pub mod message;
pub mod text_wrapping;
