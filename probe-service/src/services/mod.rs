//! Service layer.
//!
//! One service lives here: [`chat_service`], the HTTP client for the
//! chat-completions exchange.

pub mod chat_service;

pub use chat_service::ChatService;
