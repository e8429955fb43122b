//! HTTP relay server module.
//!
//! This module provides the OpenAI-compatible HTTP surface that accepts
//! chat-completion requests and forwards them to the upstream API.

mod handlers;
mod server;
pub mod tokens;

pub use server::{create_router, run_server, AppState, MAX_BODY_BYTES};
