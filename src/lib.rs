//! openrelay - minimal chat-completion relay for OpenRouter
//!
//! This library provides the core functionality for the openrelay proxy:
//! configuration, the relay HTTP server, and per-request file logging.

pub mod config;
pub mod error;
pub mod relay;
pub mod storage;

pub use config::Config;
pub use error::{Error, Result};
