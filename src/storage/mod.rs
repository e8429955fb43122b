//! Flat-file storage for per-request prompt/response logs.

pub mod logs;

pub use logs::LogStore;
