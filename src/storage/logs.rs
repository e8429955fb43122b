//! Per-request log files.
//!
//! Every relayed request produces two pretty-printed JSON files sharing one
//! timestamp token: `prompt-<ts>.json` (the inbound body) and
//! `response-<ts>.json` (the upstream body). Files are write-once and never
//! read back, rotated, or deleted by this process.

use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Handle to the log directory.
#[derive(Debug, Clone)]
pub struct LogStore {
    dir: PathBuf,
}

impl LogStore {
    /// Open the log store, creating the directory if missing (idempotent).
    pub async fn init(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    /// Directory this store writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Filename-safe timestamp token for the current instant.
    ///
    /// ISO-8601 with millisecond precision, with `:` and `.` replaced by `-`
    /// (e.g. `2024-05-01T12-30-45-123Z`).
    pub fn timestamp_token() -> String {
        Utc::now()
            .to_rfc3339_opts(SecondsFormat::Millis, true)
            .replace([':', '.'], "-")
    }

    /// Write the inbound request body to `prompt-<token>.json`.
    ///
    /// A write failure is logged as a warning and swallowed; it must not
    /// abort the relay of the request itself.
    pub async fn write_request(&self, token: &str, body: &Value) {
        self.write(&format!("prompt-{token}.json"), body).await;
    }

    /// Write the upstream response body to `response-<token>.json`.
    ///
    /// Same failure tolerance as [`write_request`](Self::write_request).
    pub async fn write_response(&self, token: &str, body: &Value) {
        self.write(&format!("response-{token}.json"), body).await;
    }

    async fn write(&self, filename: &str, body: &Value) {
        let path = self.dir.join(filename);
        if let Err(e) = write_json(&path, body).await {
            tracing::warn!(path = %path.display(), error = %e, "failed to write log file");
        }
    }
}

async fn write_json(path: &Path, body: &Value) -> std::io::Result<()> {
    let pretty = serde_json::to_vec_pretty(body)?;
    tokio::fs::write(path, pretty).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn timestamp_token_has_no_colons_or_periods() {
        let token = LogStore::timestamp_token();
        assert!(!token.contains(':'), "token should not contain ':': {token}");
        assert!(!token.contains('.'), "token should not contain '.': {token}");
        assert!(token.ends_with('Z'), "token should be a UTC instant: {token}");
        // e.g. 2024-05-01T12-30-45-123Z
        assert_eq!(token.len(), 24, "unexpected token length: {token}");
    }

    #[tokio::test]
    async fn init_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("logs");
        LogStore::init(&dir).await.unwrap();
        let store = LogStore::init(&dir).await.unwrap();
        assert_eq!(store.dir(), dir.as_path());
    }

    #[tokio::test]
    async fn writes_pretty_printed_pair_with_shared_token() {
        let tmp = tempfile::tempdir().unwrap();
        let store = LogStore::init(tmp.path()).await.unwrap();

        let token = LogStore::timestamp_token();
        let request = json!({"messages": [{"role": "user", "content": "hi"}]});
        let response = json!({"id": "chatcmpl-1", "choices": []});

        store.write_request(&token, &request).await;
        store.write_response(&token, &response).await;

        let prompt_path = tmp.path().join(format!("prompt-{token}.json"));
        let response_path = tmp.path().join(format!("response-{token}.json"));

        let prompt_raw = std::fs::read_to_string(&prompt_path).unwrap();
        let response_raw = std::fs::read_to_string(&response_path).unwrap();

        // Pretty-printed, so multi-line
        assert!(prompt_raw.contains('\n'));

        let prompt_back: Value = serde_json::from_str(&prompt_raw).unwrap();
        let response_back: Value = serde_json::from_str(&response_raw).unwrap();
        assert_eq!(prompt_back, request);
        assert_eq!(response_back, response);
    }

    #[tokio::test]
    async fn write_failure_is_swallowed() {
        let tmp = tempfile::tempdir().unwrap();
        let store = LogStore::init(tmp.path()).await.unwrap();
        drop(tmp); // directory gone; writes must not panic

        store.write_request("t", &json!({"a": 1})).await;
        store.write_response("t", &json!({"b": 2})).await;
    }
}
