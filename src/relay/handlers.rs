//! HTTP request handlers.

use axum::{
    extract::State,
    http::{header, HeaderMap},
    Json,
};
use serde_json::Value;

use super::server::{AppState, X_API_KEY_HEADER};
use super::tokens;
use crate::error::Error;
use crate::storage::LogStore;

/// Handle POST /v1/chat/completions
///
/// Writes the inbound body to a prompt log file, forwards it upstream with
/// the configured model and credential substituted, writes the upstream body
/// to a response log file, and echoes that body back to the caller.
pub async fn chat_completions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>, Error> {
    // Caller credential is observed for debugging only, never validated or
    // forwarded upstream.
    let client_key = headers
        .get(header::AUTHORIZATION)
        .or_else(|| headers.get(X_API_KEY_HEADER));
    tracing::debug!(present = client_key.is_some(), "caller credential header");

    // Request log first: it must exist even if the upstream call fails.
    let token = LogStore::timestamp_token();
    state.logs.write_request(&token, &body).await;

    let estimates = tokens::message_estimates(&body);
    for est in &estimates {
        tracing::debug!(
            index = est.index,
            role = %est.role,
            tokens = est.tokens,
            "message token estimate"
        );
    }
    let total_tokens: u64 = estimates.iter().map(|e| e.tokens).sum();
    tracing::info!(
        estimated_tokens = total_tokens,
        model = %state.config.model,
        "forwarding chat completion"
    );

    let payload = override_model(body, &state.config.model);

    let upstream_response = state
        .http_client
        .post(&state.config.upstream_url)
        .bearer_auth(state.config.api_key.expose_secret())
        .json(&payload)
        .send()
        .await?;

    // Non-success upstream statuses are passed through with their JSON body
    // under success framing; the status code is not propagated.
    let status = upstream_response.status();
    if !status.is_success() {
        tracing::warn!(%status, "upstream returned non-success status, passing body through");
    }

    let data: Value = upstream_response.json().await.map_err(Error::UpstreamBody)?;

    state.logs.write_response(&token, &data).await;

    Ok(Json(data))
}

/// Handle GET / - health check
pub async fn health() -> &'static str {
    "openrelay is running"
}

/// Outbound payload: the inbound body with `model` forcibly replaced.
///
/// Non-object bodies are forwarded untouched; the upstream rejects them with
/// its own error, which is passed through like any other response.
fn override_model(mut body: Value, model: &str) -> Value {
    if let Some(obj) = body.as_object_mut() {
        obj.insert("model".to_string(), Value::String(model.to_string()));
    }
    body
}
