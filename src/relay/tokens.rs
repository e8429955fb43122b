//! Token estimation.
//!
//! A constant-factor heuristic (1 token ≈ 4 characters), not a real
//! tokenizer. Good enough for request-size observability.

use serde_json::Value;

/// Approximate token count for a piece of text: `ceil(chars / 4)`.
pub fn estimate_tokens(text: &str) -> u64 {
    (text.chars().count() as u64).div_ceil(4)
}

/// Per-message estimate, kept for structured logging.
#[derive(Debug, PartialEq, Eq)]
pub struct MessageEstimate {
    pub index: usize,
    pub role: String,
    pub tokens: u64,
}

/// Estimate tokens for each entry of the body's `messages` array.
///
/// The body is an opaque JSON document; a missing `messages` field yields an
/// empty list, and missing, null, or non-string `content` counts as 0 tokens.
pub fn message_estimates(body: &Value) -> Vec<MessageEstimate> {
    let Some(messages) = body.get("messages").and_then(Value::as_array) else {
        return Vec::new();
    };

    messages
        .iter()
        .enumerate()
        .map(|(index, msg)| MessageEstimate {
            index,
            role: msg
                .get("role")
                .and_then(Value::as_str)
                .unwrap_or("unknown")
                .to_string(),
            tokens: msg
                .get("content")
                .and_then(Value::as_str)
                .map(estimate_tokens)
                .unwrap_or(0),
        })
        .collect()
}

/// Total estimated tokens across all messages in the body.
pub fn estimate_total(body: &Value) -> u64 {
    message_estimates(body).iter().map(|e| e.tokens).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_text_is_zero() {
        assert_eq!(estimate_tokens(""), 0);
    }

    #[test]
    fn rounds_up_to_next_token() {
        assert_eq!(estimate_tokens("hi"), 1);
        assert_eq!(estimate_tokens("abcd"), 1);
        assert_eq!(estimate_tokens("abcde"), 2);
        assert_eq!(estimate_tokens("abcdefgh"), 2);
    }

    #[test]
    fn counts_characters_not_bytes() {
        // four characters, twelve bytes
        assert_eq!(estimate_tokens("日本語だ"), 1);
    }

    #[test]
    fn missing_messages_field_is_empty() {
        assert_eq!(message_estimates(&json!({"model": "x"})), Vec::new());
        assert_eq!(estimate_total(&json!({})), 0);
    }

    #[test]
    fn non_array_messages_is_empty() {
        assert_eq!(message_estimates(&json!({"messages": "nope"})), Vec::new());
    }

    #[test]
    fn missing_null_or_non_string_content_counts_zero() {
        let body = json!({
            "messages": [
                {"role": "system"},
                {"role": "user", "content": null},
                {"role": "user", "content": [{"type": "text", "text": "hi"}]},
            ]
        });
        let estimates = message_estimates(&body);
        assert_eq!(estimates.len(), 3);
        assert!(estimates.iter().all(|e| e.tokens == 0));
        assert_eq!(estimate_total(&body), 0);
    }

    #[test]
    fn totals_across_messages() {
        let body = json!({
            "messages": [
                {"role": "system", "content": "You are a helpful assistant."},
                {"role": "user", "content": "hi"},
            ]
        });
        // 28 chars -> 7 tokens, 2 chars -> 1 token
        let estimates = message_estimates(&body);
        assert_eq!(estimates[0].tokens, 7);
        assert_eq!(estimates[0].role, "system");
        assert_eq!(estimates[1].tokens, 1);
        assert_eq!(estimate_total(&body), 8);
    }

    #[test]
    fn single_short_user_message() {
        let body = json!({"messages": [{"role": "user", "content": "hi"}]});
        assert_eq!(estimate_total(&body), 1);
    }
}
