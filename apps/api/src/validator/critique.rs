//! Format critique — asks the model to review an email and reads its reply.
//!
//! The reply is parsed whole. Any JSON object is kept as the model wrote it,
//! with defaults filled in for required keys it left out. Anything else is
//! wrapped as a single suggestion, so every outcome (including provider
//! failure) is a well-formed critique.

use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::warn;

use crate::llm_client::CompletionProvider;
use crate::validator::prompts::{build_format_check_prompt, FORMAT_CHECK_PARAMS};

/// The model's critique object. Always carries `rating`, `tone`, `suggestions`,
/// `grammar_issues` and `structure_tips`; other keys pass through untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormatCritique(Map<String, Value>);

impl FormatCritique {
    /// Keeps `fields` as-is and inserts placeholders for missing required keys.
    pub fn from_fields(mut fields: Map<String, Value>) -> Self {
        for (key, default) in [
            ("rating", json!("N/A")),
            ("tone", json!("Unable to determine")),
            ("suggestions", json!([])),
            ("grammar_issues", json!([])),
            ("structure_tips", json!([])),
        ] {
            fields.entry(key).or_insert(default);
        }
        Self(fields)
    }

    /// Wraps an unparseable reply so the text still reaches the caller.
    pub fn from_raw_reply(reply: &str) -> Self {
        Self::from_fields(Map::from_iter([("suggestions".to_string(), json!([reply]))]))
    }

    /// In-band payload for a failed provider call.
    pub fn provider_error(message: &str) -> Self {
        Self::from_fields(Map::from_iter([
            ("error".to_string(), json!(format!("API Error: {message}"))),
            ("rating".to_string(), json!(0)),
            ("tone".to_string(), json!("Error")),
            (
                "suggestions".to_string(),
                json!(["Please check your API key and try again"]),
            ),
        ]))
    }
}

/// Parses the whole reply as a JSON object, falling back to `from_raw_reply`
/// for invalid JSON or JSON that is not an object.
pub fn parse_format_critique(reply: &str) -> FormatCritique {
    match serde_json::from_str::<Value>(reply) {
        Ok(Value::Object(fields)) => FormatCritique::from_fields(fields),
        _ => FormatCritique::from_raw_reply(reply),
    }
}

/// Requests a critique of `email_content`. Never fails: provider errors come
/// back as `FormatCritique::provider_error`.
pub async fn check_email_format(
    provider: &dyn CompletionProvider,
    api_key: &str,
    email_content: &str,
) -> FormatCritique {
    let prompt = build_format_check_prompt(email_content);

    match provider.complete(api_key, &prompt, FORMAT_CHECK_PARAMS).await {
        Ok(reply) => parse_format_critique(&reply),
        Err(e) => {
            warn!("Format critique call failed: {e}");
            FormatCritique::provider_error(&e.to_string())
        }
    }
}
