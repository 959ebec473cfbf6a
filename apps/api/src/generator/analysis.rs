//! Email analysis — the generator's critique shape and its reply parser.
//!
//! The model is asked for a bare JSON object but often wraps it in prose or
//! code fences, so parsing slices from the first `{` to the last `}`.

use serde::{Deserialize, Serialize};

/// Score used for every dimension when the reply cannot be parsed.
const PLACEHOLDER_SCORE: f32 = 8.0;
/// Max characters of the raw reply kept in the fallback improvement entry.
const EXCERPT_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailAnalysis {
    pub overall_score: f32,
    pub professionalism_score: f32,
    pub clarity_score: f32,
    pub tone_score: f32,
    pub tone: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EmailAnalysis {
    /// Canned analysis carrying an excerpt of a reply that did not parse.
    pub fn from_unparsed_reply(reply: &str) -> Self {
        Self {
            overall_score: PLACEHOLDER_SCORE,
            professionalism_score: PLACEHOLDER_SCORE,
            clarity_score: PLACEHOLDER_SCORE,
            tone_score: PLACEHOLDER_SCORE,
            tone: "Professional".to_string(),
            strengths: vec![],
            improvements: vec![excerpt(reply)],
            error: None,
        }
    }

    /// In-band payload for a failed provider call.
    pub fn provider_error(message: &str) -> Self {
        Self {
            overall_score: 0.0,
            professionalism_score: 0.0,
            clarity_score: 0.0,
            tone_score: 0.0,
            tone: "Error".to_string(),
            strengths: vec![],
            improvements: vec!["Analysis unavailable; the model provider could not be reached".to_string()],
            error: Some(format!("API Error: {message}")),
        }
    }
}

/// Parses the outermost `{...}` span of the reply, falling back to
/// `from_unparsed_reply` when there is none or it does not deserialize.
pub fn parse_email_analysis(reply: &str) -> EmailAnalysis {
    json_object_span(reply)
        .and_then(|span| serde_json::from_str(span).ok())
        .unwrap_or_else(|| EmailAnalysis::from_unparsed_reply(reply))
}

/// Slice from the first `{` through the last `}`, if they appear in that order.
fn json_object_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

fn excerpt(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
