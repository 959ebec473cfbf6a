//! Formal email composition and critique against the model provider.
//!
//! Flow for /generate_email: compose → (if composed) critique → extract features.
//! Both steps are total: provider failures become in-band payloads.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::generator::analysis::{parse_email_analysis, EmailAnalysis};
use crate::generator::prompts::{
    build_analysis_prompt, build_compose_prompt, ANALYSIS_PARAMS, COMPOSE_PARAMS,
};
use crate::heuristics::{extract_features, EmailFeatures};
use crate::llm_client::{CompletionProvider, LlmError};

pub const DEFAULT_SENDER_NAME: &str = "[Your Name]";
pub const DEFAULT_RECIPIENT_NAME: &str = "[Recipient Name]";

/// Inputs for composing one formal email.
#[derive(Debug, Clone)]
pub struct ComposeInput<'a> {
    pub message: &'a str,
    pub sender_name: Option<&'a str>,
    pub recipient_name: Option<&'a str>,
    pub date: NaiveDate,
}

/// Everything the generator routes report about one email.
#[derive(Debug, Clone)]
pub struct ComposedEmail {
    pub formal_email: String,
    pub analysis: EmailAnalysis,
    pub components: EmailFeatures,
}

/// Formats a date the way it appears in a letter: "October 16, 2026".
pub fn letter_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

/// Returns the provider credential or `MissingApiKey` without calling out.
fn require_key(api_key: Option<&str>) -> Result<&str, LlmError> {
    api_key
        .filter(|k| !k.trim().is_empty())
        .ok_or(LlmError::MissingApiKey)
}

/// Asks the model for a formal rewrite of a casual message.
pub async fn compose_formal_email(
    provider: &dyn CompletionProvider,
    api_key: Option<&str>,
    input: &ComposeInput<'_>,
) -> Result<String, LlmError> {
    let api_key = require_key(api_key)?;
    let prompt = build_compose_prompt(
        input.message,
        &letter_date(input.date),
        input.sender_name.unwrap_or(DEFAULT_SENDER_NAME),
        input.recipient_name.unwrap_or(DEFAULT_RECIPIENT_NAME),
    );

    provider.complete(api_key, &prompt, COMPOSE_PARAMS).await
}

/// Asks the model to critique `email`. Never fails.
pub async fn analyze_email(
    provider: &dyn CompletionProvider,
    api_key: Option<&str>,
    email: &str,
) -> EmailAnalysis {
    let reply = match require_key(api_key) {
        Ok(key) => {
            provider
                .complete(key, &build_analysis_prompt(email), ANALYSIS_PARAMS)
                .await
        }
        Err(e) => Err(e),
    };

    match reply {
        Ok(reply) => parse_email_analysis(&reply),
        Err(e) => {
            warn!("Email analysis call failed: {e}");
            EmailAnalysis::provider_error(&e.to_string())
        }
    }
}

/// Composes a formal email, then critiques what was composed.
/// When composition fails the critique call is skipped.
pub async fn generate_and_analyze(
    provider: &dyn CompletionProvider,
    api_key: Option<&str>,
    input: &ComposeInput<'_>,
) -> ComposedEmail {
    match compose_formal_email(provider, api_key, input).await {
        Ok(formal_email) => {
            info!("Composed formal email ({} chars)", formal_email.len());
            let analysis = analyze_email(provider, api_key, &formal_email).await;
            let components = extract_features(&formal_email);
            ComposedEmail {
                formal_email,
                analysis,
                components,
            }
        }
        Err(e) => {
            warn!("Formal email composition failed: {e}");
            let formal_email = format!("Error generating email: {e}");
            ComposedEmail {
                components: extract_features(&formal_email),
                analysis: EmailAnalysis::provider_error(&e.to_string()),
                formal_email,
            }
        }
    }
}
