//! Axum route handler for the format check.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::heuristics::{basic_issues, character_count, word_count};
use crate::request::non_empty;
use crate::state::AppState;
use crate::validator::critique::{check_email_format, FormatCritique};

#[derive(Debug, Deserialize)]
pub struct CheckEmailRequest {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckEmailResponse {
    pub ai_analysis: FormatCritique,
    pub basic_issues: Vec<String>,
    pub word_count: usize,
    pub character_count: usize,
}

/// POST /check_email
///
/// Model critique (with the caller's own API key) plus local rule checks.
pub async fn handle_check_email(
    State(state): State<AppState>,
    payload: Result<Json<CheckEmailRequest>, JsonRejection>,
) -> Result<Json<CheckEmailResponse>, AppError> {
    let Json(request) = payload?;

    let content = non_empty(request.content)
        .ok_or_else(|| AppError::Validation("No email content provided".to_string()))?;
    let api_key = non_empty(request.api_key)
        .ok_or_else(|| AppError::Validation("No API key provided".to_string()))?;

    info!("Checking email format ({} chars)", content.len());

    let ai_analysis = check_email_format(state.provider.as_ref(), &api_key, &content).await;

    Ok(Json(CheckEmailResponse {
        ai_analysis,
        basic_issues: basic_issues(&content),
        word_count: word_count(&content),
        character_count: character_count(&content),
    }))
}
