//! Axum route handlers for the generator API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::generator::analysis::EmailAnalysis;
use crate::generator::composer::{analyze_email, generate_and_analyze, ComposeInput};
use crate::heuristics::{extract_features, EmailFeatures};
use crate::request::{non_blank, non_empty};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateEmailRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub sender_name: Option<String>,
    #[serde(default)]
    pub recipient_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateEmailResponse {
    pub original_message: String,
    pub formal_email: String,
    pub analysis: EmailAnalysis,
    pub components: EmailFeatures,
    pub generation_timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeExistingRequest {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeExistingResponse {
    pub email_content: String,
    pub analysis: EmailAnalysis,
    pub components: EmailFeatures,
    pub analysis_timestamp: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /generate_email
///
/// Composes a formal email from a casual message, then critiques the result.
pub async fn handle_generate_email(
    State(state): State<AppState>,
    payload: Result<Json<GenerateEmailRequest>, JsonRejection>,
) -> Result<Json<GenerateEmailResponse>, AppError> {
    let Json(request) = payload?;

    let message = non_empty(request.message)
        .ok_or_else(|| AppError::Validation("No message provided".to_string()))?;
    let sender_name = non_blank(request.sender_name);
    let recipient_name = non_blank(request.recipient_name);

    info!("Generating formal email ({} chars of input)", message.len());

    let input = ComposeInput {
        message: &message,
        sender_name: sender_name.as_deref(),
        recipient_name: recipient_name.as_deref(),
        date: Local::now().date_naive(),
    };
    let composed = generate_and_analyze(
        state.provider.as_ref(),
        state.config.groq_api_key.as_deref(),
        &input,
    )
    .await;

    Ok(Json(GenerateEmailResponse {
        original_message: message,
        formal_email: composed.formal_email,
        analysis: composed.analysis,
        components: composed.components,
        generation_timestamp: Utc::now(),
    }))
}

/// POST /analyze_existing
///
/// Critiques an email the caller already wrote.
pub async fn handle_analyze_existing(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeExistingRequest>, JsonRejection>,
) -> Result<Json<AnalyzeExistingResponse>, AppError> {
    let Json(request) = payload?;

    let content = non_empty(request.content)
        .ok_or_else(|| AppError::Validation("No email content provided".to_string()))?;

    info!("Analyzing existing email ({} chars)", content.len());

    let analysis = analyze_email(
        state.provider.as_ref(),
        state.config.groq_api_key.as_deref(),
        &content,
    )
    .await;
    let components = extract_features(&content);

    Ok(Json(AnalyzeExistingResponse {
        email_content: content,
        analysis,
        components,
        analysis_timestamp: Utc::now(),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
