// All LLM prompt constants for the generator routes.

use crate::llm_client::CompletionParams;

pub const COMPOSE_PARAMS: CompletionParams = CompletionParams {
    model: "llama3-8b-8192",
    temperature: 0.7,
    max_tokens: 1000,
};

pub const ANALYSIS_PARAMS: CompletionParams = CompletionParams {
    model: "llama3-8b-8192",
    temperature: 0.3,
    max_tokens: 800,
};

/// Composition prompt template.
/// Replace: {message}, {date}, {sender_name}, {recipient_name}
pub const COMPOSE_PROMPT_TEMPLATE: &str = r#"Convert the following casual message into a complete, professional formal email.

Casual message:
{message}

Date: {date}
Sender name: {sender_name}
Recipient name: {recipient_name}

Requirements:
1. Start with a line of the form "Subject: <clear, specific subject>"
2. Open with a proper greeting addressed to the recipient (e.g. "Dear {recipient_name},")
3. State the purpose clearly and politely in well-structured paragraphs
4. Keep every fact from the casual message; do not invent details
5. End with a professional closing (e.g. "Sincerely,") followed by the sender's name on its own line

Return ONLY the email text, with no commentary before or after it."#;

/// Critique prompt template. Replace `{email_content}` before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the following email for professionalism, clarity, tone and structure.

Email:
{email_content}

Return a JSON object with this EXACT schema:
{
  "overall_score": 8,
  "professionalism_score": 8,
  "clarity_score": 8,
  "tone_score": 8,
  "tone": "Professional",
  "strengths": ["Clear subject line"],
  "improvements": ["Mention the exact return date"]
}

Scores are numbers from 1 to 10. "tone" is one of: Professional, Casual, Inappropriate.
Respond with the JSON object only."#;

pub fn build_compose_prompt(
    message: &str,
    date: &str,
    sender_name: &str,
    recipient_name: &str,
) -> String {
    COMPOSE_PROMPT_TEMPLATE
        .replace("{date}", date)
        .replace("{sender_name}", sender_name)
        .replace("{recipient_name}", recipient_name)
        // message goes in last so braces inside it are left untouched
        .replace("{message}", message)
}

pub fn build_analysis_prompt(email_content: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE.replace("{email_content}", email_content)
}
