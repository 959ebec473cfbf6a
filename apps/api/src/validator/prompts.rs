// All LLM prompt constants for the format check.

use crate::llm_client::CompletionParams;

pub const FORMAT_CHECK_PARAMS: CompletionParams = CompletionParams {
    model: "llama3-8b-8192",
    temperature: 0.3,
    max_tokens: 500,
};

/// Format critique prompt template. Replace `{email_content}` before sending.
pub const FORMAT_CHECK_PROMPT_TEMPLATE: &str = r#"Analyze the following email content and provide feedback on its format, tone, and professionalism.

Email Content:
{email_content}

Please provide:
1. Overall format rating (1-10)
2. Tone assessment (Professional/Casual/Inappropriate)
3. Key suggestions for improvement
4. Grammar and spelling issues
5. Structure recommendations

Respond in JSON format with keys: rating, tone, suggestions, grammar_issues, structure_tips"#;

pub fn build_format_check_prompt(email_content: &str) -> String {
    FORMAT_CHECK_PROMPT_TEMPLATE.replace("{email_content}", email_content)
}
