// Formal email generation and critique.
// Uses the server-side provider credential from `Config`, never one from the request.

pub mod analysis;
pub mod composer;
pub mod handlers;
pub mod prompts;
