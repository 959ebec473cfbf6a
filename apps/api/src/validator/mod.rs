// Email format check: one model critique plus local rule checks.
// The caller supplies the provider credential with each request.

pub mod critique;
pub mod handlers;
pub mod prompts;
