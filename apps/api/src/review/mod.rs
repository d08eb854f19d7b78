// SOP / resume review: document text extraction and the LLM feedback call.

pub mod extract;
pub mod handlers;
pub mod prompts;
