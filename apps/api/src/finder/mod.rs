// Game finder: turns a filter payload into a Gemini prompt and relays the
// model's JSON reply. All LLM calls go through llm_client.

pub mod handlers;
pub mod models;
pub mod prompts;
