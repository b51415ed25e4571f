// Resume tailoring: fact extraction, tone/emphasis guidance, Markdown composition.
// All LLM calls go through llm_client::TextGenerator — no direct HTTP calls here.

pub mod facts;
pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod tone;
