// Job description generation: prompt template, benefits catalogue, and the
// single text-generation call. All LLM calls go through llm_client.

pub mod benefits;
pub mod generator;
pub mod handlers;
pub mod prompts;
