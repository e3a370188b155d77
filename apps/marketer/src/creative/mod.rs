// Creative brief: master prompt, keyword-driven creative potential and the
// optional LLM draft. Stands apart from the strategy pipeline.

pub mod handlers;
pub mod master_prompt;
pub mod potential;
pub mod prompts;
