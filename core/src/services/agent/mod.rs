//! AI-agent proxy module
//!
//! Answers customer prompts on behalf of a business: renders business and
//! product context into the prompt, calls the generation client, and caches
//! successful responses per (business, prompt).

pub mod cache;
pub mod client;
pub mod prompt;
pub mod service;

pub use cache::{CacheKey, ResponseCache};
pub use client::{GenerationClient, MockGenerationClient};
pub use prompt::FALLBACK_MESSAGE;
pub use service::AgentService;
