//! AI module - generation backend clients

pub mod gemini;

pub use gemini::GeminiClient;
