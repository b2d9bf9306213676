//! Generation client seam

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::{AgentError, DomainError};

/// Abstraction over the text-generation backend
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Generates a completion for the fully rendered prompt
    async fn generate(&self, prompt: &str) -> Result<String, DomainError>;
}

/// In-memory generation client for tests
///
/// Counts upstream calls so tests can assert cache behaviour, records the
/// prompts it received, and can be toggled to fail.
pub struct MockGenerationClient {
    response: String,
    calls: AtomicUsize,
    fail: AtomicBool,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerationClient {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            calls: AtomicUsize::new(0),
            fail: AtomicBool::new(false),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.fail.store(failing, Ordering::SeqCst);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl GenerationClient for MockGenerationClient {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());

        if self.fail.load(Ordering::SeqCst) {
            return Err(AgentError::UpstreamUnavailable.into());
        }
        Ok(self.response.clone())
    }
}
