//! Main agent service implementation

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::{AgentError, DomainResult};
use crate::repositories::BusinessRepository;

use super::cache::{CacheKey, ResponseCache};
use super::client::GenerationClient;
use super::prompt::{render_prompt, FALLBACK_MESSAGE};

/// Per-business assistant over a generation backend with a response cache
pub struct AgentService<B, G>
where
    B: BusinessRepository,
    G: GenerationClient,
{
    business_repository: Arc<B>,
    client: Arc<G>,
    cache: Arc<ResponseCache>,
}

impl<B, G> AgentService<B, G>
where
    B: BusinessRepository,
    G: GenerationClient,
{
    pub fn new(business_repository: Arc<B>, client: Arc<G>, cache: Arc<ResponseCache>) -> Self {
        Self {
            business_repository,
            client,
            cache,
        }
    }

    /// Answer a customer prompt on behalf of a business
    ///
    /// A cache hit returns immediately without touching the repository or
    /// the generation backend. On a miss, an unknown business is an error
    /// (and never cached); an upstream failure yields the fixed fallback
    /// message, also uncached, so a later retry gets a fresh attempt.
    pub async fn respond(&self, business_id: Uuid, prompt: &str) -> DomainResult<String> {
        let key = CacheKey::new(business_id, prompt);

        if let Some(cached) = self.cache.get(&key) {
            debug!("Agent cache hit for business {}", business_id);
            return Ok(cached);
        }

        let business = self
            .business_repository
            .find_by_id(business_id)
            .await?
            .ok_or(AgentError::BusinessNotFound { id: business_id })?;
        let products = self.business_repository.list_products(business_id).await?;

        let full_prompt = render_prompt(&business, &products, &key.prompt);

        match self.client.generate(&full_prompt).await {
            Ok(text) => {
                self.cache.insert(key, text.clone());
                Ok(text)
            }
            Err(e) => {
                warn!("Generation failed for business {}: {}", business_id, e);
                Ok(FALLBACK_MESSAGE.to_string())
            }
        }
    }
}
