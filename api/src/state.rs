//! Shared application state

use std::sync::Arc;

use sf_core::repositories::{BusinessRepository, UserRepository};
use sf_core::services::agent::GenerationClient;
use sf_core::services::{AgentService, AuthService, NotificationService, TokenService};

/// Application state holding the shared services
///
/// Generic over the repository and client seams so integration tests can
/// run the full HTTP stack against in-memory mocks.
pub struct AppState<U, B, N, G>
where
    U: UserRepository,
    B: BusinessRepository,
    N: NotificationService,
    G: GenerationClient,
{
    pub auth_service: Arc<AuthService<U, N>>,
    pub agent_service: Arc<AgentService<B, G>>,
    pub token_service: Arc<TokenService>,
}

impl<U, B, N, G> AppState<U, B, N, G>
where
    U: UserRepository,
    B: BusinessRepository,
    N: NotificationService,
    G: GenerationClient,
{
    pub fn new(
        auth_service: Arc<AuthService<U, N>>,
        agent_service: Arc<AgentService<B, G>>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            auth_service,
            agent_service,
            token_service,
        }
    }
}
