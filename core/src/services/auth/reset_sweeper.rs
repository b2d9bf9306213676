//! Background sweep of expired password-reset tokens
//!
//! Deletes user records whose reset-token expiry has passed, keeping the
//! pending-reset table from growing without bound. `reset_password`
//! re-checks expiry on its own, so the sweeper is housekeeping, not a
//! correctness dependency.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use crate::errors::DomainError;
use crate::repositories::UserRepository;

/// Configuration for the reset-token sweeper
#[derive(Debug, Clone)]
pub struct SweeperConfig {
    /// How often to run a sweep (in seconds)
    pub interval_seconds: u64,
    /// Whether the background task runs at all
    pub enabled: bool,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 3600,
            enabled: true,
        }
    }
}

/// Periodic cleanup of expired reset tokens
pub struct ResetTokenSweeper<U: UserRepository + 'static> {
    repository: Arc<U>,
    config: SweeperConfig,
}

/// Outcome of a single sweep cycle
#[derive(Debug, Default)]
pub struct SweepResult {
    /// Number of expired records removed
    pub deleted: usize,
}

impl<U: UserRepository> ResetTokenSweeper<U> {
    /// Create a new sweeper over the given repository
    pub fn new(repository: Arc<U>, config: SweeperConfig) -> Self {
        Self { repository, config }
    }

    /// Run a single sweep cycle
    pub async fn run_sweep(&self) -> Result<SweepResult, DomainError> {
        if !self.config.enabled {
            return Ok(SweepResult::default());
        }

        let deleted = self
            .repository
            .delete_expired_reset_tokens(Utc::now())
            .await?;

        if deleted > 0 {
            info!("Reset-token sweep removed {} expired records", deleted);
        }

        Ok(SweepResult { deleted })
    }

    /// Start the sweeper as a background task
    ///
    /// Spawns a tokio task that sweeps at the configured interval. A
    /// failed cycle is logged and the next tick retries; the task never
    /// takes the process down.
    pub fn start_background_task(self: Arc<Self>) {
        if !self.config.enabled {
            warn!("Reset-token sweeper is disabled");
            return;
        }

        let interval = std::time::Duration::from_secs(self.config.interval_seconds);

        tokio::spawn(async move {
            info!(
                "Reset-token sweeper started - will run every {} seconds",
                self.config.interval_seconds
            );

            let mut interval_timer = tokio::time::interval(interval);

            loop {
                interval_timer.tick().await;

                if let Err(e) = self.run_sweep().await {
                    error!("Reset-token sweep failed: {}", e);
                }
            }
        });
    }
}
