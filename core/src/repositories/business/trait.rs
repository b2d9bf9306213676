//! Business repository trait for the read side the AI agent needs.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::business::{Business, Product};
use crate::errors::DomainError;

/// Repository trait for business and product lookups
#[async_trait]
pub trait BusinessRepository: Send + Sync {
    /// Find a business by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Business>, DomainError>;

    /// List all products belonging to a business
    ///
    /// An unknown business yields an empty list; existence is checked
    /// separately with `find_by_id`.
    async fn list_products(&self, business_id: Uuid) -> Result<Vec<Product>, DomainError>;
}
