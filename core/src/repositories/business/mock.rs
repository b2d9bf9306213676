//! Mock implementation of BusinessRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::business::{Business, Product};
use crate::errors::DomainError;

use super::trait_::BusinessRepository;

/// In-memory business repository for testing
#[derive(Clone, Default)]
pub struct MockBusinessRepository {
    businesses: Arc<RwLock<HashMap<Uuid, Business>>>,
    products: Arc<RwLock<HashMap<Uuid, Vec<Product>>>>,
}

impl MockBusinessRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a business
    pub async fn insert_business(&self, business: Business) {
        self.businesses
            .write()
            .await
            .insert(business.id, business);
    }

    /// Seed a product under its business
    pub async fn insert_product(&self, product: Product) {
        self.products
            .write()
            .await
            .entry(product.business_id)
            .or_default()
            .push(product);
    }
}

#[async_trait]
impl BusinessRepository for MockBusinessRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Business>, DomainError> {
        Ok(self.businesses.read().await.get(&id).cloned())
    }

    async fn list_products(&self, business_id: Uuid) -> Result<Vec<Product>, DomainError> {
        Ok(self
            .products
            .read()
            .await
            .get(&business_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_and_list() {
        let repo = MockBusinessRepository::new();
        let business = Business::new(
            Uuid::new_v4(),
            "Acme".to_string(),
            "desc".to_string(),
            "Retail".to_string(),
            "Store".to_string(),
        );
        let business_id = business.id;
        repo.insert_business(business).await;
        repo.insert_product(Product::new(
            business_id,
            "Widget".to_string(),
            "A widget".to_string(),
            9.99,
            "Widgets".to_string(),
            3,
        ))
        .await;

        assert!(repo.find_by_id(business_id).await.unwrap().is_some());
        assert_eq!(repo.list_products(business_id).await.unwrap().len(), 1);
        assert!(repo
            .list_products(Uuid::new_v4())
            .await
            .unwrap()
            .is_empty());
    }
}
