//! MySQL implementation of the BusinessRepository trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sf_core::domain::entities::business::{Business, Product};
use sf_core::errors::DomainError;
use sf_core::repositories::BusinessRepository;

/// MySQL implementation of BusinessRepository
pub struct MySqlBusinessRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlBusinessRepository {
    /// Create a new MySQL business repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn parse_uuid(value: &str, what: &str) -> Result<Uuid, DomainError> {
        Uuid::parse_str(value).map_err(|e| DomainError::Internal {
            message: format!("Invalid {} UUID: {}", what, e),
        })
    }

    fn row_to_business(row: &sqlx::mysql::MySqlRow) -> Result<Business, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;
        let owner_id: String = row.try_get("owner_id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get owner_id: {}", e),
        })?;

        Ok(Business {
            id: Self::parse_uuid(&id, "business")?,
            owner_id: Self::parse_uuid(&owner_id, "owner")?,
            name: row.try_get("name").map_err(|e| DomainError::Internal {
                message: format!("Failed to get name: {}", e),
            })?,
            description: row
                .try_get("description")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get description: {}", e),
                })?,
            industry: row.try_get("industry").map_err(|e| DomainError::Internal {
                message: format!("Failed to get industry: {}", e),
            })?,
            business_type: row
                .try_get("business_type")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get business_type: {}", e),
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get created_at: {}", e),
                })?,
        })
    }

    fn row_to_product(row: &sqlx::mysql::MySqlRow) -> Result<Product, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;
        let business_id: String = row
            .try_get("business_id")
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to get business_id: {}", e),
            })?;

        Ok(Product {
            id: Self::parse_uuid(&id, "product")?,
            business_id: Self::parse_uuid(&business_id, "business")?,
            name: row.try_get("name").map_err(|e| DomainError::Internal {
                message: format!("Failed to get name: {}", e),
            })?,
            description: row
                .try_get("description")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get description: {}", e),
                })?,
            price: row.try_get("price").map_err(|e| DomainError::Internal {
                message: format!("Failed to get price: {}", e),
            })?,
            category: row.try_get("category").map_err(|e| DomainError::Internal {
                message: format!("Failed to get category: {}", e),
            })?,
            stock: row.try_get("stock").map_err(|e| DomainError::Internal {
                message: format!("Failed to get stock: {}", e),
            })?,
        })
    }
}

#[async_trait]
impl BusinessRepository for MySqlBusinessRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Business>, DomainError> {
        let query = r#"
            SELECT id, owner_id, name, description, industry, business_type, created_at
            FROM businesses
            WHERE id = ?
        "#;

        let row = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find business: {}", e),
            })?;

        row.as_ref().map(Self::row_to_business).transpose()
    }

    async fn list_products(&self, business_id: Uuid) -> Result<Vec<Product>, DomainError> {
        let query = r#"
            SELECT id, business_id, name, description, price, category, stock
            FROM products
            WHERE business_id = ?
        "#;

        let rows = sqlx::query(query)
            .bind(business_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to list products: {}", e),
            })?;

        rows.iter().map(Self::row_to_product).collect()
    }
}
