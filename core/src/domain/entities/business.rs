//! Business and product entities used by the AI agent context.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A business owned by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    /// Unique identifier for the business
    pub id: Uuid,

    /// Owning user's identifier
    pub owner_id: Uuid,

    /// Display name
    pub name: String,

    /// Free-form description
    pub description: String,

    /// Industry label (e.g. "Retail")
    pub industry: String,

    /// Business type label (e.g. "Online store")
    pub business_type: String,

    /// Timestamp when the business was created
    pub created_at: DateTime<Utc>,
}

impl Business {
    /// Creates a new business
    pub fn new(
        owner_id: Uuid,
        name: String,
        description: String,
        industry: String,
        business_type: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name,
            description,
            industry,
            business_type,
            created_at: Utc::now(),
        }
    }
}

/// A product or service offered by a business
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier for the product
    pub id: Uuid,

    /// Business this product belongs to
    pub business_id: Uuid,

    /// Display name
    pub name: String,

    /// Free-form description
    pub description: String,

    /// Unit price
    pub price: f64,

    /// Category label
    pub category: String,

    /// Units in stock
    pub stock: i32,
}

impl Product {
    /// Creates a new product for a business
    pub fn new(
        business_id: Uuid,
        name: String,
        description: String,
        price: f64,
        category: String,
        stock: i32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            business_id,
            name,
            description,
            price,
            category,
            stock,
        }
    }
}
