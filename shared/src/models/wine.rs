//! Wine model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::EntityStatus;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Wine {
    pub id: i64,
    pub name: String,
    pub winery: Option<String>,
    pub description: Option<String>,
    pub price: Decimal,
    /// Physical units on hand
    pub stock: i32,
    /// Units committed to currently-stocked tastings
    pub reserved_stock: i32,
    pub sold: i32,
    pub status: EntityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<i64>,
    pub updated_by: Option<i64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateWineInput {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub winery: Option<String>,
    pub description: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub stock: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateWineInput {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub winery: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i32>,
    pub status: Option<EntityStatus>,
}
