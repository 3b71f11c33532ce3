//! FAQ model for the storefront help section

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::EntityStatus;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Faq {
    pub id: i64,
    pub question: String,
    pub answer: String,
    /// Display order on the storefront
    pub position: i32,
    pub status: EntityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<i64>,
    pub updated_by: Option<i64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateFaqInput {
    #[validate(length(min = 1, max = 500))]
    pub question: String,
    #[validate(length(min = 1))]
    pub answer: String,
    #[serde(default)]
    pub position: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateFaqInput {
    #[validate(length(min = 1, max = 500))]
    pub question: Option<String>,
    #[validate(length(min = 1))]
    pub answer: Option<String>,
    pub position: Option<i32>,
    pub status: Option<EntityStatus>,
}
