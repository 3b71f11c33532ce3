//! Accommodation model (hotels and rentals orders can be delivered to)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::EntityStatus;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Accommodation {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: Option<String>,
    pub contact_phone: Option<String>,
    pub status: EntityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<i64>,
    pub updated_by: Option<i64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAccommodationInput {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 500))]
    pub address: String,
    pub city: Option<String>,
    pub contact_phone: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAccommodationInput {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 500))]
    pub address: Option<String>,
    pub city: Option<String>,
    pub contact_phone: Option<String>,
    pub status: Option<EntityStatus>,
}
