//! Tasting model
//!
//! A tasting is a sellable bundle composed of a fixed set of wines, one unit
//! of each wine per tasting unit. It carries its own stock/sold counters,
//! derived from the wines it contains via the allocator.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::EntityStatus;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Tasting {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
    pub sold: i32,
    pub status: EntityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<i64>,
    pub updated_by: Option<i64>,
}

/// Tasting with its composing wines
#[derive(Debug, Clone, Serialize)]
pub struct TastingDetail {
    #[serde(flatten)]
    pub tasting: Tasting,
    pub wine_ids: Vec<i64>,
}

/// Input for creating a tasting.
///
/// New tastings start with stock 0; stock is raised afterwards through the
/// allocator endpoint so the wine reservations stay consistent.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTastingInput {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    #[validate(length(min = 1))]
    pub wine_ids: Vec<i64>,
}

/// Input for updating tasting metadata (not stock)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTastingInput {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub status: Option<EntityStatus>,
}

/// Input for the stock allocator: the new absolute stock target
#[derive(Debug, Deserialize)]
pub struct SetTastingStockInput {
    pub stock: i32,
}
