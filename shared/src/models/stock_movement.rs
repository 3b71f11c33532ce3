//! Manual wine stock-movement ledger
//!
//! Append-only log of entry/out events recorded by admins. Informational
//! only: it does not feed back into the tasting/order reconciliation math.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "movement_direction", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MovementDirection {
    Entry,
    Out,
}

impl MovementDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementDirection::Entry => "entry",
            MovementDirection::Out => "out",
        }
    }
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct WineStockMovement {
    pub id: i64,
    pub wine_id: i64,
    pub direction: MovementDirection,
    pub quantity: i32,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct RecordMovementInput {
    pub wine_id: i64,
    pub direction: MovementDirection,
    pub quantity: i32,
    pub note: Option<String>,
}
