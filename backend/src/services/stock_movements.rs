//! Manual wine stock-movement ledger
//!
//! Append-only entry/out events recorded by admins. The ledger is
//! informational and does not feed back into the tasting/order
//! reconciliation math or the wine counters.

use serde::Deserialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use shared::models::{RecordMovementInput, WineStockMovement};
use shared::types::{Paged, Pagination};
use shared::validation::validate_positive_quantity;

/// Stock-movement service
#[derive(Clone)]
pub struct StockMovementService {
    db: PgPool,
}

/// Filters accepted by the movement list endpoint
#[derive(Debug, Default, Deserialize)]
pub struct MovementListFilter {
    pub wine_id: Option<i64>,
}

const MOVEMENT_COLUMNS: &str = "id, wine_id, direction, quantity, note, created_at, created_by";

impl StockMovementService {
    /// Create a new StockMovementService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record a movement in the ledger
    pub async fn record(
        &self,
        admin_id: i64,
        input: RecordMovementInput,
    ) -> AppResult<WineStockMovement> {
        validate_positive_quantity(input.quantity)
            .map_err(|msg| AppError::ValidationError(msg.to_string()))?;

        let wine_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM wines WHERE id = $1 AND status <> 'deleted')",
        )
        .bind(input.wine_id)
        .fetch_one(&self.db)
        .await?;

        if !wine_exists {
            return Err(AppError::NotFound("Wine".to_string()));
        }

        let movement = sqlx::query_as::<_, WineStockMovement>(&format!(
            r#"
            INSERT INTO wine_stock_movements (wine_id, direction, quantity, note, created_by)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {MOVEMENT_COLUMNS}
            "#
        ))
        .bind(input.wine_id)
        .bind(input.direction)
        .bind(input.quantity)
        .bind(&input.note)
        .bind(admin_id)
        .fetch_one(&self.db)
        .await?;

        Ok(movement)
    }

    /// List movements, newest first
    pub async fn list(
        &self,
        pagination: &Pagination,
        filter: &MovementListFilter,
    ) -> AppResult<Paged<WineStockMovement>> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM wine_stock_movements WHERE ($1::bigint IS NULL OR wine_id = $1)",
        )
        .bind(filter.wine_id)
        .fetch_one(&self.db)
        .await?;

        let movements = sqlx::query_as::<_, WineStockMovement>(&format!(
            r#"
            SELECT {MOVEMENT_COLUMNS} FROM wine_stock_movements
            WHERE ($1::bigint IS NULL OR wine_id = $1)
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(filter.wine_id)
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.db)
        .await?;

        Ok(Paged::new(movements, total, pagination))
    }
}
