//! Wine catalog service

use serde::Deserialize;
use sqlx::PgPool;
use validator::Validate;

use crate::error::{AppError, AppResult};
use shared::models::{CreateWineInput, UpdateWineInput, Wine};
use shared::types::{EntityStatus, Paged, Pagination};

/// Wine service
#[derive(Clone)]
pub struct WineService {
    db: PgPool,
}

/// Filters accepted by the wine list endpoint
#[derive(Debug, Default, Deserialize)]
pub struct WineListFilter {
    pub status: Option<EntityStatus>,
    pub search: Option<String>,
}

const WINE_COLUMNS: &str = "id, name, winery, description, price, stock, reserved_stock, sold, \
     status, created_at, updated_at, created_by, updated_by";

impl WineService {
    /// Create a new WineService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List wines; deleted ones are excluded
    pub async fn list(
        &self,
        pagination: &Pagination,
        filter: &WineListFilter,
    ) -> AppResult<Paged<Wine>> {
        let search = filter.search.as_ref().map(|s| format!("%{}%", s));

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM wines
            WHERE ($1::entity_status IS NULL OR status = $1) AND status <> 'deleted'
              AND ($2::text IS NULL OR name ILIKE $2 OR winery ILIKE $2)
            "#,
        )
        .bind(filter.status)
        .bind(&search)
        .fetch_one(&self.db)
        .await?;

        let wines = sqlx::query_as::<_, Wine>(&format!(
            r#"
            SELECT {WINE_COLUMNS} FROM wines
            WHERE ($1::entity_status IS NULL OR status = $1) AND status <> 'deleted'
              AND ($2::text IS NULL OR name ILIKE $2 OR winery ILIKE $2)
            ORDER BY name
            LIMIT $3 OFFSET $4
            "#
        ))
        .bind(filter.status)
        .bind(&search)
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.db)
        .await?;

        Ok(Paged::new(wines, total, pagination))
    }

    /// Get a wine by id
    pub async fn get(&self, wine_id: i64) -> AppResult<Wine> {
        sqlx::query_as::<_, Wine>(&format!(
            "SELECT {WINE_COLUMNS} FROM wines WHERE id = $1 AND status <> 'deleted'"
        ))
        .bind(wine_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Wine".to_string()))
    }

    /// Create a wine
    pub async fn create(&self, admin_id: i64, input: CreateWineInput) -> AppResult<Wine> {
        input
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;
        shared::validation::validate_amount(input.price)
            .map_err(|msg| AppError::ValidationError(msg.to_string()))?;
        shared::validation::validate_stock_target(input.stock)
            .map_err(|msg| AppError::ValidationError(msg.to_string()))?;

        let wine = sqlx::query_as::<_, Wine>(&format!(
            r#"
            INSERT INTO wines (name, winery, description, price, stock, reserved_stock, sold, status, created_by, updated_by)
            VALUES ($1, $2, $3, $4, $5, 0, 0, 'active', $6, $6)
            RETURNING {WINE_COLUMNS}
            "#
        ))
        .bind(&input.name)
        .bind(&input.winery)
        .bind(&input.description)
        .bind(input.price)
        .bind(input.stock)
        .bind(admin_id)
        .fetch_one(&self.db)
        .await?;

        Ok(wine)
    }

    /// Update a wine. A direct stock edit may not go below the wine's
    /// reserved stock, since that portion is committed to active tastings.
    pub async fn update(
        &self,
        admin_id: i64,
        wine_id: i64,
        input: UpdateWineInput,
    ) -> AppResult<Wine> {
        input
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;
        if let Some(price) = input.price {
            shared::validation::validate_amount(price)
                .map_err(|msg| AppError::ValidationError(msg.to_string()))?;
        }

        let existing = self.get(wine_id).await?;

        let new_stock = input.stock.unwrap_or(existing.stock);
        if new_stock < existing.reserved_stock {
            return Err(AppError::InsufficientStock(format!(
                "Wine stock cannot drop below the {} units reserved for tastings",
                existing.reserved_stock
            )));
        }

        let wine = sqlx::query_as::<_, Wine>(&format!(
            r#"
            UPDATE wines
            SET name = $1, winery = $2, description = $3, price = $4, stock = $5,
                status = $6, updated_at = NOW(), updated_by = $7
            WHERE id = $8
            RETURNING {WINE_COLUMNS}
            "#
        ))
        .bind(input.name.unwrap_or(existing.name))
        .bind(input.winery.or(existing.winery))
        .bind(input.description.or(existing.description))
        .bind(input.price.unwrap_or(existing.price))
        .bind(new_stock)
        .bind(input.status.unwrap_or(existing.status))
        .bind(admin_id)
        .bind(wine_id)
        .fetch_one(&self.db)
        .await?;

        Ok(wine)
    }

    /// Soft-delete a wine. Rejected while the wine composes a non-deleted
    /// tasting, because that tasting's reservations would dangle.
    pub async fn delete(&self, admin_id: i64, wine_id: i64) -> AppResult<()> {
        let in_active_tasting = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM tasting_wines tw
                JOIN tastings t ON t.id = tw.tasting_id
                WHERE tw.wine_id = $1 AND t.status <> 'deleted'
            )
            "#,
        )
        .bind(wine_id)
        .fetch_one(&self.db)
        .await?;

        if in_active_tasting {
            return Err(AppError::Conflict(
                "Wine is part of an active tasting and cannot be deleted".to_string(),
            ));
        }

        let result = sqlx::query(
            r#"
            UPDATE wines SET status = 'deleted', updated_at = NOW(), updated_by = $1
            WHERE id = $2 AND status <> 'deleted'
            "#,
        )
        .bind(admin_id)
        .bind(wine_id)
        .execute(&self.db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Wine".to_string()));
        }

        Ok(())
    }
}
