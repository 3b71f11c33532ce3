//! Tasting catalog and stock-allocator service
//!
//! A tasting's stock is backed by reservations on its composing wines:
//! raising or lowering the tasting stock moves every composing wine's stock
//! and reserved_stock by the same delta, inside one transaction. The upper
//! bound (the tightest wine headroom) is re-validated here at write time, not
//! trusted from the client.

use serde::Deserialize;
use sqlx::PgPool;
use validator::Validate;

use crate::error::{AppError, AppResult};
use shared::allocation::{max_tasting_stock, release_reserved};
use shared::models::{CreateTastingInput, Tasting, TastingDetail, UpdateTastingInput};
use shared::types::{EntityStatus, Paged, Pagination};
use shared::validation::validate_stock_target;

/// Tasting service
#[derive(Clone)]
pub struct TastingService {
    db: PgPool,
}

/// Filters accepted by the tasting list endpoint
#[derive(Debug, Default, Deserialize)]
pub struct TastingListFilter {
    pub status: Option<EntityStatus>,
    pub search: Option<String>,
}

const TASTING_COLUMNS: &str = "id, name, description, price, stock, sold, status, \
     created_at, updated_at, created_by, updated_by";

impl TastingService {
    /// Create a new TastingService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List tastings; deleted ones are excluded
    pub async fn list(
        &self,
        pagination: &Pagination,
        filter: &TastingListFilter,
    ) -> AppResult<Paged<Tasting>> {
        let search = filter.search.as_ref().map(|s| format!("%{}%", s));

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM tastings
            WHERE ($1::entity_status IS NULL OR status = $1) AND status <> 'deleted'
              AND ($2::text IS NULL OR name ILIKE $2)
            "#,
        )
        .bind(filter.status)
        .bind(&search)
        .fetch_one(&self.db)
        .await?;

        let tastings = sqlx::query_as::<_, Tasting>(&format!(
            r#"
            SELECT {TASTING_COLUMNS} FROM tastings
            WHERE ($1::entity_status IS NULL OR status = $1) AND status <> 'deleted'
              AND ($2::text IS NULL OR name ILIKE $2)
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

        Ok(Paged::new(tastings, total, pagination))
    }

    /// Get a tasting with the ids of its composing wines
    pub async fn get(&self, tasting_id: i64) -> AppResult<TastingDetail> {
        let tasting = self.fetch(tasting_id).await?;

        let wine_ids = sqlx::query_scalar::<_, i64>(
            "SELECT wine_id FROM tasting_wines WHERE tasting_id = $1 ORDER BY wine_id",
        )
        .bind(tasting_id)
        .fetch_all(&self.db)
        .await?;

        Ok(TastingDetail { tasting, wine_ids })
    }

    /// Create a tasting with its fixed wine composition. Stock starts at 0
    /// and is raised through the allocator so reservations stay consistent.
    pub async fn create(&self, admin_id: i64, input: CreateTastingInput) -> AppResult<TastingDetail> {
        input
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;
        shared::validation::validate_amount(input.price)
            .map_err(|msg| AppError::ValidationError(msg.to_string()))?;

        let mut tx = self.db.begin().await?;

        let known_wines = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM wines WHERE id = ANY($1) AND status <> 'deleted'",
        )
        .bind(&input.wine_ids)
        .fetch_one(&mut *tx)
        .await?;

        if known_wines != input.wine_ids.len() as i64 {
            return Err(AppError::NotFound("Wine".to_string()));
        }

        let tasting = sqlx::query_as::<_, Tasting>(&format!(
            r#"
            INSERT INTO tastings (name, description, price, stock, sold, status, created_by, updated_by)
            VALUES ($1, $2, $3, 0, 0, 'active', $4, $4)
            RETURNING {TASTING_COLUMNS}
            "#
        ))
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .bind(admin_id)
        .fetch_one(&mut *tx)
        .await?;

        for wine_id in &input.wine_ids {
            sqlx::query("INSERT INTO tasting_wines (tasting_id, wine_id) VALUES ($1, $2)")
                .bind(tasting.id)
                .bind(wine_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(TastingDetail {
            tasting,
            wine_ids: input.wine_ids,
        })
    }

    /// Update tasting metadata (name, description, price, status).
    /// Stock changes go through [`set_stock`](Self::set_stock).
    pub async fn update(
        &self,
        admin_id: i64,
        tasting_id: i64,
        input: UpdateTastingInput,
    ) -> AppResult<Tasting> {
        input
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;
        if let Some(price) = input.price {
            shared::validation::validate_amount(price)
                .map_err(|msg| AppError::ValidationError(msg.to_string()))?;
        }

        let existing = self.fetch(tasting_id).await?;

        let tasting = sqlx::query_as::<_, Tasting>(&format!(
            r#"
            UPDATE tastings
            SET name = $1, description = $2, price = $3, status = $4,
                updated_at = NOW(), updated_by = $5
            WHERE id = $6
            RETURNING {TASTING_COLUMNS}
            "#
        ))
        .bind(input.name.unwrap_or(existing.name))
        .bind(input.description.or(existing.description))
        .bind(input.price.unwrap_or(existing.price))
        .bind(input.status.unwrap_or(existing.status))
        .bind(admin_id)
        .bind(tasting_id)
        .fetch_one(&self.db)
        .await?;

        Ok(tasting)
    }

    /// Set the tasting's stock to an absolute target, propagating the delta
    /// to every composing wine's stock and reserved_stock.
    pub async fn set_stock(
        &self,
        admin_id: i64,
        tasting_id: i64,
        new_stock: i32,
    ) -> AppResult<Tasting> {
        validate_stock_target(new_stock).map_err(|msg| AppError::ValidationError(msg.to_string()))?;

        let mut tx = self.db.begin().await?;

        let tasting = sqlx::query_as::<_, Tasting>(&format!(
            "SELECT {TASTING_COLUMNS} FROM tastings WHERE id = $1 AND status <> 'deleted' FOR UPDATE"
        ))
        .bind(tasting_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Tasting".to_string()))?;

        let delta = new_stock - tasting.stock;
        if delta == 0 {
            return Ok(tasting);
        }

        // Lock composing wines and re-check the headroom bound server-side
        let wines = sqlx::query_as::<_, (i64, i32, i32)>(
            r#"
            SELECT id, stock, reserved_stock FROM wines
            WHERE id IN (SELECT wine_id FROM tasting_wines WHERE tasting_id = $1)
            ORDER BY id
            FOR UPDATE
            "#,
        )
        .bind(tasting_id)
        .fetch_all(&mut *tx)
        .await?;

        let bound = max_tasting_stock(
            tasting.stock,
            wines.iter().map(|(_, stock, reserved)| (*stock, *reserved)),
        );
        if new_stock > bound {
            return Err(AppError::InsufficientStock(format!(
                "Tasting stock cannot exceed {} given current wine availability",
                bound
            )));
        }

        for (wine_id, _, _) in &wines {
            let result = sqlx::query(
                r#"
                UPDATE wines
                SET stock = stock + $1, reserved_stock = reserved_stock + $1,
                    updated_at = NOW(), updated_by = $2
                WHERE id = $3 AND stock + $1 >= 0 AND reserved_stock + $1 >= 0
                "#,
            )
            .bind(delta)
            .bind(admin_id)
            .bind(wine_id)
            .execute(&mut *tx)
            .await?;

            if result.rows_affected() == 0 {
                return Err(AppError::StockInconsistent(format!(
                    "Allocation would drive counters below zero for wine {}",
                    wine_id
                )));
            }
        }

        let updated = sqlx::query_as::<_, Tasting>(&format!(
            r#"
            UPDATE tastings SET stock = $1, updated_at = NOW(), updated_by = $2
            WHERE id = $3
            RETURNING {TASTING_COLUMNS}
            "#
        ))
        .bind(new_stock)
        .bind(admin_id)
        .bind(tasting_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(updated)
    }

    /// Soft-delete a tasting: release its stock from every composing wine's
    /// reservation (floored at zero), zero its stock and mark it deleted.
    pub async fn delete(&self, admin_id: i64, tasting_id: i64) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let tasting = sqlx::query_as::<_, Tasting>(&format!(
            "SELECT {TASTING_COLUMNS} FROM tastings WHERE id = $1 AND status <> 'deleted' FOR UPDATE"
        ))
        .bind(tasting_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Tasting".to_string()))?;

        let wines = sqlx::query_as::<_, (i64, i32)>(
            r#"
            SELECT id, reserved_stock FROM wines
            WHERE id IN (SELECT wine_id FROM tasting_wines WHERE tasting_id = $1)
            ORDER BY id
            FOR UPDATE
            "#,
        )
        .bind(tasting_id)
        .fetch_all(&mut *tx)
        .await?;

        for (wine_id, reserved) in &wines {
            let remaining = release_reserved(*reserved, tasting.stock);
            sqlx::query(
                "UPDATE wines SET reserved_stock = $1, updated_at = NOW(), updated_by = $2 WHERE id = $3",
            )
            .bind(remaining)
            .bind(admin_id)
            .bind(wine_id)
            .execute(&mut *tx)
            .await?;
        }

        sqlx::query(
            r#"
            UPDATE tastings SET status = 'deleted', stock = 0, updated_at = NOW(), updated_by = $1
            WHERE id = $2
            "#,
        )
        .bind(admin_id)
        .bind(tasting_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn fetch(&self, tasting_id: i64) -> AppResult<Tasting> {
        sqlx::query_as::<_, Tasting>(&format!(
            "SELECT {TASTING_COLUMNS} FROM tastings WHERE id = $1 AND status <> 'deleted'"
        ))
        .bind(tasting_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Tasting".to_string()))
    }
}
