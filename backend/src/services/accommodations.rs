//! Accommodation management service

use sqlx::PgPool;
use validator::Validate;

use crate::error::{AppError, AppResult};
use shared::models::{Accommodation, CreateAccommodationInput, UpdateAccommodationInput};
use shared::types::{Paged, Pagination};

#[derive(Clone)]
pub struct AccommodationService {
    db: PgPool,
}

const ACCOMMODATION_COLUMNS: &str =
    "id, name, address, city, contact_phone, status, created_at, updated_at, created_by, updated_by";

impl AccommodationService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list(&self, pagination: &Pagination) -> AppResult<Paged<Accommodation>> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM accommodations WHERE status <> 'deleted'",
        )
        .fetch_one(&self.db)
        .await?;

        let accommodations = sqlx::query_as::<_, Accommodation>(&format!(
            r#"
            SELECT {ACCOMMODATION_COLUMNS} FROM accommodations
            WHERE status <> 'deleted'
            ORDER BY name
            LIMIT $1 OFFSET $2
            "#
        ))
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.db)
        .await?;

        Ok(Paged::new(accommodations, total, pagination))
    }

    pub async fn get(&self, accommodation_id: i64) -> AppResult<Accommodation> {
        sqlx::query_as::<_, Accommodation>(&format!(
            "SELECT {ACCOMMODATION_COLUMNS} FROM accommodations WHERE id = $1 AND status <> 'deleted'"
        ))
        .bind(accommodation_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Accommodation".to_string()))
    }

    pub async fn create(
        &self,
        admin_id: i64,
        input: CreateAccommodationInput,
    ) -> AppResult<Accommodation> {
        input
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let accommodation = sqlx::query_as::<_, Accommodation>(&format!(
            r#"
            INSERT INTO accommodations (name, address, city, contact_phone, status, created_by, updated_by)
            VALUES ($1, $2, $3, $4, 'active', $5, $5)
            RETURNING {ACCOMMODATION_COLUMNS}
            "#
        ))
        .bind(&input.name)
        .bind(&input.address)
        .bind(&input.city)
        .bind(&input.contact_phone)
        .bind(admin_id)
        .fetch_one(&self.db)
        .await?;

        Ok(accommodation)
    }

    pub async fn update(
        &self,
        admin_id: i64,
        accommodation_id: i64,
        input: UpdateAccommodationInput,
    ) -> AppResult<Accommodation> {
        input
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let existing = self.get(accommodation_id).await?;

        let accommodation = sqlx::query_as::<_, Accommodation>(&format!(
            r#"
            UPDATE accommodations
            SET name = $1, address = $2, city = $3, contact_phone = $4, status = $5,
                updated_at = NOW(), updated_by = $6
            WHERE id = $7
            RETURNING {ACCOMMODATION_COLUMNS}
            "#
        ))
        .bind(input.name.unwrap_or(existing.name))
        .bind(input.address.unwrap_or(existing.address))
        .bind(input.city.or(existing.city))
        .bind(input.contact_phone.or(existing.contact_phone))
        .bind(input.status.unwrap_or(existing.status))
        .bind(admin_id)
        .bind(accommodation_id)
        .fetch_one(&self.db)
        .await?;

        Ok(accommodation)
    }

    pub async fn delete(&self, admin_id: i64, accommodation_id: i64) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE accommodations SET status = 'deleted', updated_at = NOW(), updated_by = $1
            WHERE id = $2 AND status <> 'deleted'
            "#,
        )
        .bind(admin_id)
        .bind(accommodation_id)
        .execute(&self.db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Accommodation".to_string()));
        }

        Ok(())
    }
}
