//! Payment method management service

use sqlx::PgPool;
use validator::Validate;

use crate::error::{AppError, AppResult};
use shared::models::{CreatePaymentMethodInput, PaymentMethod, UpdatePaymentMethodInput};
use shared::types::{Paged, Pagination};

#[derive(Clone)]
pub struct PaymentMethodService {
    db: PgPool,
}

const METHOD_COLUMNS: &str =
    "id, name, description, status, created_at, updated_at, created_by, updated_by";

impl PaymentMethodService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list(&self, pagination: &Pagination) -> AppResult<Paged<PaymentMethod>> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM payment_methods WHERE status <> 'deleted'",
        )
        .fetch_one(&self.db)
        .await?;

        let methods = sqlx::query_as::<_, PaymentMethod>(&format!(
            r#"
            SELECT {METHOD_COLUMNS} FROM payment_methods
            WHERE status <> 'deleted'
            ORDER BY name
            LIMIT $1 OFFSET $2
            "#
        ))
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.db)
        .await?;

        Ok(Paged::new(methods, total, pagination))
    }

    pub async fn get(&self, method_id: i64) -> AppResult<PaymentMethod> {
        sqlx::query_as::<_, PaymentMethod>(&format!(
            "SELECT {METHOD_COLUMNS} FROM payment_methods WHERE id = $1 AND status <> 'deleted'"
        ))
        .bind(method_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Payment method".to_string()))
    }

    pub async fn create(
        &self,
        admin_id: i64,
        input: CreatePaymentMethodInput,
    ) -> AppResult<PaymentMethod> {
        input
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let method = sqlx::query_as::<_, PaymentMethod>(&format!(
            r#"
            INSERT INTO payment_methods (name, description, status, created_by, updated_by)
            VALUES ($1, $2, 'active', $3, $3)
            RETURNING {METHOD_COLUMNS}
            "#
        ))
        .bind(&input.name)
        .bind(&input.description)
        .bind(admin_id)
        .fetch_one(&self.db)
        .await?;

        Ok(method)
    }

    pub async fn update(
        &self,
        admin_id: i64,
        method_id: i64,
        input: UpdatePaymentMethodInput,
    ) -> AppResult<PaymentMethod> {
        input
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let existing = self.get(method_id).await?;

        let method = sqlx::query_as::<_, PaymentMethod>(&format!(
            r#"
            UPDATE payment_methods
            SET name = $1, description = $2, status = $3, updated_at = NOW(), updated_by = $4
            WHERE id = $5
            RETURNING {METHOD_COLUMNS}
            "#
        ))
        .bind(input.name.unwrap_or(existing.name))
        .bind(input.description.or(existing.description))
        .bind(input.status.unwrap_or(existing.status))
        .bind(admin_id)
        .bind(method_id)
        .fetch_one(&self.db)
        .await?;

        Ok(method)
    }

    pub async fn delete(&self, admin_id: i64, method_id: i64) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE payment_methods SET status = 'deleted', updated_at = NOW(), updated_by = $1
            WHERE id = $2 AND status <> 'deleted'
            "#,
        )
        .bind(admin_id)
        .bind(method_id)
        .execute(&self.db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Payment method".to_string()));
        }

        Ok(())
    }
}
