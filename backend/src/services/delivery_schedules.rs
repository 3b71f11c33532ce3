//! Delivery schedule management service

use sqlx::PgPool;
use validator::Validate;

use crate::error::{AppError, AppResult};
use shared::models::{CreateDeliveryScheduleInput, DeliverySchedule, UpdateDeliveryScheduleInput};
use shared::types::{Paged, Pagination};

#[derive(Clone)]
pub struct DeliveryScheduleService {
    db: PgPool,
}

const SCHEDULE_COLUMNS: &str = "id, delivery_date, start_time, end_time, status, \
     created_at, updated_at, created_by, updated_by";

impl DeliveryScheduleService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list(&self, pagination: &Pagination) -> AppResult<Paged<DeliverySchedule>> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM delivery_schedules WHERE status <> 'deleted'",
        )
        .fetch_one(&self.db)
        .await?;

        let schedules = sqlx::query_as::<_, DeliverySchedule>(&format!(
            r#"
            SELECT {SCHEDULE_COLUMNS} FROM delivery_schedules
            WHERE status <> 'deleted'
            ORDER BY delivery_date, start_time
            LIMIT $1 OFFSET $2
            "#
        ))
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.db)
        .await?;

        Ok(Paged::new(schedules, total, pagination))
    }

    pub async fn get(&self, schedule_id: i64) -> AppResult<DeliverySchedule> {
        sqlx::query_as::<_, DeliverySchedule>(&format!(
            "SELECT {SCHEDULE_COLUMNS} FROM delivery_schedules WHERE id = $1 AND status <> 'deleted'"
        ))
        .bind(schedule_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Delivery schedule".to_string()))
    }

    pub async fn create(
        &self,
        admin_id: i64,
        input: CreateDeliveryScheduleInput,
    ) -> AppResult<DeliverySchedule> {
        input
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;
        if input.end_time <= input.start_time {
            return Err(AppError::ValidationError(
                "End time must be after start time".to_string(),
            ));
        }

        let schedule = sqlx::query_as::<_, DeliverySchedule>(&format!(
            r#"
            INSERT INTO delivery_schedules (delivery_date, start_time, end_time, status, created_by, updated_by)
            VALUES ($1, $2, $3, 'active', $4, $4)
            RETURNING {SCHEDULE_COLUMNS}
            "#
        ))
        .bind(input.delivery_date)
        .bind(input.start_time)
        .bind(input.end_time)
        .bind(admin_id)
        .fetch_one(&self.db)
        .await?;

        Ok(schedule)
    }

    pub async fn update(
        &self,
        admin_id: i64,
        schedule_id: i64,
        input: UpdateDeliveryScheduleInput,
    ) -> AppResult<DeliverySchedule> {
        let existing = self.get(schedule_id).await?;

        let start_time = input.start_time.unwrap_or(existing.start_time);
        let end_time = input.end_time.unwrap_or(existing.end_time);
        if end_time <= start_time {
            return Err(AppError::ValidationError(
                "End time must be after start time".to_string(),
            ));
        }

        let schedule = sqlx::query_as::<_, DeliverySchedule>(&format!(
            r#"
            UPDATE delivery_schedules
            SET delivery_date = $1, start_time = $2, end_time = $3, status = $4,
                updated_at = NOW(), updated_by = $5
            WHERE id = $6
            RETURNING {SCHEDULE_COLUMNS}
            "#
        ))
        .bind(input.delivery_date.unwrap_or(existing.delivery_date))
        .bind(start_time)
        .bind(end_time)
        .bind(input.status.unwrap_or(existing.status))
        .bind(admin_id)
        .bind(schedule_id)
        .fetch_one(&self.db)
        .await?;

        Ok(schedule)
    }

    pub async fn delete(&self, admin_id: i64, schedule_id: i64) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE delivery_schedules SET status = 'deleted', updated_at = NOW(), updated_by = $1
            WHERE id = $2 AND status <> 'deleted'
            "#,
        )
        .bind(admin_id)
        .bind(schedule_id)
        .execute(&self.db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Delivery schedule".to_string()));
        }

        Ok(())
    }
}
