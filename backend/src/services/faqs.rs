//! FAQ management service

use sqlx::PgPool;
use validator::Validate;

use crate::error::{AppError, AppResult};
use shared::models::{CreateFaqInput, Faq, UpdateFaqInput};
use shared::types::{Paged, Pagination};

#[derive(Clone)]
pub struct FaqService {
    db: PgPool,
}

const FAQ_COLUMNS: &str =
    "id, question, answer, position, status, created_at, updated_at, created_by, updated_by";

impl FaqService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list(&self, pagination: &Pagination) -> AppResult<Paged<Faq>> {
        let total =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM faqs WHERE status <> 'deleted'")
                .fetch_one(&self.db)
                .await?;

        let faqs = sqlx::query_as::<_, Faq>(&format!(
            r#"
            SELECT {FAQ_COLUMNS} FROM faqs
            WHERE status <> 'deleted'
            ORDER BY position, id
            LIMIT $1 OFFSET $2
            "#
        ))
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.db)
        .await?;

        Ok(Paged::new(faqs, total, pagination))
    }

    pub async fn get(&self, faq_id: i64) -> AppResult<Faq> {
        sqlx::query_as::<_, Faq>(&format!(
            "SELECT {FAQ_COLUMNS} FROM faqs WHERE id = $1 AND status <> 'deleted'"
        ))
        .bind(faq_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("FAQ".to_string()))
    }

    pub async fn create(&self, admin_id: i64, input: CreateFaqInput) -> AppResult<Faq> {
        input
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let faq = sqlx::query_as::<_, Faq>(&format!(
            r#"
            INSERT INTO faqs (question, answer, position, status, created_by, updated_by)
            VALUES ($1, $2, $3, 'active', $4, $4)
            RETURNING {FAQ_COLUMNS}
            "#
        ))
        .bind(&input.question)
        .bind(&input.answer)
        .bind(input.position)
        .bind(admin_id)
        .fetch_one(&self.db)
        .await?;

        Ok(faq)
    }

    pub async fn update(&self, admin_id: i64, faq_id: i64, input: UpdateFaqInput) -> AppResult<Faq> {
        input
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let existing = self.get(faq_id).await?;

        let faq = sqlx::query_as::<_, Faq>(&format!(
            r#"
            UPDATE faqs
            SET question = $1, answer = $2, position = $3, status = $4,
                updated_at = NOW(), updated_by = $5
            WHERE id = $6
            RETURNING {FAQ_COLUMNS}
            "#
        ))
        .bind(input.question.unwrap_or(existing.question))
        .bind(input.answer.unwrap_or(existing.answer))
        .bind(input.position.unwrap_or(existing.position))
        .bind(input.status.unwrap_or(existing.status))
        .bind(admin_id)
        .bind(faq_id)
        .fetch_one(&self.db)
        .await?;

        Ok(faq)
    }

    pub async fn delete(&self, admin_id: i64, faq_id: i64) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE faqs SET status = 'deleted', updated_at = NOW(), updated_by = $1
            WHERE id = $2 AND status <> 'deleted'
            "#,
        )
        .bind(admin_id)
        .bind(faq_id)
        .execute(&self.db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("FAQ".to_string()));
        }

        Ok(())
    }
}
