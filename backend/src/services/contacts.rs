//! Contact-form submissions
//!
//! Created by the storefront; admins only read and clear them.

use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use shared::models::Contact;
use shared::types::{Paged, Pagination};

#[derive(Clone)]
pub struct ContactService {
    db: PgPool,
}

const CONTACT_COLUMNS: &str = "id, name, email, phone, message, created_at";

impl ContactService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list(&self, pagination: &Pagination) -> AppResult<Paged<Contact>> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contacts")
            .fetch_one(&self.db)
            .await?;

        let contacts = sqlx::query_as::<_, Contact>(&format!(
            r#"
            SELECT {CONTACT_COLUMNS} FROM contacts
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#
        ))
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.db)
        .await?;

        Ok(Paged::new(contacts, total, pagination))
    }

    pub async fn get(&self, contact_id: i64) -> AppResult<Contact> {
        sqlx::query_as::<_, Contact>(&format!(
            "SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = $1"
        ))
        .bind(contact_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Contact".to_string()))
    }

    pub async fn delete(&self, contact_id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(contact_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Contact".to_string()));
        }

        Ok(())
    }
}
