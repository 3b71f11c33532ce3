//! Customer management service

use serde::Deserialize;
use sqlx::PgPool;
use validator::Validate;

use crate::error::{AppError, AppResult};
use shared::models::{CreateCustomerInput, Customer, UpdateCustomerInput};
use shared::types::{EntityStatus, Paged, Pagination};

#[derive(Clone)]
pub struct CustomerService {
    db: PgPool,
}

#[derive(Debug, Default, Deserialize)]
pub struct CustomerListFilter {
    pub status: Option<EntityStatus>,
    pub search: Option<String>,
}

const CUSTOMER_COLUMNS: &str =
    "id, name, email, phone, status, created_at, updated_at, created_by, updated_by";

impl CustomerService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        pagination: &Pagination,
        filter: &CustomerListFilter,
    ) -> AppResult<Paged<Customer>> {
        let search = filter.search.as_ref().map(|s| format!("%{}%", s));

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM customers
            WHERE ($1::entity_status IS NULL OR status = $1) AND status <> 'deleted'
              AND ($2::text IS NULL OR name ILIKE $2 OR email ILIKE $2)
            "#,
        )
        .bind(filter.status)
        .bind(&search)
        .fetch_one(&self.db)
        .await?;

        let customers = sqlx::query_as::<_, Customer>(&format!(
            r#"
            SELECT {CUSTOMER_COLUMNS} FROM customers
            WHERE ($1::entity_status IS NULL OR status = $1) AND status <> 'deleted'
              AND ($2::text IS NULL OR name ILIKE $2 OR email ILIKE $2)
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

        Ok(Paged::new(customers, total, pagination))
    }

    pub async fn get(&self, customer_id: i64) -> AppResult<Customer> {
        sqlx::query_as::<_, Customer>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE id = $1 AND status <> 'deleted'"
        ))
        .bind(customer_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Customer".to_string()))
    }

    pub async fn create(&self, admin_id: i64, input: CreateCustomerInput) -> AppResult<Customer> {
        input
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let customer = sqlx::query_as::<_, Customer>(&format!(
            r#"
            INSERT INTO customers (name, email, phone, status, created_by, updated_by)
            VALUES ($1, $2, $3, 'active', $4, $4)
            RETURNING {CUSTOMER_COLUMNS}
            "#
        ))
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(admin_id)
        .fetch_one(&self.db)
        .await?;

        Ok(customer)
    }

    pub async fn update(
        &self,
        admin_id: i64,
        customer_id: i64,
        input: UpdateCustomerInput,
    ) -> AppResult<Customer> {
        input
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let existing = self.get(customer_id).await?;

        let customer = sqlx::query_as::<_, Customer>(&format!(
            r#"
            UPDATE customers
            SET name = $1, email = $2, phone = $3, status = $4, updated_at = NOW(), updated_by = $5
            WHERE id = $6
            RETURNING {CUSTOMER_COLUMNS}
            "#
        ))
        .bind(input.name.unwrap_or(existing.name))
        .bind(input.email.unwrap_or(existing.email))
        .bind(input.phone.or(existing.phone))
        .bind(input.status.unwrap_or(existing.status))
        .bind(admin_id)
        .bind(customer_id)
        .fetch_one(&self.db)
        .await?;

        Ok(customer)
    }

    pub async fn delete(&self, admin_id: i64, customer_id: i64) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE customers SET status = 'deleted', updated_at = NOW(), updated_by = $1
            WHERE id = $2 AND status <> 'deleted'
            "#,
        )
        .bind(admin_id)
        .bind(customer_id)
        .execute(&self.db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Customer".to_string()));
        }

        Ok(())
    }
}
