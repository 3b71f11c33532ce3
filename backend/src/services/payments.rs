//! Payment status coordination
//!
//! Reads and writes payment status with audit fields. No transition graph is
//! enforced here: which status changes are offered is a UI convention. The
//! server-side gates live in the order service (delivery needs a completed
//! payment, cancelling a paid order refunds it).

use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use shared::models::{Payment, PaymentStatus};

/// Payment service
#[derive(Clone)]
pub struct PaymentService {
    db: PgPool,
}

const PAYMENT_COLUMNS: &str =
    "id, order_id, status, amount, payment_method_id, created_at, updated_at, updated_by";

impl PaymentService {
    /// Create a new PaymentService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get a payment by id
    pub async fn get(&self, payment_id: i64) -> AppResult<Payment> {
        sqlx::query_as::<_, Payment>(&format!(
            "SELECT {PAYMENT_COLUMNS} FROM payments WHERE id = $1"
        ))
        .bind(payment_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Payment".to_string()))
    }

    /// Get the payment for an order
    pub async fn get_by_order(&self, order_id: i64) -> AppResult<Payment> {
        sqlx::query_as::<_, Payment>(&format!(
            "SELECT {PAYMENT_COLUMNS} FROM payments WHERE order_id = $1"
        ))
        .bind(order_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Payment".to_string()))
    }

    /// Set a payment's status with audit fields
    pub async fn set_status(
        &self,
        admin_id: i64,
        payment_id: i64,
        status: PaymentStatus,
    ) -> AppResult<Payment> {
        sqlx::query_as::<_, Payment>(&format!(
            r#"
            UPDATE payments SET status = $1, updated_at = NOW(), updated_by = $2
            WHERE id = $3
            RETURNING {PAYMENT_COLUMNS}
            "#
        ))
        .bind(status)
        .bind(admin_id)
        .bind(payment_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Payment".to_string()))
    }
}
