//! Order lifecycle service
//!
//! Orders arrive from the public storefront; here they are listed, moved
//! through the status machine and, on cancellation, their inventory impact
//! is reversed. Every multi-entity reconciliation runs inside a single
//! database transaction so a partial failure rolls back instead of leaving
//! stock half-reconciled.

use serde::Deserialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use shared::allocation::{plan_cancellation, CancellationLine, CancellationPlan};
use shared::models::{
    Order, OrderDetail, OrderStatus, OrderTastingLine, Payment, PaymentStatus,
};
use shared::types::{Paged, Pagination};

/// Order service
#[derive(Clone)]
pub struct OrderService {
    db: PgPool,
}

/// Filters accepted by the order list endpoint
#[derive(Debug, Default, Deserialize)]
pub struct OrderListFilter {
    pub status: Option<OrderStatus>,
    pub customer_id: Option<i64>,
}

const ORDER_COLUMNS: &str = "id, status, customer_id, delivery_schedule_id, accommodation_id, \
     subtotal, discount, shipping_cost, tax, total, created_at, updated_at, created_by, updated_by";

impl OrderService {
    /// Create a new OrderService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List orders, newest first
    pub async fn list(
        &self,
        pagination: &Pagination,
        filter: &OrderListFilter,
    ) -> AppResult<Paged<Order>> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM orders
            WHERE ($1::order_status IS NULL OR status = $1)
              AND ($2::bigint IS NULL OR customer_id = $2)
            "#,
        )
        .bind(filter.status)
        .bind(filter.customer_id)
        .fetch_one(&self.db)
        .await?;

        let orders = sqlx::query_as::<_, Order>(&format!(
            r#"
            SELECT {ORDER_COLUMNS} FROM orders
            WHERE ($1::order_status IS NULL OR status = $1)
              AND ($2::bigint IS NULL OR customer_id = $2)
            ORDER BY created_at DESC
            LIMIT $3 OFFSET $4
            "#
        ))
        .bind(filter.status)
        .bind(filter.customer_id)
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.db)
        .await?;

        Ok(Paged::new(orders, total, pagination))
    }

    /// Get an order with its tasting line items
    pub async fn get(&self, order_id: i64) -> AppResult<OrderDetail> {
        let order = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"
        ))
        .bind(order_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Order".to_string()))?;

        let tastings = sqlx::query_as::<_, OrderTastingLine>(
            r#"
            SELECT ot.tasting_id, t.name AS tasting_name, ot.quantity, ot.unit_price
            FROM order_tastings ot
            JOIN tastings t ON t.id = ot.tasting_id
            WHERE ot.order_id = $1
            ORDER BY ot.tasting_id
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.db)
        .await?;

        Ok(OrderDetail { order, tastings })
    }

    /// Apply a status transition requested by an admin.
    ///
    /// Cancellation goes through [`cancel`](Self::cancel) so the inventory
    /// reversal cannot be skipped. A transition to `delivered` is gated on a
    /// completed payment; the structured `PAYMENT_NOT_COMPLETED` signal tells
    /// the caller to use the confirm-and-deliver path instead.
    pub async fn transition(
        &self,
        order_id: i64,
        target: OrderStatus,
        admin_id: i64,
    ) -> AppResult<Order> {
        if target == OrderStatus::Cancelled {
            return Err(AppError::InvalidStateTransition(
                "Use the cancellation endpoint to cancel an order".to_string(),
            ));
        }

        let order = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"
        ))
        .bind(order_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Order".to_string()))?;

        if !order.status.can_transition_to(target) {
            return Err(AppError::InvalidStateTransition(format!(
                "Order cannot move from {} to {}",
                order.status.as_str(),
                target.as_str()
            )));
        }

        if target == OrderStatus::Delivered {
            let payment_status = sqlx::query_scalar::<_, PaymentStatus>(
                "SELECT status FROM payments WHERE order_id = $1",
            )
            .bind(order_id)
            .fetch_optional(&self.db)
            .await?;

            if !payment_status.map_or(false, PaymentStatus::allows_delivery) {
                return Err(AppError::PaymentNotCompleted);
            }
        }

        let updated = sqlx::query_as::<_, Order>(&format!(
            r#"
            UPDATE orders SET status = $1, updated_at = NOW(), updated_by = $2
            WHERE id = $3
            RETURNING {ORDER_COLUMNS}
            "#
        ))
        .bind(target)
        .bind(admin_id)
        .bind(order_id)
        .fetch_one(&self.db)
        .await?;

        Ok(updated)
    }

    /// Combined confirmed step: mark the payment completed and the order
    /// delivered. Both writes happen in one transaction.
    pub async fn confirm_payment_and_deliver(
        &self,
        order_id: i64,
        admin_id: i64,
    ) -> AppResult<Order> {
        let mut tx = self.db.begin().await?;

        let order = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1 FOR UPDATE"
        ))
        .bind(order_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Order".to_string()))?;

        if !order.status.can_transition_to(OrderStatus::Delivered) {
            return Err(AppError::InvalidStateTransition(format!(
                "Order cannot move from {} to delivered",
                order.status.as_str()
            )));
        }

        let payment_updated = sqlx::query(
            "UPDATE payments SET status = $1, updated_at = NOW(), updated_by = $2 WHERE order_id = $3",
        )
        .bind(PaymentStatus::Completed)
        .bind(admin_id)
        .bind(order_id)
        .execute(&mut *tx)
        .await?;

        if payment_updated.rows_affected() == 0 {
            return Err(AppError::NotFound("Payment".to_string()));
        }

        let updated = sqlx::query_as::<_, Order>(&format!(
            r#"
            UPDATE orders SET status = $1, updated_at = NOW(), updated_by = $2
            WHERE id = $3
            RETURNING {ORDER_COLUMNS}
            "#
        ))
        .bind(OrderStatus::Delivered)
        .bind(admin_id)
        .bind(order_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(updated)
    }

    /// Cancel an order and reverse its inventory impact.
    ///
    /// Refund gate: with a completed payment and no confirmation this returns
    /// the structured `REFUND_REQUIRED` signal without touching anything.
    /// With confirmation the payment is marked refunded in the same
    /// transaction that restores stock and cancels the order.
    pub async fn cancel(
        &self,
        order_id: i64,
        admin_id: i64,
        refund_confirmed: bool,
    ) -> AppResult<Order> {
        let mut tx = self.db.begin().await?;

        let order = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1 FOR UPDATE"
        ))
        .bind(order_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Order".to_string()))?;

        // Cancelling a cancelled order must never double-apply the reversal
        if !order.status.can_transition_to(OrderStatus::Cancelled) {
            return Err(AppError::InvalidStateTransition(format!(
                "Order cannot move from {} to cancelled",
                order.status.as_str()
            )));
        }

        let payment = sqlx::query_as::<_, Payment>(
            r#"
            SELECT id, order_id, status, amount, payment_method_id, created_at, updated_at, updated_by
            FROM payments WHERE order_id = $1 FOR UPDATE
            "#,
        )
        .bind(order_id)
        .fetch_optional(&mut *tx)
        .await?;

        let needs_refund = payment
            .as_ref()
            .map_or(false, |p| p.status.needs_refund_on_cancel());

        if needs_refund && !refund_confirmed {
            // Dropping the transaction rolls it back; nothing was written.
            return Err(AppError::RefundRequired);
        }

        let plan = self.build_cancellation_plan(&mut tx, order_id).await?;
        self.apply_cancellation_plan(&mut tx, &plan, admin_id).await?;

        if needs_refund {
            sqlx::query(
                "UPDATE payments SET status = $1, updated_at = NOW(), updated_by = $2 WHERE order_id = $3",
            )
            .bind(PaymentStatus::Refunded)
            .bind(admin_id)
            .bind(order_id)
            .execute(&mut *tx)
            .await?;
        }

        let cancelled = sqlx::query_as::<_, Order>(&format!(
            r#"
            UPDATE orders SET status = $1, updated_at = NOW(), updated_by = $2
            WHERE id = $3
            RETURNING {ORDER_COLUMNS}
            "#
        ))
        .bind(OrderStatus::Cancelled)
        .bind(admin_id)
        .bind(order_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(cancelled)
    }

    /// Load the order's line items with their tasting compositions and plan
    /// the counter reversal
    async fn build_cancellation_plan(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        order_id: i64,
    ) -> AppResult<CancellationPlan> {
        let items = sqlx::query_as::<_, (i64, i32)>(
            "SELECT tasting_id, quantity FROM order_tastings WHERE order_id = $1 ORDER BY tasting_id",
        )
        .bind(order_id)
        .fetch_all(&mut **tx)
        .await?;

        let tasting_ids: Vec<i64> = items.iter().map(|(id, _)| *id).collect();

        let compositions = sqlx::query_as::<_, (i64, i64)>(
            "SELECT tasting_id, wine_id FROM tasting_wines WHERE tasting_id = ANY($1) ORDER BY wine_id",
        )
        .bind(&tasting_ids)
        .fetch_all(&mut **tx)
        .await?;

        let lines: Vec<CancellationLine> = items
            .into_iter()
            .map(|(tasting_id, quantity)| CancellationLine {
                tasting_id,
                quantity,
                wine_ids: compositions
                    .iter()
                    .filter(|(t, _)| *t == tasting_id)
                    .map(|(_, w)| *w)
                    .collect(),
            })
            .collect();

        Ok(plan_cancellation(&lines))
    }

    /// Apply the planned deltas. Updates are guarded so a `sold` counter can
    /// never be driven negative; a guard miss aborts the transaction.
    async fn apply_cancellation_plan(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        plan: &CancellationPlan,
        admin_id: i64,
    ) -> AppResult<()> {
        for adj in &plan.tastings {
            let result = sqlx::query(
                r#"
                UPDATE tastings
                SET stock = stock + $1, sold = sold + $2, updated_at = NOW(), updated_by = $3
                WHERE id = $4 AND sold + $2 >= 0
                "#,
            )
            .bind(adj.stock_delta)
            .bind(adj.sold_delta)
            .bind(admin_id)
            .bind(adj.tasting_id)
            .execute(&mut **tx)
            .await?;

            if result.rows_affected() == 0 {
                return Err(AppError::StockInconsistent(format!(
                    "Reversal would drive sold below zero for tasting {}",
                    adj.tasting_id
                )));
            }
        }

        for adj in &plan.wines {
            let result = sqlx::query(
                r#"
                UPDATE wines
                SET stock = stock + $1, reserved_stock = reserved_stock + $2,
                    sold = sold + $3, updated_at = NOW(), updated_by = $4
                WHERE id = $5 AND sold + $3 >= 0
                "#,
            )
            .bind(adj.stock_delta)
            .bind(adj.reserved_delta)
            .bind(adj.sold_delta)
            .bind(admin_id)
            .bind(adj.wine_id)
            .execute(&mut **tx)
            .await?;

            if result.rows_affected() == 0 {
                return Err(AppError::StockInconsistent(format!(
                    "Reversal would drive sold below zero for wine {}",
                    adj.wine_id
                )));
            }
        }

        Ok(())
    }
}
