//! Payment model and status values

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payment states.
///
/// No transition graph is enforced here: which status changes are offered is
/// a UI convention. The server only gates order delivery (needs `completed`)
/// and cancellation of a paid order (moves to `refunded` after confirmation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "payment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
        }
    }

    /// Delivery gate: an order may only be marked delivered once its payment
    /// is completed
    pub fn allows_delivery(self) -> bool {
        self == PaymentStatus::Completed
    }

    /// Refund gate: cancelling an order whose payment is completed requires
    /// an explicit refund confirmation
    pub fn needs_refund_on_cancel(self) -> bool {
        self == PaymentStatus::Completed
    }
}

/// A payment as stored; at most one per order
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Payment {
    pub id: i64,
    pub order_id: i64,
    pub status: PaymentStatus,
    pub amount: Decimal,
    pub payment_method_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub updated_by: Option<i64>,
}

/// Input for a payment status update
#[derive(Debug, Deserialize)]
pub struct UpdatePaymentStatusInput {
    pub status: PaymentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_completed_allows_delivery() {
        assert!(PaymentStatus::Completed.allows_delivery());
        assert!(!PaymentStatus::Pending.allows_delivery());
        assert!(!PaymentStatus::Failed.allows_delivery());
        assert!(!PaymentStatus::Refunded.allows_delivery());
    }

    #[test]
    fn test_only_completed_needs_refund() {
        assert!(PaymentStatus::Completed.needs_refund_on_cancel());
        assert!(!PaymentStatus::Pending.needs_refund_on_cancel());
        assert!(!PaymentStatus::Failed.needs_refund_on_cancel());
        assert!(!PaymentStatus::Refunded.needs_refund_on_cancel());
    }
}
