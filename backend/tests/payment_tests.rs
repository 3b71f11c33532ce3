//! Payment status and gating tests
//!
//! Tests for the payment rules enforced by the order endpoints:
//! - delivery requires a completed payment
//! - cancelling a completed payment requires refund confirmation
//! - input validation for amounts and quantities

use rust_decimal::Decimal;
use shared::validation::{validate_amount, validate_positive_quantity, validate_stock_target};
use shared::PaymentStatus;
use std::str::FromStr;

// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

const ALL_STATUSES: [PaymentStatus; 4] = [
    PaymentStatus::Pending,
    PaymentStatus::Completed,
    PaymentStatus::Failed,
    PaymentStatus::Refunded,
];

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(PaymentStatus::Pending.as_str(), "pending");
        assert_eq!(PaymentStatus::Completed.as_str(), "completed");
        assert_eq!(PaymentStatus::Failed.as_str(), "failed");
        assert_eq!(PaymentStatus::Refunded.as_str(), "refunded");
    }

    /// Only a completed payment satisfies the delivery gate.
    #[test]
    fn test_delivery_gate_needs_completed() {
        assert!(PaymentStatus::Completed.allows_delivery());
        assert!(!PaymentStatus::Pending.allows_delivery());
        assert!(!PaymentStatus::Failed.allows_delivery());
        assert!(!PaymentStatus::Refunded.allows_delivery());
    }

    /// An order with no payment record cannot pass the delivery gate.
    #[test]
    fn test_delivery_gate_closed_without_payment() {
        let payment_status: Option<PaymentStatus> = None;
        assert!(!payment_status.map_or(false, PaymentStatus::allows_delivery));
    }

    /// Only a completed payment needs a refund on cancellation.
    #[test]
    fn test_refund_needed_only_when_completed() {
        assert!(PaymentStatus::Completed.needs_refund_on_cancel());
        assert!(!PaymentStatus::Pending.needs_refund_on_cancel());
        assert!(!PaymentStatus::Failed.needs_refund_on_cancel());
        assert!(!PaymentStatus::Refunded.needs_refund_on_cancel());
    }

    /// Cancelling a paid order is blocked exactly when the refund is not
    /// confirmed; unpaid orders never hit the gate.
    #[test]
    fn test_refund_gate_blocks_unconfirmed_cancellation() {
        for status in ALL_STATUSES {
            for confirmed in [false, true] {
                let blocked = status.needs_refund_on_cancel() && !confirmed;
                assert_eq!(
                    blocked,
                    status == PaymentStatus::Completed && !confirmed,
                    "status {:?}, confirmed {}",
                    status,
                    confirmed
                );
            }
        }
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&PaymentStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
        let back: PaymentStatus = serde_json::from_str("\"refunded\"").unwrap();
        assert_eq!(back, PaymentStatus::Refunded);
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

#[cfg(test)]
mod validation_tests {
    use super::*;

    #[test]
    fn test_amount_must_be_non_negative() {
        assert!(validate_amount(dec("0")).is_ok());
        assert!(validate_amount(dec("19.90")).is_ok());
        assert!(validate_amount(dec("-0.01")).is_err());
    }

    #[test]
    fn test_quantity_must_be_positive() {
        assert!(validate_positive_quantity(1).is_ok());
        assert!(validate_positive_quantity(500).is_ok());
        assert!(validate_positive_quantity(0).is_err());
        assert!(validate_positive_quantity(-3).is_err());
    }

    #[test]
    fn test_stock_target_must_be_non_negative() {
        assert!(validate_stock_target(0).is_ok());
        assert!(validate_stock_target(25).is_ok());
        assert!(validate_stock_target(-1).is_err());
    }
}
