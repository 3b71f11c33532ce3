//! Order lifecycle tests
//!
//! Tests for the order status machine:
//! - the fulfilment chain moves strictly forward, one step at a time
//! - cancellation is reachable from any non-terminal status
//! - terminal statuses admit no further transitions

use proptest::prelude::*;
use shared::OrderStatus;

const ALL_STATUSES: [OrderStatus; 5] = [
    OrderStatus::Pending,
    OrderStatus::Processing,
    OrderStatus::Shipped,
    OrderStatus::Delivered,
    OrderStatus::Cancelled,
];

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_fulfilment_chain_order() {
        assert_eq!(OrderStatus::Pending.next(), Some(OrderStatus::Processing));
        assert_eq!(OrderStatus::Processing.next(), Some(OrderStatus::Shipped));
        assert_eq!(OrderStatus::Shipped.next(), Some(OrderStatus::Delivered));
        assert_eq!(OrderStatus::Delivered.next(), None);
        assert_eq!(OrderStatus::Cancelled.next(), None);
    }

    #[test]
    fn test_no_skipping_steps() {
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Shipped));
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Delivered));
        assert!(!OrderStatus::Processing.can_transition_to(OrderStatus::Delivered));
    }

    #[test]
    fn test_no_moving_backwards() {
        assert!(!OrderStatus::Shipped.can_transition_to(OrderStatus::Processing));
        assert!(!OrderStatus::Processing.can_transition_to(OrderStatus::Pending));
        assert!(!OrderStatus::Delivered.can_transition_to(OrderStatus::Shipped));
    }

    #[test]
    fn test_cancel_from_any_non_terminal_status() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Cancelled));
        assert!(OrderStatus::Processing.can_transition_to(OrderStatus::Cancelled));
        assert!(OrderStatus::Shipped.can_transition_to(OrderStatus::Cancelled));
    }

    #[test]
    fn test_terminal_statuses_are_frozen() {
        for target in ALL_STATUSES {
            assert!(!OrderStatus::Delivered.can_transition_to(target));
            assert!(!OrderStatus::Cancelled.can_transition_to(target));
        }
    }

    #[test]
    fn test_no_self_transitions() {
        for status in ALL_STATUSES {
            assert!(!status.can_transition_to(status));
        }
    }

    #[test]
    fn test_terminal_flags() {
        assert!(!OrderStatus::Pending.is_terminal());
        assert!(!OrderStatus::Processing.is_terminal());
        assert!(!OrderStatus::Shipped.is_terminal());
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(OrderStatus::Pending.as_str(), "pending");
        assert_eq!(OrderStatus::Processing.as_str(), "processing");
        assert_eq!(OrderStatus::Shipped.as_str(), "shipped");
        assert_eq!(OrderStatus::Delivered.as_str(), "delivered");
        assert_eq!(OrderStatus::Cancelled.as_str(), "cancelled");
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn status_strategy() -> impl Strategy<Value = OrderStatus> {
        prop::sample::select(ALL_STATUSES.to_vec())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Every legal transition is either the single forward step or a
        /// cancellation of a non-terminal order.
        #[test]
        fn prop_transitions_are_forward_or_cancel(
            from in status_strategy(),
            to in status_strategy()
        ) {
            if from.can_transition_to(to) {
                let forward = from.next() == Some(to);
                let cancel = to == OrderStatus::Cancelled && !from.is_terminal();
                prop_assert!(forward || cancel);
            }
        }

        /// Terminal statuses never allow any transition.
        #[test]
        fn prop_terminal_statuses_admit_nothing(
            from in status_strategy(),
            to in status_strategy()
        ) {
            if from.is_terminal() {
                prop_assert!(!from.can_transition_to(to));
            }
        }

        /// Walking the chain from Pending always ends at Delivered in
        /// exactly three steps.
        #[test]
        fn prop_chain_terminates(_seed in 0u8..255) {
            let mut status = OrderStatus::Pending;
            let mut steps = 0;
            while let Some(next) = status.next() {
                status = next;
                steps += 1;
                prop_assert!(steps <= 3);
            }
            prop_assert_eq!(status, OrderStatus::Delivered);
            prop_assert_eq!(steps, 3);
        }
    }
}
