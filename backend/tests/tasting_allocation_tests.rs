//! Tasting stock allocation and cancellation reconciliation tests
//!
//! Tests for the pure allocation math:
//! - cancellation plans mirror the original sale exactly
//! - per-wine deltas merge when a wine appears in several ordered tastings
//! - the tasting stock bound follows the tightest composing wine
//! - reserved stock released by deleting a tasting never goes negative

use proptest::prelude::*;
use shared::allocation::{
    max_tasting_stock, plan_cancellation, release_reserved, CancellationLine,
};

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Cancelling an order with 2 units of a tasting of two wines:
    /// the tasting goes from stock 3 / sold 10 to 5 / 8, wine A from
    /// stock 20 / reserved 6 / sold 40 to 22 / 8 / 38, wine B from
    /// 15 / 6 / 40 to 17 / 8 / 38.
    #[test]
    fn test_cancellation_restores_counters() {
        let plan = plan_cancellation(&[CancellationLine {
            tasting_id: 1,
            quantity: 2,
            wine_ids: vec![100, 200],
        }]);

        let t = &plan.tastings[0];
        assert_eq!((3 + t.stock_delta, 10 + t.sold_delta), (5, 8));

        let a = plan.wines.iter().find(|w| w.wine_id == 100).unwrap();
        assert_eq!(
            (20 + a.stock_delta, 6 + a.reserved_delta, 40 + a.sold_delta),
            (22, 8, 38)
        );

        let b = plan.wines.iter().find(|w| w.wine_id == 200).unwrap();
        assert_eq!(
            (15 + b.stock_delta, 6 + b.reserved_delta, 40 + b.sold_delta),
            (17, 8, 38)
        );
    }

    #[test]
    fn test_multi_line_order_merges_shared_wine() {
        // Wine 2 appears in both ordered tastings
        let plan = plan_cancellation(&[
            CancellationLine {
                tasting_id: 1,
                quantity: 1,
                wine_ids: vec![1, 2],
            },
            CancellationLine {
                tasting_id: 2,
                quantity: 4,
                wine_ids: vec![2, 3],
            },
        ]);

        assert_eq!(plan.tastings.len(), 2);
        assert_eq!(plan.wines.len(), 3);

        let shared = plan.wines.iter().find(|w| w.wine_id == 2).unwrap();
        assert_eq!(shared.stock_delta, 5);
        assert_eq!(shared.reserved_delta, 5);
        assert_eq!(shared.sold_delta, -5);
    }

    #[test]
    fn test_empty_order_is_a_noop() {
        assert!(plan_cancellation(&[]).is_empty());
    }

    #[test]
    fn test_stock_bound_tracks_tightest_wine() {
        // headrooms 14 and 3: the second wine constrains the tasting
        assert_eq!(max_tasting_stock(3, [(20, 6), (15, 12)]), 6);
    }

    #[test]
    fn test_stock_bound_with_exhausted_wine() {
        // A fully reserved wine pins the tasting at its current stock
        assert_eq!(max_tasting_stock(4, [(10, 10), (50, 0)]), 4);
    }

    #[test]
    fn test_stock_bound_unconstrained_without_wines() {
        assert_eq!(max_tasting_stock(9, std::iter::empty()), i32::MAX);
    }

    #[test]
    fn test_release_reserved_exact_and_floored() {
        assert_eq!(release_reserved(10, 4), 6);
        assert_eq!(release_reserved(4, 4), 0);
        // Drifted counter: release never produces a negative reservation
        assert_eq!(release_reserved(2, 7), 0);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn line_strategy() -> impl Strategy<Value = CancellationLine> {
        // A tasting contains each wine at most once
        (1i64..100, 1i32..50, prop::collection::hash_set(1i64..20, 1..6)).prop_map(
            |(tasting_id, quantity, wine_ids)| CancellationLine {
                tasting_id,
                quantity,
                wine_ids: wine_ids.into_iter().collect(),
            },
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// For every tasting line, stock gained equals sold lost.
        #[test]
        fn prop_tasting_deltas_are_symmetric(
            lines in prop::collection::vec(line_strategy(), 0..8)
        ) {
            let plan = plan_cancellation(&lines);
            for adj in &plan.tastings {
                prop_assert_eq!(adj.stock_delta, -adj.sold_delta);
                prop_assert!(adj.stock_delta > 0);
            }
        }

        /// Each wine's merged delta equals the sum of quantities of the
        /// lines whose tasting contains it.
        #[test]
        fn prop_wine_deltas_sum_line_quantities(
            lines in prop::collection::vec(line_strategy(), 0..8)
        ) {
            let plan = plan_cancellation(&lines);
            for adj in &plan.wines {
                let expected: i32 = lines
                    .iter()
                    .filter(|l| l.wine_ids.contains(&adj.wine_id))
                    .map(|l| l.quantity)
                    .sum();
                prop_assert_eq!(adj.stock_delta, expected);
                prop_assert_eq!(adj.reserved_delta, expected);
                prop_assert_eq!(adj.sold_delta, -expected);
            }
        }

        /// Stock and reserved always move together for wines, so the
        /// available headroom (stock - reserved) is preserved exactly.
        #[test]
        fn prop_cancellation_preserves_wine_headroom(
            lines in prop::collection::vec(line_strategy(), 0..8)
        ) {
            let plan = plan_cancellation(&lines);
            for adj in &plan.wines {
                prop_assert_eq!(adj.stock_delta - adj.reserved_delta, 0);
            }
        }

        /// The bound never exceeds current stock plus the tightest
        /// headroom, and raising stock to the bound leaves every wine
        /// with non-negative availability.
        #[test]
        fn prop_stock_bound_is_safe(
            current in 0i32..1000,
            wines in prop::collection::vec((0i32..1000, 0i32..1000), 1..6)
        ) {
            let bound = max_tasting_stock(current, wines.iter().copied());
            let delta = bound - current;
            for (stock, reserved) in &wines {
                // Applying the full delta keeps reserved within stock
                prop_assert!(reserved + delta <= *stock);
            }
        }

        /// Released reservations are never negative and never release
        /// more than was reserved.
        #[test]
        fn prop_release_reserved_bounds(
            reserved in 0i32..10_000,
            tasting_stock in 0i32..10_000
        ) {
            let remaining = release_reserved(reserved, tasting_stock);
            prop_assert!(remaining >= 0);
            prop_assert!(remaining <= reserved);
            prop_assert!(remaining >= reserved - tasting_stock);
        }
    }
}
