//! Pure stock-allocation and reconciliation math
//!
//! Every mutation the backend makes to tasting/wine counters is first planned
//! here as a set of deltas, then applied inside a single database
//! transaction. Keeping the arithmetic free of I/O lets the invariants be
//! tested exhaustively.
//!
//! The invariant maintained throughout: a wine's `reserved_stock` equals the
//! sum of `stock` over all non-deleted tastings containing that wine.

use serde::Serialize;

/// One order line feeding the cancellation planner
#[derive(Debug, Clone)]
pub struct CancellationLine {
    pub tasting_id: i64,
    /// Number of tasting bundles ordered on this line
    pub quantity: i32,
    /// Wines composing the tasting, one unit each per bundle
    pub wine_ids: Vec<i64>,
}

/// Planned counter changes for one tasting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TastingAdjustment {
    pub tasting_id: i64,
    pub stock_delta: i32,
    pub sold_delta: i32,
}

/// Planned counter changes for one wine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WineAdjustment {
    pub wine_id: i64,
    pub stock_delta: i32,
    pub reserved_delta: i32,
    pub sold_delta: i32,
}

/// The full set of counter changes for an order cancellation
#[derive(Debug, Clone, Default, Serialize)]
pub struct CancellationPlan {
    pub tastings: Vec<TastingAdjustment>,
    pub wines: Vec<WineAdjustment>,
}

impl CancellationPlan {
    pub fn is_empty(&self) -> bool {
        self.tastings.is_empty() && self.wines.is_empty()
    }
}

/// Plan the inventory reversal for cancelling an order.
///
/// For each line of quantity `q`: the tasting gets back `q` stock and loses
/// `q` sold; every composing wine gets back `q` stock and `q` reserved_stock
/// and loses `q` sold. Deltas for a wine appearing in several ordered
/// tastings are merged into a single adjustment.
pub fn plan_cancellation(lines: &[CancellationLine]) -> CancellationPlan {
    let mut plan = CancellationPlan::default();

    for line in lines {
        let q = line.quantity;
        plan.tastings.push(TastingAdjustment {
            tasting_id: line.tasting_id,
            stock_delta: q,
            sold_delta: -q,
        });

        for &wine_id in &line.wine_ids {
            match plan.wines.iter_mut().find(|w| w.wine_id == wine_id) {
                Some(adj) => {
                    adj.stock_delta += q;
                    adj.reserved_delta += q;
                    adj.sold_delta -= q;
                }
                None => plan.wines.push(WineAdjustment {
                    wine_id,
                    stock_delta: q,
                    reserved_delta: q,
                    sold_delta: -q,
                }),
            }
        }
    }

    plan
}

/// Upper bound for a tasting's stock given its composing wines.
///
/// The tasting may hold at most its current stock plus the tightest wine
/// headroom `wine.stock - wine.reserved_stock`. A tasting with no wines is
/// unconstrained.
pub fn max_tasting_stock<I>(current_stock: i32, wine_availability: I) -> i32
where
    I: IntoIterator<Item = (i32, i32)>,
{
    let headroom = wine_availability
        .into_iter()
        .map(|(stock, reserved)| stock - reserved)
        .min();

    match headroom {
        Some(h) => current_stock.saturating_add(h),
        None => i32::MAX,
    }
}

/// Reserved stock left on a wine after a tasting is soft-deleted.
///
/// Releases the tasting's current stock from the reservation, floored at
/// zero so a drifted counter can never go negative.
pub fn release_reserved(reserved_stock: i32, tasting_stock: i32) -> i32 {
    (reserved_stock - tasting_stock).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_plan_symmetry() {
        let plan = plan_cancellation(&[CancellationLine {
            tasting_id: 5,
            quantity: 2,
            wine_ids: vec![1, 2],
        }]);

        assert_eq!(
            plan.tastings,
            vec![TastingAdjustment {
                tasting_id: 5,
                stock_delta: 2,
                sold_delta: -2,
            }]
        );
        assert_eq!(plan.wines.len(), 2);
        for adj in &plan.wines {
            assert_eq!(adj.stock_delta, 2);
            assert_eq!(adj.reserved_delta, 2);
            assert_eq!(adj.sold_delta, -2);
        }
    }

    #[test]
    fn test_shared_wine_deltas_merge() {
        let plan = plan_cancellation(&[
            CancellationLine {
                tasting_id: 1,
                quantity: 2,
                wine_ids: vec![10, 11],
            },
            CancellationLine {
                tasting_id: 2,
                quantity: 3,
                wine_ids: vec![11, 12],
            },
        ]);

        let shared = plan.wines.iter().find(|w| w.wine_id == 11).unwrap();
        assert_eq!(shared.stock_delta, 5);
        assert_eq!(shared.reserved_delta, 5);
        assert_eq!(shared.sold_delta, -5);
        assert_eq!(plan.wines.len(), 3);
    }

    #[test]
    fn test_empty_order_plans_nothing() {
        assert!(plan_cancellation(&[]).is_empty());
    }

    #[test]
    fn test_max_stock_tightest_wine_wins() {
        // wine headrooms: 20-6=14 and 15-12=3
        assert_eq!(max_tasting_stock(3, [(20, 6), (15, 12)]), 6);
    }

    #[test]
    fn test_max_stock_no_headroom() {
        assert_eq!(max_tasting_stock(4, [(10, 10)]), 4);
    }

    #[test]
    fn test_max_stock_unconstrained_without_wines() {
        assert_eq!(max_tasting_stock(7, std::iter::empty()), i32::MAX);
    }

    #[test]
    fn test_release_reserved_floors_at_zero() {
        assert_eq!(release_reserved(6, 4), 2);
        assert_eq!(release_reserved(3, 5), 0);
        assert_eq!(release_reserved(0, 0), 0);
    }
}
