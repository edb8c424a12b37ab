//! Property tests for the apportionment bound.

use proptest::prelude::*;

use shopdw_core::apportion;

proptest! {
    /// The per-order reconciliation error of evenly split, 2-decimal
    /// rounded shares stays within item_count * 0.005.
    #[test]
    fn apportioned_amounts_reconcile(total in 0.0f64..10_000.0, count in 1usize..50) {
        let share = apportion(total, count);
        let reconstructed = share * count as f64;
        let bound = count as f64 * 0.005 + 1e-6;
        prop_assert!(
            (reconstructed - total).abs() <= bound,
            "total={total} count={count} share={share} reconstructed={reconstructed}"
        );
    }

    #[test]
    fn share_is_always_rounded_to_cents(total in 0.0f64..10_000.0, count in 1usize..50) {
        let share = apportion(total, count);
        let cents = share * 100.0;
        prop_assert!((cents - cents.round()).abs() < 1e-6);
    }
}
