//! Monetary rounding and apportionment.

/// Round to 2 decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Split an order-level amount evenly across `count` line items.
///
/// The per-item share is rounded to 2 decimals, so the per-order
/// reconciliation error is bounded by `count * 0.005`. A zero item count
/// yields a zero share rather than a division error.
pub fn apportion(total: f64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    round2(total / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round2(5.005), 5.01);
        assert_eq!(round2(2.994), 2.99);
        assert_eq!(round2(10.0), 10.0);
    }

    #[test]
    fn apportions_evenly() {
        assert_eq!(apportion(10.0, 2), 5.0);
        assert_eq!(apportion(10.0, 3), 3.33);
        assert_eq!(apportion(7.5, 1), 7.5);
    }

    #[test]
    fn zero_items_yield_zero_share() {
        assert_eq!(apportion(10.0, 0), 0.0);
    }
}
