//! Affine map from a physical range onto the canonical interval `[-1, 1]`.

/// Map `value` from `[low, high]` onto `[-1, 1]`.
///
/// No clamping: values outside `[low, high]` land outside `[-1, 1]`.
/// Callers guarantee `low < high`.
pub fn map_to_symmetric(value: f64, low: f64, high: f64) -> f64 {
    2.0 * (value - low) / (high - low) - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_and_midpoint() {
        for &(lo, hi) in &[(0.1, 1.0), (0.3, 0.9), (0.03, 0.18), (3.0, 6.0)] {
            assert!((map_to_symmetric(lo, lo, hi) + 1.0).abs() < 1e-12);
            assert!((map_to_symmetric(hi, lo, hi) - 1.0).abs() < 1e-12);
            assert!(map_to_symmetric((lo + hi) / 2.0, lo, hi).abs() < 1e-12);
        }
    }

    #[test]
    fn monotonic_and_unclamped() {
        let a = map_to_symmetric(3.5, 3.0, 6.0);
        let b = map_to_symmetric(4.5, 3.0, 6.0);
        assert!(a < b);
        assert!((map_to_symmetric(7.5, 3.0, 6.0) - 2.0).abs() < 1e-12);
        assert!((map_to_symmetric(1.5, 3.0, 6.0) + 2.0).abs() < 1e-12);
    }
}
