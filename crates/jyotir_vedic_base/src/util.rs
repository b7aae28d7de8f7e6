//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // Tiny negative remainders round up to exactly 360.0.
    if r == 360.0 { 0.0 } else { r }
}

/// Shortest angular separation between two longitudes, in [0, 180].
pub fn angular_separation(a_deg: f64, b_deg: f64) -> f64 {
    let d = normalize_360(a_deg - b_deg);
    if d > 180.0 { 360.0 - d } else { d }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-30.0) - 330.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_positive_unchanged() {
        assert!((normalize_360(123.0) - 123.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_tiny_negative_stays_below_360() {
        // -1e-16 + 360.0 rounds to exactly 360.0 in f64.
        assert_eq!(normalize_360(-1e-16), 0.0);
        for &deg in &[-1e-16, -1e-13, 360.0, -360.0, 720.0] {
            let r = normalize_360(deg);
            assert!((0.0..360.0).contains(&r), "{deg} -> {r}");
        }
    }

    #[test]
    fn separation_simple() {
        assert!((angular_separation(10.0, 40.0) - 30.0).abs() < 1e-12);
    }

    #[test]
    fn separation_wraps() {
        assert!((angular_separation(355.0, 5.0) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn separation_symmetric() {
        assert!(
            (angular_separation(100.0, 250.0) - angular_separation(250.0, 100.0)).abs() < 1e-12
        );
    }
}
