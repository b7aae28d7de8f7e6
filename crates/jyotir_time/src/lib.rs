//! Civil time, Julian Date conversion, and sidereal time.
//!
//! All downstream calculations consume Julian Dates produced here. Birth
//! times are naive local civil times: no timezone or UTC-offset field is
//! carried anywhere in the pipeline (see [`CivilTime`]).

pub mod civil;
pub mod julian;
pub mod sidereal;

pub use civil::CivilTime;
pub use julian::{J2000_JD, calendar_to_jd, days_since_j2000, julian_centuries};
pub use sidereal::{gmst_deg, local_sidereal_time_deg};

/// Normalize an angle to [0, 360) degrees. Idempotent.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // Tiny negative remainders round up to exactly 360.0.
    if r == 360.0 { 0.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert!((normalize_360(0.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_positive_in_range() {
        assert!((normalize_360(123.45) - 123.45).abs() < 1e-15);
    }

    #[test]
    fn normalize_360_wraps_to_zero() {
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_large_multiple() {
        assert!((normalize_360(1085.0) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_tiny_negative_stays_below_360() {
        // -1e-16 + 360.0 rounds to exactly 360.0 in f64.
        assert_eq!(normalize_360(-1e-16), 0.0);
        for &deg in &[-1e-16, -1e-13, -360.0, 719.999_999_999_999_9] {
            let r = normalize_360(deg);
            assert!((0.0..360.0).contains(&r), "{deg} -> {r}");
        }
    }

    #[test]
    fn normalize_idempotent() {
        for &x in &[-720.5, -1.0, 0.0, 359.999, 500.0, 123456.789] {
            let once = normalize_360(x);
            let twice = normalize_360(once);
            assert!((once - twice).abs() < 1e-12, "not idempotent for {x}");
        }
    }
}
