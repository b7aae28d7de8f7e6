//! Ayanamsa (tropical-to-sidereal offset).
//!
//! A single constant Lahiri value is used throughout: the slow secular
//! drift (~50 arcsec/year) is below the accuracy of the longitude models
//! in this crate, so a time-varying ayanamsa would add nothing.

/// Constant Lahiri ayanamsa in degrees.
pub const LAHIRI_AYANAMSHA_DEG: f64 = 23.15;

/// Convert a tropical ecliptic longitude to sidereal.
pub fn tropical_to_sidereal(tropical_lon_deg: f64) -> f64 {
    jyotir_time::normalize_360(tropical_lon_deg - LAHIRI_AYANAMSHA_DEG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidereal_is_tropical_minus_ayanamsa() {
        assert!((tropical_to_sidereal(100.0) - 76.85).abs() < 1e-12);
    }

    #[test]
    fn sidereal_wraps_below_zero() {
        let s = tropical_to_sidereal(10.0);
        assert!((s - (370.0 - 23.15 - 360.0)).abs() < 1e-12);
        assert!((0.0..360.0).contains(&s));
    }
}
