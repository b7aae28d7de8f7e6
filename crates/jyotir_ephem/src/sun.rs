//! Low-order solar longitude (Meeus chapter 25 truncation).
//!
//! Accuracy is a few arcseconds over a few centuries around J2000,
//! far beyond what sign- and nakshatra-level classification needs.

use jyotir_time::{julian_centuries, normalize_360};

use crate::ayanamsha::tropical_to_sidereal;

/// Tropical (geometric mean + equation of center) solar longitude in degrees.
pub fn sun_tropical_longitude_deg(jd: f64) -> f64 {
    let t = julian_centuries(jd);

    let l0 = 280.46646 + 36_000.76983 * t + 0.000_3032 * t * t;
    let m = 357.52911 + 35_999.05029 * t - 0.000_1537 * t * t;
    let m_rad = m.to_radians();

    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m_rad.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m_rad).sin()
        + 0.000_289 * (3.0 * m_rad).sin();

    normalize_360(l0 + c)
}

/// Sidereal solar longitude in degrees.
pub fn sun_sidereal_longitude_deg(jd: f64) -> f64 {
    tropical_to_sidereal(sun_tropical_longitude_deg(jd))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyotir_time::J2000_JD;

    #[test]
    fn sun_near_280_at_j2000() {
        // True longitude at J2000.0 is about 280.46 deg.
        let lon = sun_tropical_longitude_deg(J2000_JD);
        assert!((lon - 280.46).abs() < 0.2, "lon = {lon}");
    }

    #[test]
    fn sun_advances_roughly_one_degree_per_day() {
        let a = sun_tropical_longitude_deg(J2000_JD);
        let b = sun_tropical_longitude_deg(J2000_JD + 1.0);
        let step = jyotir_time::normalize_360(b - a);
        assert!((step - 1.0).abs() < 0.1, "step = {step}");
    }

    #[test]
    fn sun_returns_after_a_tropical_year() {
        let a = sun_tropical_longitude_deg(J2000_JD);
        let b = sun_tropical_longitude_deg(J2000_JD + 365.2422);
        let diff = jyotir_time::normalize_360(b - a);
        assert!(diff < 0.5 || diff > 359.5, "diff = {diff}");
    }

    #[test]
    fn sidereal_differs_by_ayanamsa() {
        let trop = sun_tropical_longitude_deg(J2000_JD);
        let sid = sun_sidereal_longitude_deg(J2000_JD);
        let diff = jyotir_time::normalize_360(trop - sid);
        assert!((diff - 23.15).abs() < 1e-12);
    }
}
