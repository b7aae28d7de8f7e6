//! Greenwich and local sidereal time, in degrees.
//!
//! Uses the simplified convention of the rest of this engine: geographic
//! longitude (east positive, decimal degrees) is added directly to the
//! Greenwich value in degrees, not converted to time units.

use crate::julian::{J2000_JD, julian_centuries};
use crate::normalize_360;

/// Greenwich mean sidereal time at a given Julian Date, in degrees.
///
/// GMST = 280.46061837 + 360.98564736629·(JD − J2000)
///        + 0.000387933·T² − T³/38710000
///
/// Returns a value normalized to [0, 360).
pub fn gmst_deg(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    let theta = 280.460_618_37 + 360.985_647_366_29 * (jd - J2000_JD) + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    normalize_360(theta)
}

/// Local sidereal time: GMST plus east-positive geographic longitude.
///
/// Returns a value normalized to [0, 360).
pub fn local_sidereal_time_deg(jd: f64, geo_lon_deg: f64) -> f64 {
    normalize_360(gmst_deg(jd) + geo_lon_deg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gmst_in_range() {
        for offset in [-40_000.0, -1.0, 0.0, 0.5, 1000.0, 80_000.0] {
            let g = gmst_deg(J2000_JD + offset);
            assert!((0.0..360.0).contains(&g), "gmst out of range: {g}");
        }
    }

    #[test]
    fn gmst_at_j2000() {
        // At J2000.0 the Greenwich sidereal angle is ~280.46 deg.
        let g = gmst_deg(J2000_JD);
        assert!((g - 280.460_618_37).abs() < 1e-9);
    }

    #[test]
    fn gmst_advances_about_361_per_day() {
        let g0 = gmst_deg(J2000_JD);
        let g1 = gmst_deg(J2000_JD + 1.0);
        let advance = normalize_360(g1 - g0);
        // Sidereal day is ~3m56s shorter than the solar day.
        assert!((advance - 0.985_647).abs() < 1e-3, "advance = {advance}");
    }

    #[test]
    fn lst_adds_east_longitude() {
        let jd = J2000_JD + 1234.5;
        let g = gmst_deg(jd);
        let l = local_sidereal_time_deg(jd, 77.2);
        assert!((l - normalize_360(g + 77.2)).abs() < 1e-10);
    }

    #[test]
    fn lst_west_longitude_subtracts() {
        let jd = J2000_JD + 10.0;
        let g = gmst_deg(jd);
        let l = local_sidereal_time_deg(jd, -0.1278); // London
        assert!((l - normalize_360(g - 0.1278)).abs() < 1e-10);
    }
}
