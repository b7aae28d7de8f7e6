//! Low-order lunar longitude.
//!
//! Two models at different fidelities:
//! - [`moon_tropical_longitude_deg`]: a four-term truncation of the main
//!   ELP series (evection, variation, annual equation), good to about
//!   0.3 deg. Used for the Moon sign and nakshatra readings.
//! - [`moon_simple_tropical_longitude_deg`]: mean longitude plus the
//!   equation of center only, good to a couple of degrees. Used where a
//!   cheap Moon position feeds coarse whole-chart heuristics.

use jyotir_time::{days_since_j2000, julian_centuries, normalize_360};

use crate::ayanamsha::tropical_to_sidereal;

/// Tropical lunar longitude from a four-term series, in degrees.
pub fn moon_tropical_longitude_deg(jd: f64) -> f64 {
    let t = julian_centuries(jd);

    // Mean elements (Meeus chapter 47, truncated).
    let lp = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t * t
        + t * t * t / 538_841.0;
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t * t;
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t * t;

    let d_rad = d.to_radians();
    let mp_rad = mp.to_radians();

    // Solar-anomaly terms fall below the truncation threshold.
    let dl = (6_288.016 * mp_rad.sin()
        + 1_274.242 * (2.0 * d_rad - mp_rad).sin()
        + 658.314 * (2.0 * d_rad).sin()
        + 214.818 * (2.0 * mp_rad).sin())
        / 1_000_000.0
        * 360.0;

    normalize_360(lp + dl)
}

/// Sidereal lunar longitude (series model) in degrees.
pub fn moon_sidereal_longitude_deg(jd: f64) -> f64 {
    tropical_to_sidereal(moon_tropical_longitude_deg(jd))
}

/// Tropical lunar longitude from mean motion plus the equation of
/// center, in degrees.
pub fn moon_simple_tropical_longitude_deg(jd: f64) -> f64 {
    let days = days_since_j2000(jd);

    let l = 218.316_447_7 + 13.176_396_48 * days;
    let mp = 134.963_411_4 + 13.064_989_99 * days;

    normalize_360(l + 6.289 * mp.to_radians().sin())
}

/// Sidereal lunar longitude (simple model) in degrees.
pub fn moon_simple_sidereal_longitude_deg(jd: f64) -> f64 {
    tropical_to_sidereal(moon_simple_tropical_longitude_deg(jd))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyotir_time::J2000_JD;

    #[test]
    fn moon_advances_about_13_degrees_per_day() {
        let a = moon_tropical_longitude_deg(J2000_JD);
        let b = moon_tropical_longitude_deg(J2000_JD + 1.0);
        let step = normalize_360(b - a);
        assert!((step - 13.2).abs() < 1.5, "step = {step}");
    }

    #[test]
    fn moon_returns_after_a_sidereal_month() {
        let a = moon_tropical_longitude_deg(J2000_JD);
        let b = moon_tropical_longitude_deg(J2000_JD + 27.321_661);
        let diff = normalize_360(b - a);
        assert!(diff < 4.0 || diff > 356.0, "diff = {diff}");
    }

    #[test]
    fn models_agree_to_a_few_degrees() {
        for k in 0..30 {
            let jd = J2000_JD + k as f64 * 11.0;
            let full = moon_tropical_longitude_deg(jd);
            let simple = moon_simple_tropical_longitude_deg(jd);
            let diff = normalize_360(full - simple);
            let sep = diff.min(360.0 - diff);
            assert!(sep < 8.0, "jd {jd}: full {full} vs simple {simple}");
        }
    }

    #[test]
    fn sidereal_differs_by_ayanamsa() {
        let diff = normalize_360(
            moon_tropical_longitude_deg(J2000_JD) - moon_sidereal_longitude_deg(J2000_JD),
        );
        assert!((diff - 23.15).abs() < 1e-12);
    }
}
