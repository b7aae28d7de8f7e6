//! Coarse tropical longitudes for all nine grahas at once.
//!
//! The Sun and Moon carry their equation of center; the five classical
//! planets use plain linear mean motion; Rahu is the retrograde mean
//! lunar node and Ketu sits exactly opposite. These are whole-chart
//! positions for yoga and atmakaraka heuristics, not per-body readings,
//! so degree-level accuracy is enough.

use jyotir_time::{J2000_JD, normalize_360};
use jyotir_vedic_base::{GrahaLongitudes, Planet};

use crate::moon::moon_simple_tropical_longitude_deg;

// Mean motion in degrees per day and longitude at J2000.0.
const MARS_RATE: f64 = 0.524_039;
const MARS_EPOCH: f64 = 355.453_32;
const MERCURY_RATE: f64 = 4.092_335;
const MERCURY_EPOCH: f64 = 168.656_2;
const JUPITER_RATE: f64 = 0.083_091;
const JUPITER_EPOCH: f64 = 34.351_51;
const VENUS_RATE: f64 = 1.602_136;
const VENUS_EPOCH: f64 = 50.416_1;
const SATURN_RATE: f64 = 0.033_459;
const SATURN_EPOCH: f64 = 50.077_4;
const NODE_RATE: f64 = 0.053_233;
const NODE_EPOCH: f64 = 259.183_275;

fn sun_coarse(days: f64) -> f64 {
    let m = (357.529_109_2 + 0.985_600_28 * days).to_radians();
    let c = 1.9148 * m.sin() + 0.0200 * (2.0 * m).sin();
    normalize_360(280.466_46 + 0.985_647_36 * days + c)
}

/// Tropical mean longitudes of all nine grahas, `days` after J2000.0.
pub fn graha_mean_longitudes(days: f64) -> GrahaLongitudes {
    let rahu = normalize_360(360.0 - (NODE_EPOCH + NODE_RATE * days));
    let ketu = normalize_360(rahu + 180.0);

    let mut longitudes = [0.0_f64; 9];
    longitudes[Planet::Sun.index() as usize] = sun_coarse(days);
    longitudes[Planet::Moon.index() as usize] = moon_simple_tropical_longitude_deg(J2000_JD + days);
    longitudes[Planet::Mars.index() as usize] = normalize_360(MARS_EPOCH + MARS_RATE * days);
    longitudes[Planet::Mercury.index() as usize] =
        normalize_360(MERCURY_EPOCH + MERCURY_RATE * days);
    longitudes[Planet::Jupiter.index() as usize] =
        normalize_360(JUPITER_EPOCH + JUPITER_RATE * days);
    longitudes[Planet::Venus.index() as usize] = normalize_360(VENUS_EPOCH + VENUS_RATE * days);
    longitudes[Planet::Saturn.index() as usize] =
        normalize_360(SATURN_EPOCH + SATURN_RATE * days);
    longitudes[Planet::Rahu.index() as usize] = rahu;
    longitudes[Planet::Ketu.index() as usize] = ketu;

    GrahaLongitudes { longitudes }
}
