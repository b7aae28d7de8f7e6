//! Lagna (Ascendant) computation.
//!
//! Standard spherical astronomy formula for the ecliptic longitude of the
//! rising point, taking local sidereal time, geographic latitude, and the
//! obliquity of the ecliptic. All angles in degrees.

/// Mean obliquity of the ecliptic in degrees at T Julian centuries since
/// J2000.0 (cubic polynomial).
pub fn obliquity_deg(t_centuries: f64) -> f64 {
    let t = t_centuries;
    23.439_291_11 - 0.013_004_167 * t - 0.000_000_164 * t * t + 0.000_000_503 * t * t * t
}

/// Ecliptic longitude of the Ascendant in degrees, normalized to [0, 360).
///
/// `Asc = atan2(cos LST, -(sin LST * cos eps + tan phi * sin eps))`
///
/// Latitudes approaching +/-90 deg are not guarded: tan(phi) diverges and
/// the result may be numerically unstable there.
pub fn ascendant_longitude_deg(lst_deg: f64, latitude_deg: f64, obliquity_deg: f64) -> f64 {
    let lst = lst_deg.to_radians();
    let phi = latitude_deg.to_radians();
    let eps = obliquity_deg.to_radians();

    let asc = f64::atan2(lst.cos(), -(lst.sin() * eps.cos() + phi.tan() * eps.sin()));
    crate::util::normalize_360(asc.to_degrees())
}
