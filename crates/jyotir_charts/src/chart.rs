//! Chart-level readings assembled from time, ephemeris, and Vedic math.
//!
//! Every function here is a deterministic pure computation over its
//! arguments. Sign and nakshatra readings use the sidereal Sun/Moon;
//! the ascendant and the whole-chart heuristics (yogas, Atmakaraka)
//! follow the coarse tropical path with no ayanamsa applied.

use jyotir_ephem::{
    graha_mean_longitudes, moon_sidereal_longitude_deg, moon_simple_sidereal_longitude_deg,
    sun_sidereal_longitude_deg,
};
use jyotir_time::civil::CivilTime;
use jyotir_time::{calendar_to_jd, days_since_j2000, julian_centuries, local_sidereal_time_deg};
use jyotir_vedic_base::{
    CompatibilityBand, DashaInfluence, DashaPeriod, GrahaLongitudes, GunaBreakdown, Nakshatra,
    NakshatraInfo, NakshatraReadingText, NakshatraTraits, Planet, SignInfo, SignTraits, YogaMatch,
    ZodiacSign, ascendant_longitude_deg, compatibility_band, dasha_influence, detect_yogas,
    guna_milan, nakshatra_from_longitude, nakshatra_interpretation, nakshatra_traits,
    obliquity_deg, sign_from_longitude, sign_lord, sign_traits, vimshottari_periods,
};

use crate::atmakaraka::{Atmakaraka, atmakaraka_at};

/// The ascendant at birth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RisingSign {
    /// Ascendant ecliptic longitude in degrees.
    pub ascendant_deg: f64,
    pub sign: SignInfo,
    pub ruling_planet: Planet,
    pub traits: SignTraits,
}

/// The sidereal Sun sign at birth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunSign {
    pub sidereal_longitude_deg: f64,
    pub sign: SignInfo,
    pub traits: SignTraits,
}

/// The sidereal Moon sign with its nakshatra.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonSignNakshatra {
    pub sidereal_longitude_deg: f64,
    pub sign: SignInfo,
    pub nakshatra: NakshatraInfo,
}

/// Full birth-nakshatra reading.
#[derive(Debug, Clone, PartialEq)]
pub struct NakshatraReading {
    pub info: NakshatraInfo,
    pub traits: NakshatraTraits,
    pub reading: NakshatraReadingText,
}

/// One mahadasha with its interpretive text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashaPeriodReading {
    pub period: DashaPeriod,
    pub influence: DashaInfluence,
}

/// Guna Milan result with banded interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GunaMilan {
    pub breakdown: GunaBreakdown,
    pub total: u8,
    pub band: CompatibilityBand,
}

/// Ascendant sign for a birth time and place.
pub fn compute_rising_sign(birth: &CivilTime, latitude_deg: f64, longitude_deg: f64) -> RisingSign {
    let jd = calendar_to_jd(birth);
    let lst = local_sidereal_time_deg(jd, longitude_deg);
    let eps = obliquity_deg(julian_centuries(jd));
    let ascendant = ascendant_longitude_deg(lst, latitude_deg, eps);
    let sign = sign_from_longitude(ascendant);

    RisingSign {
        ascendant_deg: ascendant,
        sign,
        ruling_planet: sign_lord(sign.sign),
        traits: sign_traits(sign.sign),
    }
}

/// Sidereal Sun sign for a birth time.
pub fn compute_sun_sign(birth: &CivilTime) -> SunSign {
    let jd = calendar_to_jd(birth);
    let lon = sun_sidereal_longitude_deg(jd);
    let sign = sign_from_longitude(lon);

    SunSign {
        sidereal_longitude_deg: lon,
        sign,
        traits: sign_traits(sign.sign),
    }
}

/// Sidereal Moon sign and nakshatra for a birth time.
pub fn compute_moon_sign_and_nakshatra(birth: &CivilTime) -> MoonSignNakshatra {
    let jd = calendar_to_jd(birth);
    let lon = moon_sidereal_longitude_deg(jd);

    MoonSignNakshatra {
        sidereal_longitude_deg: lon,
        sign: sign_from_longitude(lon),
        nakshatra: nakshatra_from_longitude(lon),
    }
}

/// Birth-nakshatra reading with lore and interpretive text.
pub fn compute_nakshatra(birth: &CivilTime) -> NakshatraReading {
    let jd = calendar_to_jd(birth);
    let info = nakshatra_from_longitude(moon_sidereal_longitude_deg(jd));

    NakshatraReading {
        info,
        traits: nakshatra_traits(info.nakshatra),
        reading: nakshatra_interpretation(info.nakshatra, info.pada),
    }
}

/// One full Vimshottari cycle of 9 mahadashas from birth.
///
/// The dasha Moon uses the single-term model, which is accurate enough
/// for nakshatra-level placement and keeps the period arithmetic cheap.
pub fn compute_dasha_periods(birth: &CivilTime) -> [DashaPeriodReading; 9] {
    let jd = calendar_to_jd(birth);
    let moon_lon = moon_simple_sidereal_longitude_deg(jd);
    let periods = vimshottari_periods(jd, moon_lon);

    periods.map(|period| DashaPeriodReading {
        period,
        influence: dasha_influence(period.planet),
    })
}

/// Atmakaraka for a birth time.
pub fn compute_atmakaraka(birth: &CivilTime) -> Atmakaraka {
    let jd = calendar_to_jd(birth);
    atmakaraka_at(days_since_j2000(jd))
}

/// Detected yogas for a birth time, strongest first. May be empty.
pub fn compute_yogas(birth: &CivilTime) -> Vec<YogaMatch> {
    let jd = calendar_to_jd(birth);
    let positions: GrahaLongitudes = graha_mean_longitudes(days_since_j2000(jd));
    detect_yogas(&positions)
}

/// Guna Milan score for two Moon sign/nakshatra pairs.
pub fn compute_guna_milan(
    sign1: ZodiacSign,
    nakshatra1: Nakshatra,
    sign2: ZodiacSign,
    nakshatra2: Nakshatra,
) -> GunaMilan {
    let breakdown = guna_milan(sign1, nakshatra1, sign2, nakshatra2);
    let total = breakdown.total();

    GunaMilan {
        breakdown,
        total,
        band: compatibility_band(total),
    }
}

/// Banded interpretation for a raw guna total.
pub const fn interpret_guna_total(total: u8) -> CompatibilityBand {
    compatibility_band(total)
}
