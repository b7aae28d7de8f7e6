//! Upapada lagna (marriage arudha) from a simplified arudha derivation.
//!
//! The arudha house comes from a date-only sidereal time plus a
//! time-of-day offset and a latitude correction term; the upapada is the
//! 12th house from it. This is the coarse whole-house scheme, not a
//! cusp-level arudha computation.

use jyotir_time::civil::CivilTime;
use jyotir_time::{local_sidereal_time_deg, normalize_360};
use jyotir_vedic_base::{
    ALL_SIGNS, Element, Planet, ZodiacSign, sign_lord, sign_traits,
};

use crate::navamsa::{VargaAspect, VargaReading};

/// The upapada placement with lord, aspects, and reading.
#[derive(Debug, Clone, PartialEq)]
pub struct UpapadaLagna {
    pub upapada_sign: ZodiacSign,
    pub lord: Planet,
    pub aspects: Vec<VargaAspect>,
    pub interpretation: VargaReading,
}

/// Integer Julian Day Number of a calendar date (Fliegel-Van Flandern).
fn date_jdn(year: i32, month: u32, day: u32) -> f64 {
    let a = (14 - month as i64) / 12;
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;
    let jdn = day as i64 + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045;
    jdn as f64
}

/// Arudha house (1-12) from the simplified ascendant estimate.
fn arudha_house(birth: &CivilTime, latitude_deg: f64, longitude_deg: f64) -> u8 {
    let decimal_time = birth.hour as f64 + birth.minute as f64 / 60.0;
    let jdn = date_jdn(birth.year, birth.month, birth.day);
    let lst = local_sidereal_time_deg(jdn, longitude_deg);

    let ascendant = lst + decimal_time * 15.0 - latitude_deg * lst.to_radians().cos();
    let ascendant = normalize_360(ascendant);

    (ascendant / 30.0).floor() as u8 + 1
}

/// The upapada lagna for a birth time and place.
pub fn upapada_for_birth(birth: &CivilTime, latitude_deg: f64, longitude_deg: f64) -> UpapadaLagna {
    let arudha = arudha_house(birth, latitude_deg, longitude_deg);
    // 12th house from the arudha lagna.
    let upapada_house = ((arudha + 10) % 12) + 1;

    let sign = ALL_SIGNS[(upapada_house - 1) as usize];
    let lord = sign_lord(sign);

    UpapadaLagna {
        upapada_sign: sign,
        lord,
        aspects: upapada_aspects(sign, lord),
        interpretation: upapada_reading(sign),
    }
}

fn upapada_aspects(sign: ZodiacSign, lord: Planet) -> Vec<VargaAspect> {
    let mut aspects = vec![VargaAspect {
        planet: lord,
        aspect: format!("Lord of {}", sign.name()),
        influence: format!(
            "Primary influence on marriage and relationships through {}'s qualities",
            lord.name()
        ),
    }];

    aspects.push(match sign_traits(sign).element {
        Element::Fire => VargaAspect {
            planet: Planet::Sun,
            aspect: "Trine to Fire signs".to_string(),
            influence: "Brings leadership and vitality to relationships".to_string(),
        },
        Element::Earth => VargaAspect {
            planet: Planet::Saturn,
            aspect: "Trine to Earth signs".to_string(),
            influence: "Adds stability and longevity to partnerships".to_string(),
        },
        Element::Air => VargaAspect {
            planet: Planet::Mercury,
            aspect: "Trine to Air signs".to_string(),
            influence: "Enhances communication and intellectual connection".to_string(),
        },
        Element::Water => VargaAspect {
            planet: Planet::Moon,
            aspect: "Trine to Water signs".to_string(),
            influence: "Deepens emotional bonds and intuitive connection".to_string(),
        },
    });

    aspects
}

const fn upapada_reading(sign: ZodiacSign) -> VargaReading {
    match sign_traits(sign).element {
        Element::Fire => VargaReading {
            general: "Your Upapada Lagna in a fire sign indicates passionate and dynamic \
                      relationships.",
            timing: "Marriage possibilities are strong during Jupiter transits to fire \
                     signs.",
            recommendation: "Focus on balancing independence with partnership needs.",
        },
        Element::Earth => VargaReading {
            general: "Earth sign Upapada Lagna suggests stable and practical approach to \
                      relationships.",
            timing: "Venus transits to earth signs may bring marriage opportunities.",
            recommendation: "Work on emotional expression while maintaining stability.",
        },
        Element::Air => VargaReading {
            general: "Air sign Upapada indicates intellectual compatibility is important \
                      in relationships.",
            timing: "Mercury and Venus transits bring favorable periods for marriage.",
            recommendation: "Balance mental connection with emotional depth.",
        },
        Element::Water => VargaReading {
            general: "Water sign Upapada shows emotional depth and intuitive connection in \
                      relationships.",
            timing: "Moon transits to water signs activate marriage possibilities.",
            recommendation: "Focus on emotional boundaries while maintaining sensitivity.",
        },
    }
}
