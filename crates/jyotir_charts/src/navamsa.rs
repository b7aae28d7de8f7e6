//! Navamsa (D9 divisional chart) of the Moon.
//!
//! Each sign splits into nine parts of 3 deg 20'; the navamsa sign is
//! counted from Aries as `sign * 9 + part`, wrapped over twelve signs.

use jyotir_ephem::moon_simple_tropical_longitude_deg;
use jyotir_time::calendar_to_jd;
use jyotir_time::civil::CivilTime;
use jyotir_vedic_base::{
    ALL_SIGNS, Element, Planet, ZodiacSign, sign_from_longitude, sign_lord, sign_traits,
};

/// Span of one navamsa part: 30/9 = 3 deg 20'.
pub const NAVAMSA_SPAN: f64 = 30.0 / 9.0;

/// One planetary influence on a varga (divisional) placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VargaAspect {
    pub planet: Planet,
    pub aspect: String,
    pub influence: String,
}

/// Three-part reading for a varga placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VargaReading {
    pub general: &'static str,
    pub timing: &'static str,
    pub recommendation: &'static str,
}

/// The Moon's navamsa placement with lord, aspects, and reading.
#[derive(Debug, Clone, PartialEq)]
pub struct Navamsa {
    pub navamsa_sign: ZodiacSign,
    pub lord: Planet,
    pub aspects: Vec<VargaAspect>,
    pub interpretation: VargaReading,
}

/// Navamsa sign for an ecliptic longitude.
pub fn navamsa_sign_of(lon_deg: f64) -> ZodiacSign {
    let info = sign_from_longitude(lon_deg);
    let part = (info.degrees_in_sign / NAVAMSA_SPAN).floor() as usize;
    ALL_SIGNS[(info.sign_index as usize * 9 + part.min(8)) % 12]
}

/// The Moon's navamsa chart for a birth time.
pub fn navamsa_for_birth(birth: &CivilTime) -> Navamsa {
    let jd = calendar_to_jd(birth);
    let moon_lon = moon_simple_tropical_longitude_deg(jd);
    navamsa_from_moon(moon_lon)
}

/// Build the navamsa reading from a Moon longitude.
pub fn navamsa_from_moon(moon_lon_deg: f64) -> Navamsa {
    let sign = navamsa_sign_of(moon_lon_deg);
    let lord = sign_lord(sign);

    Navamsa {
        navamsa_sign: sign,
        lord,
        aspects: navamsa_aspects(sign, lord),
        interpretation: navamsa_reading(sign),
    }
}

fn navamsa_aspects(sign: ZodiacSign, lord: Planet) -> Vec<VargaAspect> {
    let mut aspects = vec![VargaAspect {
        planet: lord,
        aspect: format!("Lord of {}", sign.name()),
        influence: format!("Primary influence through {}'s qualities", lord.name()),
    }];

    aspects.push(match sign_traits(sign).element {
        Element::Fire => VargaAspect {
            planet: Planet::Sun,
            aspect: "Trine to Fire signs".to_string(),
            influence: "Enhances leadership and spiritual growth".to_string(),
        },
        Element::Earth => VargaAspect {
            planet: Planet::Saturn,
            aspect: "Trine to Earth signs".to_string(),
            influence: "Strengthens stability and material success".to_string(),
        },
        Element::Air => VargaAspect {
            planet: Planet::Mercury,
            aspect: "Trine to Air signs".to_string(),
            influence: "Boosts intellectual and spiritual understanding".to_string(),
        },
        Element::Water => VargaAspect {
            planet: Planet::Moon,
            aspect: "Trine to Water signs".to_string(),
            influence: "Deepens emotional and spiritual connection".to_string(),
        },
    });

    aspects
}

const fn navamsa_reading(sign: ZodiacSign) -> VargaReading {
    match sign_traits(sign).element {
        Element::Fire => VargaReading {
            general: "Your Navamsa in a fire sign indicates strong spiritual leadership \
                      potential.",
            timing: "Favorable periods occur during Jupiter transits to fire signs.",
            recommendation: "Focus on balancing spiritual pursuits with worldly \
                             responsibilities.",
        },
        Element::Earth => VargaReading {
            general: "Earth sign Navamsa suggests practical approach to spirituality.",
            timing: "Venus transits to earth signs activate spiritual growth.",
            recommendation: "Ground spiritual practices in daily routine.",
        },
        Element::Air => VargaReading {
            general: "Air sign Navamsa indicates intellectual approach to spirituality.",
            timing: "Mercury transits bring periods of spiritual insight.",
            recommendation: "Balance intellectual understanding with devotional practice.",
        },
        Element::Water => VargaReading {
            general: "Water sign Navamsa shows deep intuitive connection to spirituality.",
            timing: "Moon transits enhance spiritual receptivity.",
            recommendation: "Trust your intuition while maintaining practical grounding.",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_aries_stays_aries() {
        assert_eq!(navamsa_sign_of(0.0), ZodiacSign::Aries);
    }

    #[test]
    fn advances_once_per_part() {
        // First nine parts of Aries walk Aries..Sagittarius.
        for part in 0..9usize {
            let lon = part as f64 * NAVAMSA_SPAN + 0.1;
            assert_eq!(navamsa_sign_of(lon), ALL_SIGNS[part], "part {part}");
        }
        // Taurus starts its navamsa count at Capricorn.
        assert_eq!(navamsa_sign_of(30.1), ZodiacSign::Capricorn);
    }

    #[test]
    fn last_part_of_pisces_is_pisces() {
        // 11 * 9 + 8 = 107, 107 % 12 = 11.
        assert_eq!(navamsa_sign_of(359.9), ZodiacSign::Pisces);
    }

    #[test]
    fn aspects_lead_with_the_lord() {
        let n = navamsa_from_moon(100.0); // Cancer -> water group
        assert_eq!(n.aspects[0].planet, n.lord);
        assert!(n.aspects[0].aspect.starts_with("Lord of"));
        assert_eq!(n.aspects.len(), 2);
    }

    #[test]
    fn element_groups_share_readings() {
        let fire = navamsa_from_moon(0.5); // Aries navamsa
        assert!(fire.interpretation.general.contains("fire sign"));
    }
}
