//! Atmakaraka (soul significator) selection and readings.
//!
//! The Atmakaraka is the graha that has advanced furthest into its sign,
//! i.e. the highest degree-within-sign among the nine coarse longitudes.

use jyotir_ephem::graha_mean_longitudes;
use jyotir_vedic_base::{ALL_PLANETS, Planet, sign_from_longitude};

/// Four-part soul-path reading for an Atmakaraka planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtmakarakaInterpretation {
    pub general: &'static str,
    pub karmic_lessons: &'static str,
    pub spiritual_path: &'static str,
    pub life_purpose: &'static str,
}

/// The selected Atmakaraka with its reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atmakaraka {
    pub planet: Planet,
    /// Tropical longitude of the planet in degrees.
    pub longitude_deg: f64,
    /// Degrees advanced within its sign [0, 30).
    pub degrees_in_sign: f64,
    pub characteristics: [&'static str; 4],
    pub interpretation: AtmakarakaInterpretation,
}

/// Select the Atmakaraka from coarse graha longitudes.
pub fn atmakaraka_at(days_since_j2000: f64) -> Atmakaraka {
    let positions = graha_mean_longitudes(days_since_j2000);

    let mut best = Planet::Sun;
    let mut best_deg = -1.0;
    for p in ALL_PLANETS {
        let deg = sign_from_longitude(positions.longitude(p)).degrees_in_sign;
        if deg > best_deg {
            best = p;
            best_deg = deg;
        }
    }

    Atmakaraka {
        planet: best,
        longitude_deg: positions.longitude(best),
        degrees_in_sign: best_deg,
        characteristics: atmakaraka_characteristics(best),
        interpretation: atmakaraka_interpretation(best),
    }
}

/// Keyword characteristics of a planet acting as Atmakaraka.
pub const fn atmakaraka_characteristics(planet: Planet) -> [&'static str; 4] {
    match planet {
        Planet::Sun => [
            "Leadership",
            "Authority",
            "Self-expression",
            "Divine consciousness",
        ],
        Planet::Moon => ["Emotional wisdom", "Nurturing", "Intuition", "Inner peace"],
        Planet::Mars => ["Courage", "Initiative", "Protection", "Dynamic action"],
        Planet::Mercury => ["Communication", "Intelligence", "Adaptability", "Learning"],
        Planet::Jupiter => ["Wisdom", "Expansion", "Teaching", "Higher purpose"],
        Planet::Venus => ["Love", "Harmony", "Beauty", "Relationships"],
        Planet::Saturn => ["Discipline", "Responsibility", "Wisdom", "Structure"],
        Planet::Rahu => ["Innovation", "Transformation", "Desire", "Evolution"],
        Planet::Ketu => ["Liberation", "Spirituality", "Detachment", "Enlightenment"],
    }
}

/// Soul-path reading for a planet acting as Atmakaraka.
pub const fn atmakaraka_interpretation(planet: Planet) -> AtmakarakaInterpretation {
    match planet {
        Planet::Sun => AtmakarakaInterpretation {
            general: "As your Atmakaraka, the Sun indicates a soul journey focused on \
                      leadership, authenticity, and self-realization.",
            karmic_lessons: "Learning to balance ego with humility and to express your true \
                             divine nature.",
            spiritual_path: "Development of self-awareness and connection to divine \
                             consciousness.",
            life_purpose: "To shine your light and inspire others through authentic \
                           leadership and creative expression.",
        },
        Planet::Moon => AtmakarakaInterpretation {
            general: "The Moon as Atmakaraka suggests a soul journey centered on emotional \
                      wisdom and nurturing energy.",
            karmic_lessons: "Understanding and healing emotional patterns, developing \
                             emotional intelligence.",
            spiritual_path: "Cultivation of inner peace and emotional stability.",
            life_purpose: "To share emotional wisdom and create nurturing spaces for \
                           others' growth.",
        },
        Planet::Mars => AtmakarakaInterpretation {
            general: "Mars as your Atmakaraka indicates a soul journey of courage, \
                      initiative, and protective action.",
            karmic_lessons: "Learning to channel energy constructively and stand up for \
                             truth.",
            spiritual_path: "Development of spiritual warrior qualities and protective \
                             service.",
            life_purpose: "To initiate positive change and protect those in need.",
        },
        Planet::Mercury => AtmakarakaInterpretation {
            general: "Mercury as Atmakaraka suggests a soul journey focused on \
                      communication and intellectual growth.",
            karmic_lessons: "Developing clear communication and using knowledge wisely.",
            spiritual_path: "Integration of spiritual wisdom through study and teaching.",
            life_purpose: "To share knowledge and facilitate understanding between people.",
        },
        Planet::Jupiter => AtmakarakaInterpretation {
            general: "Jupiter as your Atmakaraka indicates a soul journey of expanding \
                      wisdom and spiritual teaching.",
            karmic_lessons: "Learning to balance material and spiritual abundance.",
            spiritual_path: "Development of wisdom and spiritual understanding.",
            life_purpose: "To teach and inspire others in their spiritual growth.",
        },
        Planet::Venus => AtmakarakaInterpretation {
            general: "Venus as Atmakaraka suggests a soul journey centered on love, beauty, \
                      and harmonious relationships.",
            karmic_lessons: "Learning to balance giving and receiving love, understanding \
                             true value.",
            spiritual_path: "Cultivation of divine love and artistic expression.",
            life_purpose: "To create beauty and harmony in the world through relationships \
                           and art.",
        },
        Planet::Saturn => AtmakarakaInterpretation {
            general: "Saturn as your Atmakaraka indicates a soul journey of discipline and \
                      responsibility.",
            karmic_lessons: "Learning patience, persistence, and acceptance of life's \
                             limitations.",
            spiritual_path: "Development of spiritual discipline and service.",
            life_purpose: "To build lasting structures that serve humanity's growth.",
        },
        Planet::Rahu => AtmakarakaInterpretation {
            general: "Rahu as Atmakaraka suggests a soul journey of transformation and \
                      spiritual evolution.",
            karmic_lessons: "Learning to transform worldly desires into spiritual \
                             aspirations.",
            spiritual_path: "Integration of material and spiritual worlds.",
            life_purpose: "To innovate and bring new perspectives to spiritual growth.",
        },
        Planet::Ketu => AtmakarakaInterpretation {
            general: "Ketu as your Atmakaraka indicates a soul journey focused on spiritual \
                      liberation.",
            karmic_lessons: "Learning to balance spiritual detachment with worldly \
                             responsibilities.",
            spiritual_path: "Development of deep spiritual insight and liberation.",
            life_purpose: "To help others find spiritual liberation through detachment.",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_is_total_and_in_range() {
        for &days in &[0.0, 1234.5, -9876.0, 20_000.25] {
            let ak = atmakaraka_at(days);
            assert!((0.0..30.0).contains(&ak.degrees_in_sign), "days {days}");
            assert!((0.0..360.0).contains(&ak.longitude_deg));
        }
    }

    #[test]
    fn selection_picks_the_deepest_planet() {
        let ak = atmakaraka_at(0.0);
        let positions = graha_mean_longitudes(0.0);
        for p in ALL_PLANETS {
            let deg = sign_from_longitude(positions.longitude(p)).degrees_in_sign;
            assert!(deg <= ak.degrees_in_sign, "{} deeper in sign", p.name());
        }
    }

    #[test]
    fn every_planet_has_a_reading() {
        for p in ALL_PLANETS {
            let i = atmakaraka_interpretation(p);
            assert!(!i.general.is_empty());
            assert!(!i.life_purpose.is_empty());
            for c in atmakaraka_characteristics(p) {
                assert!(!c.is_empty());
            }
        }
    }
}
