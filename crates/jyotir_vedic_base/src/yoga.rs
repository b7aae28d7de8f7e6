//! Yoga (auspicious combination) detection heuristics.
//!
//! These are longitude-proximity heuristics over tropical graha positions,
//! not a full house/dignity engine: each yoga compares separations against
//! fixed cusp angles with a tolerance, and accumulates a strength score.

use crate::planet::{GrahaLongitudes, Planet};
use crate::util::angular_separation;

/// The detected yoga kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Yoga {
    Raj,
    Dhana,
    GajaKesari,
    BudhAditya,
    Amala,
}

/// All yogas in detection order.
pub const ALL_YOGAS: [Yoga; 5] = [
    Yoga::Raj,
    Yoga::Dhana,
    Yoga::GajaKesari,
    Yoga::BudhAditya,
    Yoga::Amala,
];

impl Yoga {
    /// Traditional name of the yoga.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Raj => "Raj Yoga",
            Self::Dhana => "Dhana Yoga",
            Self::GajaKesari => "Gaja Kesari Yoga",
            Self::BudhAditya => "Budh-Aditya Yoga",
            Self::Amala => "Amala Yoga",
        }
    }

    /// Planets traditionally associated with the yoga.
    pub const fn planets(self) -> &'static [Planet] {
        match self {
            Self::Raj => &[Planet::Sun, Planet::Moon, Planet::Jupiter],
            Self::Dhana => &[Planet::Jupiter, Planet::Venus, Planet::Mercury],
            Self::GajaKesari => &[Planet::Jupiter, Planet::Moon],
            Self::BudhAditya => &[Planet::Sun, Planet::Mercury],
            Self::Amala => &[Planet::Jupiter, Planet::Venus, Planet::Mercury],
        }
    }
}

/// Static interpretive text for a yoga.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YogaInterpretation {
    pub general: &'static str,
    pub timing: &'static str,
    pub effects: [&'static str; 4],
}

/// Interpretive text for a yoga.
pub const fn yoga_interpretation(yoga: Yoga) -> YogaInterpretation {
    match yoga {
        Yoga::Raj => YogaInterpretation {
            general: "Raj Yoga indicates success, authority, and leadership potential.",
            timing: "Most effective during the dasha periods of involved planets.",
            effects: [
                "Rise in social status and recognition",
                "Leadership opportunities",
                "Material success and prosperity",
                "Political or administrative power",
            ],
        },
        Yoga::Dhana => YogaInterpretation {
            general: "Dhana Yoga brings wealth and financial prosperity.",
            timing: "Manifests strongly during Jupiter and Venus periods.",
            effects: [
                "Financial gains and wealth accumulation",
                "Business success",
                "Material comforts",
                "Good investment opportunities",
            ],
        },
        Yoga::GajaKesari => YogaInterpretation {
            general: "Gaja Kesari Yoga bestows wisdom, success, and popularity.",
            timing: "Most prominent during Jupiter and Moon dashas.",
            effects: [
                "Enhanced intelligence and wisdom",
                "Success in education",
                "Social recognition",
                "Leadership qualities",
            ],
        },
        Yoga::BudhAditya => YogaInterpretation {
            general: "Budh-Aditya Yoga grants intelligence and communication skills.",
            timing: "Strongest during Mercury and Sun periods.",
            effects: [
                "Excellence in communication",
                "Success in intellectual pursuits",
                "Good education",
                "Career success in media or writing",
            ],
        },
        Yoga::Amala => YogaInterpretation {
            general: "Amala Yoga indicates pure fame and reputation.",
            timing: "Active during periods of the yoga-forming planet.",
            effects: [
                "Spotless reputation",
                "Success without controversy",
                "Ethical conduct",
                "Respect in society",
            ],
        },
    }
}

/// A detected yoga with its strength score.
#[derive(Debug, Clone, PartialEq)]
pub struct YogaMatch {
    pub yoga: Yoga,
    pub planets: &'static [Planet],
    pub strength: u32,
    pub interpretation: YogaInterpretation,
}

/// Angular orb for most proximity checks, in degrees.
const YOGA_ORB: f64 = 10.0;

/// Wider orb for the Sun-Mercury conjunction.
const BUDH_ADITYA_ORB: f64 = 12.0;

/// Strength score for one yoga given tropical graha longitudes.
fn yoga_strength(yoga: Yoga, positions: &GrahaLongitudes) -> u32 {
    match yoga {
        Yoga::Raj => {
            // Benefics near the angular cusps (1st, 4th, 7th, 10th).
            let angles = [0.0, 90.0, 180.0, 270.0];
            let mut strength = 0;
            for planet in [Planet::Jupiter, Planet::Venus] {
                for angle in angles {
                    if angular_separation(positions.longitude(planet), angle) < YOGA_ORB {
                        strength += 4;
                    }
                }
            }
            // Jupiter-Venus trine, checked on the raw longitude difference.
            let raw_diff =
                (positions.longitude(Planet::Jupiter) - positions.longitude(Planet::Venus)).abs();
            if (raw_diff - 120.0).abs() < YOGA_ORB {
                strength += 4;
            }
            strength
        }
        Yoga::Dhana => {
            // Benefics near the wealth-house cusps (2nd, 5th, 11th).
            let wealth_cusps = [30.0, 120.0, 300.0];
            let mut strength = 0;
            for planet in [Planet::Jupiter, Planet::Venus, Planet::Mercury] {
                for cusp in wealth_cusps {
                    if angular_separation(positions.longitude(planet), cusp) < YOGA_ORB {
                        strength += 3;
                    }
                }
            }
            strength
        }
        Yoga::GajaKesari => {
            let moon = positions.longitude(Planet::Moon);
            let jupiter = positions.longitude(Planet::Jupiter);
            let raw_diff = (moon - jupiter).abs();
            if angular_separation(moon, jupiter) < YOGA_ORB || (raw_diff - 120.0).abs() < YOGA_ORB
            {
                9
            } else {
                0
            }
        }
        Yoga::BudhAditya => {
            let sep = angular_separation(
                positions.longitude(Planet::Sun),
                positions.longitude(Planet::Mercury),
            );
            if sep < BUDH_ADITYA_ORB { 8 } else { 0 }
        }
        Yoga::Amala => {
            // A benefic near the 10th cusp, cancelled by a malefic there.
            let tenth_cusp = 270.0;
            let benefic_present = [Planet::Jupiter, Planet::Venus, Planet::Mercury]
                .iter()
                .any(|&p| angular_separation(positions.longitude(p), tenth_cusp) < YOGA_ORB);
            if !benefic_present {
                return 0;
            }
            let malefic_present = [Planet::Mars, Planet::Saturn]
                .iter()
                .any(|&p| angular_separation(positions.longitude(p), tenth_cusp) < YOGA_ORB);
            if malefic_present { 0 } else { 7 }
        }
    }
}

/// Detect all yogas present in a set of graha longitudes.
///
/// Only yogas with strength > 0 are returned, sorted descending by
/// strength. Strengths are raw rule sums with no normalization.
pub fn detect_yogas(positions: &GrahaLongitudes) -> Vec<YogaMatch> {
    let mut matches: Vec<YogaMatch> = ALL_YOGAS
        .iter()
        .filter_map(|&yoga| {
            let strength = yoga_strength(yoga, positions);
            (strength > 0).then(|| YogaMatch {
                yoga,
                planets: yoga.planets(),
                strength,
                interpretation: yoga_interpretation(yoga),
            })
        })
        .collect();
    matches.sort_by(|a, b| b.strength.cmp(&a.strength));
    matches
}
