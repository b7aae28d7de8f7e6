//! Vimshottari dasha (planetary period) sequencing.
//!
//! The 120-year Vimshottari cycle assigns each nakshatra a ruling planet
//! and a fixed period length. The first mahadasha starts at birth with
//! only its remaining balance; the other eight follow at full length.

use crate::nakshatra::NAKSHATRA_SPAN;
use crate::planet::Planet;
use crate::util::normalize_360;

/// Year length constant for dasha period calculations.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// The Vimshottari planet cycle. Nakshatra rulers are this sequence
/// repeated three times around the zodiac (index % 9).
pub const VIMSHOTTARI_SEQUENCE: [Planet; 9] = [
    Planet::Ketu,
    Planet::Venus,
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Rahu,
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Mercury,
];

/// A single mahadasha period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashaPeriod {
    /// The planet ruling this period.
    pub planet: Planet,
    /// JD, inclusive.
    pub start_jd: f64,
    /// JD, exclusive.
    pub end_jd: f64,
}

impl DashaPeriod {
    /// Duration of the period in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }
}

/// Static interpretive text for a planet's mahadasha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashaInfluence {
    pub general: &'static str,
    pub career: &'static str,
    pub relationships: &'static str,
    pub health: &'static str,
}

/// Generate one full Vimshottari cycle of 9 mahadashas from birth.
///
/// The starting planet is the ruler of the Moon's nakshatra. The first
/// period runs for `years * balance` where `balance = 1 - pos/span` over
/// the nakshatra's half-open interval, so a Moon exactly on a nakshatra
/// boundary gets a full first period, never a zero-length one. The
/// remaining periods are contiguous and full length.
pub fn vimshottari_periods(birth_jd: f64, moon_sidereal_lon_deg: f64) -> [DashaPeriod; 9] {
    let lon = normalize_360(moon_sidereal_lon_deg);
    let nak_idx = ((lon / NAKSHATRA_SPAN).floor() as usize).min(26);
    let start_idx = nak_idx % 9;

    let pos_in_nakshatra = lon - (nak_idx as f64) * NAKSHATRA_SPAN;
    let balance = 1.0 - pos_in_nakshatra / NAKSHATRA_SPAN;

    let mut periods = [DashaPeriod {
        planet: Planet::Ketu,
        start_jd: 0.0,
        end_jd: 0.0,
    }; 9];

    let mut cursor = birth_jd;
    for (i, slot) in periods.iter_mut().enumerate() {
        let planet = VIMSHOTTARI_SEQUENCE[(start_idx + i) % 9];
        let years = planet.vimshottari_years();
        let duration = if i == 0 {
            years * balance * DAYS_PER_YEAR
        } else {
            years * DAYS_PER_YEAR
        };
        *slot = DashaPeriod {
            planet,
            start_jd: cursor,
            end_jd: cursor + duration,
        };
        cursor += duration;
    }

    periods
}

/// Interpretive text for a planet's mahadasha.
pub const fn dasha_influence(planet: Planet) -> DashaInfluence {
    match planet {
        Planet::Ketu => DashaInfluence {
            general: "A period of spiritual growth and detachment from material concerns. \
                      Focus on inner development.",
            career: "Career changes may occur, especially towards spiritual or \
                     research-oriented fields.",
            relationships: "A time to release past attachments and develop more spiritual \
                            connections.",
            health: "Pay attention to nervous system and practice grounding exercises.",
        },
        Planet::Venus => DashaInfluence {
            general: "Period of comfort, luxury, and artistic expression. Focus on \
                      relationships and creativity.",
            career: "Good for careers in arts, entertainment, luxury goods, or \
                     relationship-oriented fields.",
            relationships: "Favorable for marriage, partnerships, and social connections.",
            health: "Generally good health, but watch for overindulgence.",
        },
        Planet::Sun => DashaInfluence {
            general: "Period of recognition, authority, and self-expression. Focus on \
                      leadership and identity.",
            career: "Opportunities for advancement and leadership positions.",
            relationships: "Time to assert independence while maintaining relationships.",
            health: "Good vitality, but avoid overexertion.",
        },
        Planet::Moon => DashaInfluence {
            general: "Period of emotional growth and intuitive development. Focus on home \
                      and family.",
            career: "Success in fields related to public service, healthcare, or emotional \
                     support.",
            relationships: "Strong emotional connections and family bonds.",
            health: "Pay attention to emotional well-being and digestive health.",
        },
        Planet::Mars => DashaInfluence {
            general: "Period of energy, initiative, and courage. Focus on goals and \
                      ambitions.",
            career: "Success through bold action and competitive endeavors.",
            relationships: "Dynamic relationships that may require managing conflicts.",
            health: "High energy but watch for accidents and inflammation.",
        },
        Planet::Rahu => DashaInfluence {
            general: "Period of material growth and worldly desires. Focus on innovation \
                      and unconventional paths.",
            career: "Success through new technologies or unconventional methods.",
            relationships: "Unusual or foreign connections may develop.",
            health: "Watch for stress and anxiety.",
        },
        Planet::Jupiter => DashaInfluence {
            general: "Period of expansion, wisdom, and good fortune. Focus on learning and \
                      growth.",
            career: "Success in teaching, consulting, or advisory roles.",
            relationships: "Beneficial relationships with mentors and teachers.",
            health: "Generally good health, but avoid excess.",
        },
        Planet::Saturn => DashaInfluence {
            general: "Period of discipline, responsibility, and hard work. Focus on \
                      long-term goals.",
            career: "Success through persistence and structured effort.",
            relationships: "Serious commitments and lasting bonds.",
            health: "Need for regular exercise and good habits.",
        },
        Planet::Mercury => DashaInfluence {
            general: "Period of communication, learning, and adaptability. Focus on \
                      intellectual growth.",
            career: "Success in communication, writing, or analytical fields.",
            relationships: "Intellectual connections and friendships.",
            health: "Mental health is important, manage stress through activities.",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_years_sum_120() {
        let total: f64 = VIMSHOTTARI_SEQUENCE
            .iter()
            .map(|p| p.vimshottari_years())
            .sum();
        assert!((total - 120.0).abs() < 1e-12);
    }

    #[test]
    fn moon_at_ashwini_start_full_ketu() {
        // Moon at 0 deg → Ketu mahadasha, full 7y (boundary balance = 1)
        let periods = vimshottari_periods(2_451_545.0, 0.0);
        assert_eq!(periods[0].planet, Planet::Ketu);
        let years = periods[0].duration_days() / DAYS_PER_YEAR;
        assert!((years - 7.0).abs() < 1e-9);
    }

    #[test]
    fn moon_at_rohini_start_full_moon_period() {
        // Rohini starts at 40 deg, ruler Moon, full 10y balance
        let periods = vimshottari_periods(2_451_545.0, 40.0);
        assert_eq!(periods[0].planet, Planet::Moon);
        let years = periods[0].duration_days() / DAYS_PER_YEAR;
        assert!((years - 10.0).abs() < 1e-9);
    }

    #[test]
    fn mid_nakshatra_half_balance() {
        let mid_rohini = 40.0 + NAKSHATRA_SPAN / 2.0;
        let periods = vimshottari_periods(2_451_545.0, mid_rohini);
        assert_eq!(periods[0].planet, Planet::Moon);
        let years = periods[0].duration_days() / DAYS_PER_YEAR;
        assert!((years - 5.0).abs() < 1e-9);
    }

    #[test]
    fn periods_contiguous_no_gaps() {
        let periods = vimshottari_periods(2_451_545.0, 123.456);
        for i in 1..9 {
            assert!(
                (periods[i].start_jd - periods[i - 1].end_jd).abs() < 1e-10,
                "gap between periods {} and {}",
                i - 1,
                i
            );
        }
    }

    #[test]
    fn nine_periods_cover_less_than_120_years() {
        // First period is partial, so the cycle spans (120 - consumed) years.
        let periods = vimshottari_periods(2_451_545.0, 45.0);
        let total_years: f64 = periods.iter().map(|p| p.duration_days()).sum::<f64>()
            / DAYS_PER_YEAR;
        assert!(total_years <= 120.0 + 1e-9);
        assert!(total_years > 110.0);
    }

    #[test]
    fn first_period_starts_at_birth() {
        let birth_jd = 2_448_000.5;
        let periods = vimshottari_periods(birth_jd, 200.0);
        assert!((periods[0].start_jd - birth_jd).abs() < 1e-12);
    }

    #[test]
    fn sequence_cycles_in_fixed_order() {
        // Moon in Magha (120-133.3 deg), index 9 → ruler Ketu again
        let periods = vimshottari_periods(2_451_545.0, 121.0);
        assert_eq!(periods[0].planet, Planet::Ketu);
        assert_eq!(periods[1].planet, Planet::Venus);
        assert_eq!(periods[8].planet, Planet::Mercury);
    }

    #[test]
    fn influence_total_over_planets() {
        for p in crate::planet::ALL_PLANETS {
            let inf = dasha_influence(p);
            assert!(!inf.general.is_empty());
            assert!(!inf.career.is_empty());
            assert!(!inf.relationships.is_empty());
            assert!(!inf.health.is_empty());
        }
    }
}
