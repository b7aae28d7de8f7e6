//! Guna Milan (Ashtakoota) compatibility scoring.
//!
//! Eight classification-based sub-scores over the two charts' Moon signs
//! and nakshatras, with maximum points 1 through 8 and a combined total
//! out of 36. All classifications are enum-keyed static tables.

use crate::nakshatra::Nakshatra;
use crate::planet::{Planet, sign_lord};
use crate::sign::ZodiacSign;

/// Varna (caste class) of a sign. Max 1 point for an equal pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Varna {
    Brahmin,
    Kshatriya,
    Vaishya,
    Shudra,
}

/// Varna classification of a sign.
pub const fn varna_of(sign: ZodiacSign) -> Varna {
    match sign {
        ZodiacSign::Aries | ZodiacSign::Virgo | ZodiacSign::Aquarius => Varna::Brahmin,
        ZodiacSign::Leo | ZodiacSign::Capricorn | ZodiacSign::Cancer => Varna::Kshatriya,
        ZodiacSign::Sagittarius | ZodiacSign::Gemini | ZodiacSign::Scorpio => Varna::Vaishya,
        ZodiacSign::Taurus | ZodiacSign::Libra | ZodiacSign::Pisces => Varna::Shudra,
    }
}

/// Vashya (temperament group) of a sign. Max 2 points for an equal pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vashya {
    Chatushpad,
    Manav,
    Keet,
    Jalachar,
}

/// Vashya classification of a sign.
pub const fn vashya_of(sign: ZodiacSign) -> Vashya {
    match sign {
        ZodiacSign::Aries
        | ZodiacSign::Leo
        | ZodiacSign::Sagittarius
        | ZodiacSign::Taurus
        | ZodiacSign::Capricorn => Vashya::Chatushpad,
        ZodiacSign::Virgo | ZodiacSign::Gemini | ZodiacSign::Libra | ZodiacSign::Aquarius => {
            Vashya::Manav
        }
        ZodiacSign::Cancer | ZodiacSign::Scorpio => Vashya::Keet,
        ZodiacSign::Pisces => Vashya::Jalachar,
    }
}

/// Yoni (animal symbol) of a nakshatra. Max 4 points for an equal pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Yoni {
    Horse,
    Elephant,
    Sheep,
    Snake,
    Dog,
    Cat,
    Rat,
    Cow,
    Buffalo,
    Tiger,
    Deer,
    Monkey,
    Mongoose,
    Lion,
}

/// Yoni classification of a nakshatra (cyclic table with repeats).
pub const fn yoni_of(nakshatra: Nakshatra) -> Yoni {
    const TABLE: [Yoni; 27] = [
        Yoni::Horse,
        Yoni::Elephant,
        Yoni::Sheep,
        Yoni::Snake,
        Yoni::Dog,
        Yoni::Cat,
        Yoni::Rat,
        Yoni::Cow,
        Yoni::Buffalo,
        Yoni::Tiger,
        Yoni::Deer,
        Yoni::Monkey,
        Yoni::Mongoose,
        Yoni::Lion,
        Yoni::Horse,
        Yoni::Elephant,
        Yoni::Sheep,
        Yoni::Snake,
        Yoni::Dog,
        Yoni::Cat,
        Yoni::Rat,
        Yoni::Cow,
        Yoni::Buffalo,
        Yoni::Tiger,
        Yoni::Deer,
        Yoni::Monkey,
        Yoni::Mongoose,
    ];
    TABLE[nakshatra.index() as usize]
}

/// Gana (nature class) of a nakshatra. Max 6 points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gana {
    Dev,
    Manush,
    Rakshas,
}

/// Gana classification: the three classes cycle around the 27 nakshatras.
pub const fn gana_of(nakshatra: Nakshatra) -> Gana {
    match nakshatra.index() % 3 {
        0 => Gana::Dev,
        1 => Gana::Manush,
        _ => Gana::Rakshas,
    }
}

/// Nadi (pulse class) of a nakshatra. Max 8 points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nadi {
    Aadi,
    Madhya,
    Antya,
}

/// Nadi classification: the three classes cycle around the 27 nakshatras.
pub const fn nadi_of(nakshatra: Nakshatra) -> Nadi {
    match nakshatra.index() % 3 {
        0 => Nadi::Aadi,
        1 => Nadi::Madhya,
        _ => Nadi::Antya,
    }
}

/// Planets a given planet counts as friends.
///
/// The table is DIRECTIONAL: Moon counts Sun as a friend but Sun's list
/// decides nothing about Moon's score. Graha Maitri is scored from the
/// first chart's ruler only. Rahu and Ketu never rule a sign, so their
/// lists are empty.
pub const fn planet_friends(planet: Planet) -> &'static [Planet] {
    match planet {
        Planet::Sun => &[Planet::Moon, Planet::Mars, Planet::Jupiter],
        Planet::Moon => &[Planet::Sun, Planet::Mercury],
        Planet::Mars => &[Planet::Sun, Planet::Moon, Planet::Jupiter],
        Planet::Mercury => &[Planet::Sun, Planet::Venus],
        Planet::Jupiter => &[Planet::Sun, Planet::Moon, Planet::Mars],
        Planet::Venus => &[Planet::Mercury, Planet::Saturn],
        Planet::Saturn => &[Planet::Mercury, Planet::Venus],
        Planet::Rahu | Planet::Ketu => &[],
    }
}

/// Varna sub-score: 1 for matching classes.
pub fn varna_score(sign1: ZodiacSign, sign2: ZodiacSign) -> u8 {
    if varna_of(sign1) == varna_of(sign2) { 1 } else { 0 }
}

/// Vashya sub-score: 2 for matching classes.
pub fn vashya_score(sign1: ZodiacSign, sign2: ZodiacSign) -> u8 {
    if vashya_of(sign1) == vashya_of(sign2) {
        2
    } else {
        0
    }
}

/// Tara sub-score: 3 when the count from one birth star to the other,
/// reduced mod 9, lands on a favorable tara (1, 3, 5, or 7).
pub fn tara_score(nakshatra1: Nakshatra, nakshatra2: Nakshatra) -> u8 {
    let diff = (nakshatra1.index() as i16 - nakshatra2.index() as i16).unsigned_abs();
    let tara = (diff % 9) + 1;
    if matches!(tara, 1 | 3 | 5 | 7) { 3 } else { 0 }
}

/// Yoni sub-score: 4 for matching animal symbols.
pub fn yoni_score(nakshatra1: Nakshatra, nakshatra2: Nakshatra) -> u8 {
    if yoni_of(nakshatra1) == yoni_of(nakshatra2) {
        4
    } else {
        0
    }
}

/// Graha Maitri sub-score: 5 when the second chart's sign ruler appears
/// in the friend list of the first chart's sign ruler (directional).
pub fn graha_maitri_score(sign1: ZodiacSign, sign2: ZodiacSign) -> u8 {
    let ruler1 = sign_lord(sign1);
    let ruler2 = sign_lord(sign2);
    if planet_friends(ruler1).contains(&ruler2) {
        5
    } else {
        0
    }
}

/// Gana sub-score: 6 for matching classes, 3 for a Dev-Manush pairing.
pub fn gana_score(nakshatra1: Nakshatra, nakshatra2: Nakshatra) -> u8 {
    let g1 = gana_of(nakshatra1);
    let g2 = gana_of(nakshatra2);
    if g1 == g2 {
        6
    } else if matches!((g1, g2), (Gana::Dev, Gana::Manush) | (Gana::Manush, Gana::Dev)) {
        3
    } else {
        0
    }
}

/// Bhakoot sub-score: 7 when the 1-based sign count between the pair is
/// favorable (2, 4, 6, 8, or 12).
pub fn bhakoot_score(sign1: ZodiacSign, sign2: ZodiacSign) -> u8 {
    let diff = (sign1.index() as i16 - sign2.index() as i16).unsigned_abs() + 1;
    if matches!(diff, 2 | 4 | 6 | 8 | 12) { 7 } else { 0 }
}

/// Nadi sub-score: 8 for DIFFERENT classes (same nadi is the dosha).
pub fn nadi_score(nakshatra1: Nakshatra, nakshatra2: Nakshatra) -> u8 {
    if nadi_of(nakshatra1) != nadi_of(nakshatra2) {
        8
    } else {
        0
    }
}

/// The eight sub-scores of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GunaBreakdown {
    pub varna: u8,
    pub vashya: u8,
    pub tara: u8,
    pub yoni: u8,
    pub graha_maitri: u8,
    pub gana: u8,
    pub bhakoot: u8,
    pub nadi: u8,
}

impl GunaBreakdown {
    /// Combined score, 0..=36.
    pub fn total(&self) -> u8 {
        self.varna
            + self.vashya
            + self.tara
            + self.yoni
            + self.graha_maitri
            + self.gana
            + self.bhakoot
            + self.nadi
    }
}

/// Score all eight aspects for a pair of Moon signs and birth stars.
pub fn guna_milan(
    sign1: ZodiacSign,
    nakshatra1: Nakshatra,
    sign2: ZodiacSign,
    nakshatra2: Nakshatra,
) -> GunaBreakdown {
    GunaBreakdown {
        varna: varna_score(sign1, sign2),
        vashya: vashya_score(sign1, sign2),
        tara: tara_score(nakshatra1, nakshatra2),
        yoni: yoni_score(nakshatra1, nakshatra2),
        graha_maitri: graha_maitri_score(sign1, sign2),
        gana: gana_score(nakshatra1, nakshatra2),
        bhakoot: bhakoot_score(sign1, sign2),
        nadi: nadi_score(nakshatra1, nakshatra2),
    }
}

/// Banded interpretation of a total guna score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompatibilityBand {
    pub level: &'static str,
    pub description: &'static str,
    pub recommendation: &'static str,
}

/// Map a total score to its interpretation band.
pub const fn compatibility_band(total: u8) -> CompatibilityBand {
    if total >= 32 {
        CompatibilityBand {
            level: "Excellent",
            description: "This match indicates a highly harmonious relationship with strong \
                          compatibility across most aspects.",
            recommendation: "This is considered a very auspicious match for marriage.",
        }
    } else if total >= 28 {
        CompatibilityBand {
            level: "Very Good",
            description: "The match shows strong compatibility with good potential for a \
                          successful marriage.",
            recommendation: "This match is favorable for marriage with minor considerations.",
        }
    } else if total >= 24 {
        CompatibilityBand {
            level: "Good",
            description: "This match indicates above-average compatibility with some areas \
                          needing attention.",
            recommendation: "Marriage can be considered after addressing any specific concerns.",
        }
    } else if total >= 18 {
        CompatibilityBand {
            level: "Average",
            description: "The match shows moderate compatibility with several areas needing \
                          consideration.",
            recommendation: "Marriage may be considered after careful consideration and \
                             remedial measures.",
        }
    } else {
        CompatibilityBand {
            level: "Below Average",
            description: "This match indicates significant challenges in compatibility.",
            recommendation: "Marriage should be considered only after thorough consultation \
                             with an expert and implementing suggested remedies.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nakshatra::ALL_NAKSHATRAS;
    use crate::sign::ALL_SIGNS;

    #[test]
    fn varna_classes_balanced() {
        // Three signs in each of the four classes.
        let mut counts = [0u8; 4];
        for s in ALL_SIGNS {
            match varna_of(s) {
                Varna::Brahmin => counts[0] += 1,
                Varna::Kshatriya => counts[1] += 1,
                Varna::Vaishya => counts[2] += 1,
                Varna::Shudra => counts[3] += 1,
            }
        }
        assert_eq!(counts, [3, 3, 3, 3]);
    }

    #[test]
    fn varna_match_scores_one() {
        // Aries and Virgo are both Brahmin
        assert_eq!(varna_score(ZodiacSign::Aries, ZodiacSign::Virgo), 1);
        assert_eq!(varna_score(ZodiacSign::Aries, ZodiacSign::Leo), 0);
    }

    #[test]
    fn vashya_groups() {
        assert_eq!(vashya_of(ZodiacSign::Taurus), Vashya::Chatushpad);
        assert_eq!(vashya_of(ZodiacSign::Libra), Vashya::Manav);
        assert_eq!(vashya_of(ZodiacSign::Scorpio), Vashya::Keet);
        assert_eq!(vashya_of(ZodiacSign::Pisces), Vashya::Jalachar);
        assert_eq!(vashya_score(ZodiacSign::Aries, ZodiacSign::Leo), 2);
        assert_eq!(vashya_score(ZodiacSign::Aries, ZodiacSign::Pisces), 0);
    }

    #[test]
    fn tara_same_star_favorable() {
        // diff 0 → tara 1 → favorable
        assert_eq!(tara_score(Nakshatra::Rohini, Nakshatra::Rohini), 3);
    }

    #[test]
    fn tara_even_counts_unfavorable() {
        // diff 1 → tara 2 → unfavorable
        assert_eq!(tara_score(Nakshatra::Ashwini, Nakshatra::Bharani), 0);
        // diff 2 → tara 3 → favorable
        assert_eq!(tara_score(Nakshatra::Ashwini, Nakshatra::Krittika), 3);
    }

    #[test]
    fn yoni_repeats_cycle() {
        // Ashwini (0) and Mrigashira+10? Horse repeats at index 14 (Swati)
        assert_eq!(yoni_of(Nakshatra::Ashwini), Yoni::Horse);
        assert_eq!(yoni_of(Nakshatra::Swati), Yoni::Horse);
        assert_eq!(yoni_score(Nakshatra::Ashwini, Nakshatra::Swati), 4);
        assert_eq!(yoni_score(Nakshatra::Ashwini, Nakshatra::Bharani), 0);
    }

    #[test]
    fn lion_appears_once() {
        let lions = ALL_NAKSHATRAS
            .iter()
            .filter(|n| yoni_of(**n) == Yoni::Lion)
            .count();
        assert_eq!(lions, 1);
        assert_eq!(yoni_of(Nakshatra::Chitra), Yoni::Lion);
    }

    #[test]
    fn graha_maitri_directional_asymmetry() {
        // Moon counts Sun a friend, so Cancer → Leo scores.
        assert_eq!(graha_maitri_score(ZodiacSign::Cancer, ZodiacSign::Leo), 5);
        // Sun counts Moon a friend too, so Leo → Cancer also scores.
        assert_eq!(graha_maitri_score(ZodiacSign::Leo, ZodiacSign::Cancer), 5);
        // Moon counts Mercury a friend...
        assert_eq!(graha_maitri_score(ZodiacSign::Cancer, ZodiacSign::Gemini), 5);
        // ...but Mercury does not count Moon back.
        assert_eq!(graha_maitri_score(ZodiacSign::Gemini, ZodiacSign::Cancer), 0);
    }

    #[test]
    fn gana_same_and_dev_manush() {
        assert_eq!(gana_of(Nakshatra::Ashwini), Gana::Dev);
        assert_eq!(gana_of(Nakshatra::Bharani), Gana::Manush);
        assert_eq!(gana_of(Nakshatra::Krittika), Gana::Rakshas);
        assert_eq!(gana_score(Nakshatra::Ashwini, Nakshatra::Rohini), 6);
        assert_eq!(gana_score(Nakshatra::Ashwini, Nakshatra::Bharani), 3);
        assert_eq!(gana_score(Nakshatra::Bharani, Nakshatra::Ashwini), 3);
        assert_eq!(gana_score(Nakshatra::Ashwini, Nakshatra::Krittika), 0);
    }

    #[test]
    fn bhakoot_favorable_counts() {
        // Aries-Taurus: diff 1 + 1 = 2 → favorable
        assert_eq!(bhakoot_score(ZodiacSign::Aries, ZodiacSign::Taurus), 7);
        // Aries-Pisces: diff 11 + 1 = 12 → favorable
        assert_eq!(bhakoot_score(ZodiacSign::Aries, ZodiacSign::Pisces), 7);
        // Aries-Gemini: diff 2 + 1 = 3 → unfavorable
        assert_eq!(bhakoot_score(ZodiacSign::Aries, ZodiacSign::Gemini), 0);
        // Same sign: diff 0 + 1 = 1 → unfavorable
        assert_eq!(bhakoot_score(ZodiacSign::Leo, ZodiacSign::Leo), 0);
    }

    #[test]
    fn nadi_different_scores() {
        assert_eq!(nadi_score(Nakshatra::Ashwini, Nakshatra::Bharani), 8);
        // Same nadi class is the dosha
        assert_eq!(nadi_score(Nakshatra::Ashwini, Nakshatra::Rohini), 0);
    }

    #[test]
    fn total_bounded_by_36() {
        for s1 in ALL_SIGNS {
            for n1 in [Nakshatra::Ashwini, Nakshatra::Hasta, Nakshatra::Revati] {
                for s2 in ALL_SIGNS {
                    for n2 in [Nakshatra::Bharani, Nakshatra::Chitra] {
                        let b = guna_milan(s1, n1, s2, n2);
                        assert!(b.total() <= 36);
                    }
                }
            }
        }
    }

    #[test]
    fn identical_charts_lose_nadi_and_bhakoot() {
        // Same sign and star: nadi 0 (same class), bhakoot 0 (count 1),
        // but varna/vashya/yoni/gana all match.
        let b = guna_milan(
            ZodiacSign::Cancer,
            Nakshatra::Pushya,
            ZodiacSign::Cancer,
            Nakshatra::Pushya,
        );
        assert_eq!(b.nadi, 0);
        assert_eq!(b.bhakoot, 0);
        assert_eq!(b.varna, 1);
        assert_eq!(b.vashya, 2);
        assert_eq!(b.tara, 3);
        assert_eq!(b.yoni, 4);
        assert_eq!(b.gana, 6);
    }

    #[test]
    fn band_thresholds() {
        assert_eq!(compatibility_band(36).level, "Excellent");
        assert_eq!(compatibility_band(32).level, "Excellent");
        assert_eq!(compatibility_band(31).level, "Very Good");
        assert_eq!(compatibility_band(28).level, "Very Good");
        assert_eq!(compatibility_band(27).level, "Good");
        assert_eq!(compatibility_band(24).level, "Good");
        assert_eq!(compatibility_band(23).level, "Average");
        assert_eq!(compatibility_band(18).level, "Average");
        assert_eq!(compatibility_band(17).level, "Below Average");
        assert_eq!(compatibility_band(0).level, "Below Average");
    }
}
