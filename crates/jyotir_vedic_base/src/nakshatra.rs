//! Nakshatra (lunar mansion) classification and static lore tables.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13 deg 20'
//! (13.3333... deg) each. Each nakshatra has 4 padas (quarters) of
//! 3 deg 20' each.

use crate::planet::Planet;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// The 27 nakshatras from Ashwini to Revati (uniform 13 deg 20' each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini .. 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishta => "Dhanishta",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ashwini => 0,
            Self::Bharani => 1,
            Self::Krittika => 2,
            Self::Rohini => 3,
            Self::Mrigashira => 4,
            Self::Ardra => 5,
            Self::Punarvasu => 6,
            Self::Pushya => 7,
            Self::Ashlesha => 8,
            Self::Magha => 9,
            Self::PurvaPhalguni => 10,
            Self::UttaraPhalguni => 11,
            Self::Hasta => 12,
            Self::Chitra => 13,
            Self::Swati => 14,
            Self::Vishakha => 15,
            Self::Anuradha => 16,
            Self::Jyeshtha => 17,
            Self::Mula => 18,
            Self::PurvaAshadha => 19,
            Self::UttaraAshadha => 20,
            Self::Shravana => 21,
            Self::Dhanishta => 22,
            Self::Shatabhisha => 23,
            Self::PurvaBhadrapada => 24,
            Self::UttaraBhadrapada => 25,
            Self::Revati => 26,
        }
    }

    /// All 27 nakshatras in order.
    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS
    }
}

/// Result of nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    /// The nakshatra.
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0.0, 13.333...).
    pub degrees_in_nakshatra: f64,
}

/// Determine nakshatra and pada from sidereal ecliptic longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = crate::util::normalize_360(sidereal_lon_deg);
    let nak_idx = ((lon / NAKSHATRA_SPAN).floor() as u8).min(26);
    let degrees_in_nakshatra = lon - (nak_idx as f64) * NAKSHATRA_SPAN;
    let pada_idx = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3);

    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS[nak_idx as usize],
        nakshatra_index: nak_idx,
        pada: pada_idx + 1,
        degrees_in_nakshatra,
    }
}

/// Static lore of a nakshatra: presiding deity, ruling planet, keywords.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraTraits {
    pub deity: &'static str,
    pub ruling_planet: Planet,
    pub characteristics: [&'static str; 4],
}

/// Deity, ruling planet, and keyword characteristics for a nakshatra.
///
/// The ruling planets follow the Vimshottari cycle (Ketu, Venus, Sun,
/// Moon, Mars, Rahu, Jupiter, Saturn, Mercury) repeated three times.
pub const fn nakshatra_traits(nakshatra: Nakshatra) -> NakshatraTraits {
    match nakshatra {
        Nakshatra::Ashwini => NakshatraTraits {
            deity: "Ashwini Kumaras",
            ruling_planet: Planet::Ketu,
            characteristics: ["Swift", "Healing", "Youthful", "Adventurous"],
        },
        Nakshatra::Bharani => NakshatraTraits {
            deity: "Yama",
            ruling_planet: Planet::Venus,
            characteristics: ["Determined", "Resourceful", "Transformative", "Intense"],
        },
        Nakshatra::Krittika => NakshatraTraits {
            deity: "Agni",
            ruling_planet: Planet::Sun,
            characteristics: ["Sharp", "Ambitious", "Focused", "Radiant"],
        },
        Nakshatra::Rohini => NakshatraTraits {
            deity: "Brahma",
            ruling_planet: Planet::Moon,
            characteristics: ["Creative", "Nurturing", "Sensual", "Artistic"],
        },
        Nakshatra::Mrigashira => NakshatraTraits {
            deity: "Soma",
            ruling_planet: Planet::Mars,
            characteristics: ["Gentle", "Searching", "Adaptable", "Curious"],
        },
        Nakshatra::Ardra => NakshatraTraits {
            deity: "Rudra",
            ruling_planet: Planet::Rahu,
            characteristics: ["Passionate", "Intense", "Transformative", "Powerful"],
        },
        Nakshatra::Punarvasu => NakshatraTraits {
            deity: "Aditi",
            ruling_planet: Planet::Jupiter,
            characteristics: ["Wise", "Generous", "Optimistic", "Restoring"],
        },
        Nakshatra::Pushya => NakshatraTraits {
            deity: "Brihaspati",
            ruling_planet: Planet::Saturn,
            characteristics: ["Nurturing", "Protective", "Traditional", "Loyal"],
        },
        Nakshatra::Ashlesha => NakshatraTraits {
            deity: "Naga",
            ruling_planet: Planet::Mercury,
            characteristics: ["Mystical", "Intuitive", "Healing", "Magnetic"],
        },
        Nakshatra::Magha => NakshatraTraits {
            deity: "Pitris",
            ruling_planet: Planet::Ketu,
            characteristics: ["Royal", "Ambitious", "Proud", "Leadership"],
        },
        Nakshatra::PurvaPhalguni => NakshatraTraits {
            deity: "Bhaga",
            ruling_planet: Planet::Venus,
            characteristics: ["Creative", "Romantic", "Playful", "Charming"],
        },
        Nakshatra::UttaraPhalguni => NakshatraTraits {
            deity: "Aryaman",
            ruling_planet: Planet::Sun,
            characteristics: ["Social", "Diplomatic", "Balanced", "Harmonious"],
        },
        Nakshatra::Hasta => NakshatraTraits {
            deity: "Savitar",
            ruling_planet: Planet::Moon,
            characteristics: ["Skilled", "Practical", "Resourceful", "Healing"],
        },
        Nakshatra::Chitra => NakshatraTraits {
            deity: "Vishwakarma",
            ruling_planet: Planet::Mars,
            characteristics: ["Artistic", "Beautiful", "Innovative", "Talented"],
        },
        Nakshatra::Swati => NakshatraTraits {
            deity: "Vayu",
            ruling_planet: Planet::Rahu,
            characteristics: ["Independent", "Adaptable", "Spiritual", "Free"],
        },
        Nakshatra::Vishakha => NakshatraTraits {
            deity: "Indra-Agni",
            ruling_planet: Planet::Jupiter,
            characteristics: ["Purposeful", "Focused", "Ambitious", "Determined"],
        },
        Nakshatra::Anuradha => NakshatraTraits {
            deity: "Mitra",
            ruling_planet: Planet::Saturn,
            characteristics: ["Friendly", "Successful", "Devoted", "Balanced"],
        },
        Nakshatra::Jyeshtha => NakshatraTraits {
            deity: "Indra",
            ruling_planet: Planet::Mercury,
            characteristics: ["Courageous", "Senior", "Protective", "Leadership"],
        },
        Nakshatra::Mula => NakshatraTraits {
            deity: "Nirriti",
            ruling_planet: Planet::Ketu,
            characteristics: ["Destructive", "Transformative", "Deep", "Spiritual"],
        },
        Nakshatra::PurvaAshadha => NakshatraTraits {
            deity: "Apas",
            ruling_planet: Planet::Venus,
            characteristics: ["Purifying", "Energetic", "Invincible", "Victorious"],
        },
        Nakshatra::UttaraAshadha => NakshatraTraits {
            deity: "Vishwadevas",
            ruling_planet: Planet::Sun,
            characteristics: ["Universal", "Balanced", "Wise", "Victorious"],
        },
        Nakshatra::Shravana => NakshatraTraits {
            deity: "Vishnu",
            ruling_planet: Planet::Moon,
            characteristics: ["Learning", "Wisdom", "Fame", "Devotion"],
        },
        Nakshatra::Dhanishta => NakshatraTraits {
            deity: "Vasus",
            ruling_planet: Planet::Mars,
            characteristics: ["Wealthy", "Musical", "Swift", "Generous"],
        },
        Nakshatra::Shatabhisha => NakshatraTraits {
            deity: "Varuna",
            ruling_planet: Planet::Rahu,
            characteristics: ["Healing", "Mystical", "Scientific", "Independent"],
        },
        Nakshatra::PurvaBhadrapada => NakshatraTraits {
            deity: "Ajaikapada",
            ruling_planet: Planet::Jupiter,
            characteristics: ["Fiery", "Intense", "Transformative", "Spiritual"],
        },
        Nakshatra::UttaraBhadrapada => NakshatraTraits {
            deity: "Ahirbudhnya",
            ruling_planet: Planet::Saturn,
            characteristics: ["Wise", "Balanced", "Spiritual", "Detached"],
        },
        Nakshatra::Revati => NakshatraTraits {
            deity: "Pushan",
            ruling_planet: Planet::Mercury,
            characteristics: ["Nurturing", "Spiritual", "Gentle", "Prosperous"],
        },
    }
}

/// Four-part interpretive reading for a birth nakshatra.
#[derive(Debug, Clone, PartialEq)]
pub struct NakshatraReadingText {
    pub general: String,
    pub career: String,
    pub relationships: String,
    pub spirituality: String,
}

/// Interpretive text for a nakshatra and pada.
///
/// Ashwini and Bharani carry specific readings; every other nakshatra
/// receives the generic reading parameterized by name and pada.
pub fn nakshatra_interpretation(nakshatra: Nakshatra, pada: u8) -> NakshatraReadingText {
    match nakshatra {
        Nakshatra::Ashwini => NakshatraReadingText {
            general: "You possess swift action, healing abilities, and a youthful spirit."
                .to_string(),
            career: "Excellence in medicine, sports, or quick-paced professions.".to_string(),
            relationships: "Dynamic and adventurous in relationships, seeking active partners."
                .to_string(),
            spirituality: "Spiritual healing and swift progress on the spiritual path."
                .to_string(),
        },
        Nakshatra::Bharani => NakshatraReadingText {
            general: "You have transformative power and deep resourcefulness.".to_string(),
            career: "Success in research, psychology, or transformative fields.".to_string(),
            relationships: "Intense and passionate relationships with deep connections."
                .to_string(),
            spirituality: "Deep spiritual transformation and regeneration.".to_string(),
        },
        _ => NakshatraReadingText {
            general: format!(
                "Born in {} (Pada {pada}), you possess unique qualities that shape your life path.",
                nakshatra.name()
            ),
            career: "Your Nakshatra indicates natural talents and career opportunities aligned \
                     with your cosmic blueprint."
                .to_string(),
            relationships: "Understanding your Nakshatra helps in navigating relationships and \
                            finding compatible partners."
                .to_string(),
            spirituality: "Your birth star reveals your spiritual inclinations and path to \
                           self-realization."
                .to_string(),
        },
    }
}
