//! Zodiac sign classification and DMS (degrees-minutes-seconds) display.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Aries at 0 deg. Longitudes fed in here are sidereal.

/// The 12 zodiac signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries .. 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// All 12 signs in order.
    pub const fn all() -> &'static [ZodiacSign; 12] {
        &ALL_SIGNS
    }
}

/// Classical element of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }
}

/// Modality of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Quality {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cardinal => "Cardinal",
            Self::Fixed => "Fixed",
            Self::Mutable => "Mutable",
        }
    }
}

/// Static descriptive traits of a sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignTraits {
    pub element: Element,
    pub quality: Quality,
    pub characteristics: [&'static str; 4],
}

/// Element, quality, and keyword characteristics for a sign.
pub const fn sign_traits(sign: ZodiacSign) -> SignTraits {
    match sign {
        ZodiacSign::Aries => SignTraits {
            element: Element::Fire,
            quality: Quality::Cardinal,
            characteristics: ["Leadership", "Courage", "Energy", "Initiative"],
        },
        ZodiacSign::Taurus => SignTraits {
            element: Element::Earth,
            quality: Quality::Fixed,
            characteristics: ["Stability", "Reliability", "Sensuality", "Determination"],
        },
        ZodiacSign::Gemini => SignTraits {
            element: Element::Air,
            quality: Quality::Mutable,
            characteristics: ["Adaptability", "Communication", "Curiosity", "Versatility"],
        },
        ZodiacSign::Cancer => SignTraits {
            element: Element::Water,
            quality: Quality::Cardinal,
            characteristics: ["Nurturing", "Emotional depth", "Protection", "Intuition"],
        },
        ZodiacSign::Leo => SignTraits {
            element: Element::Fire,
            quality: Quality::Fixed,
            characteristics: ["Creativity", "Leadership", "Confidence", "Generosity"],
        },
        ZodiacSign::Virgo => SignTraits {
            element: Element::Earth,
            quality: Quality::Mutable,
            characteristics: ["Analysis", "Precision", "Service", "Improvement"],
        },
        ZodiacSign::Libra => SignTraits {
            element: Element::Air,
            quality: Quality::Cardinal,
            characteristics: ["Balance", "Harmony", "Justice", "Partnership"],
        },
        ZodiacSign::Scorpio => SignTraits {
            element: Element::Water,
            quality: Quality::Fixed,
            characteristics: ["Intensity", "Transformation", "Power", "Mystery"],
        },
        ZodiacSign::Sagittarius => SignTraits {
            element: Element::Fire,
            quality: Quality::Mutable,
            characteristics: ["Adventure", "Philosophy", "Optimism", "Freedom"],
        },
        ZodiacSign::Capricorn => SignTraits {
            element: Element::Earth,
            quality: Quality::Cardinal,
            characteristics: ["Ambition", "Discipline", "Responsibility", "Achievement"],
        },
        ZodiacSign::Aquarius => SignTraits {
            element: Element::Air,
            quality: Quality::Fixed,
            characteristics: ["Innovation", "Originality", "Humanitarianism", "Independence"],
        },
        ZodiacSign::Pisces => SignTraits {
            element: Element::Water,
            quality: Quality::Mutable,
            characteristics: ["Compassion", "Spirituality", "Imagination", "Healing"],
        },
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees (0..29 within a sign, or 0..359 standalone).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor() as u16;
    let remainder = (d - degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees,
        minutes,
        seconds,
    }
}

/// Full sign position result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignInfo {
    /// The zodiac sign.
    pub sign: ZodiacSign,
    /// 0-based sign index (0 = Aries).
    pub sign_index: u8,
    /// Decimal degrees within the sign [0.0, 30.0).
    pub degrees_in_sign: f64,
    /// Position within the sign as DMS.
    pub dms: Dms,
}

/// Determine the sign from a sidereal ecliptic longitude.
///
/// Each sign spans exactly 30 degrees: Aries = [0, 30), Taurus = [30, 60), etc.
pub fn sign_from_longitude(sidereal_lon_deg: f64) -> SignInfo {
    let lon = crate::util::normalize_360(sidereal_lon_deg);
    let sign_idx = (lon / 30.0).floor() as u8;
    // Clamp in case of floating point edge (exactly 360.0)
    let sign_idx = sign_idx.min(11);
    let degrees_in_sign = lon - (sign_idx as f64) * 30.0;

    SignInfo {
        sign: ALL_SIGNS[sign_idx as usize],
        sign_index: sign_idx,
        degrees_in_sign,
        dms: deg_to_dms(degrees_in_sign),
    }
}
