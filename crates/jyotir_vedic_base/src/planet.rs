//! The 9 grahas (planets) and sign lordship.
//!
//! Rahu and Ketu are the lunar nodes, counted as shadow planets. Sign
//! lordship follows the universal Vedic assignment.

use crate::sign::ZodiacSign;

/// The 9 grahas in traditional order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
}

/// All 9 planets in order (0 = Sun .. 8 = Ketu).
pub const ALL_PLANETS: [Planet; 9] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Mercury,
    Planet::Jupiter,
    Planet::Venus,
    Planet::Saturn,
    Planet::Rahu,
    Planet::Ketu,
];

impl Planet {
    /// English name of the planet.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into ALL_PLANETS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mars => 2,
            Self::Mercury => 3,
            Self::Jupiter => 4,
            Self::Venus => 5,
            Self::Saturn => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Vimshottari mahadasha length in years. The nine lengths sum to 120.
    pub const fn vimshottari_years(self) -> f64 {
        match self {
            Self::Ketu => 7.0,
            Self::Venus => 20.0,
            Self::Sun => 6.0,
            Self::Moon => 10.0,
            Self::Mars => 7.0,
            Self::Rahu => 18.0,
            Self::Jupiter => 16.0,
            Self::Saturn => 19.0,
            Self::Mercury => 17.0,
        }
    }

    /// All 9 planets in order.
    pub const fn all() -> &'static [Planet; 9] {
        &ALL_PLANETS
    }
}

/// Tropical longitudes of all nine grahas, indexed by [`Planet::index`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrahaLongitudes {
    pub longitudes: [f64; 9],
}

impl GrahaLongitudes {
    /// Longitude of one planet in degrees.
    pub fn longitude(&self, planet: Planet) -> f64 {
        self.longitudes[planet.index() as usize]
    }
}

/// Planetary lord of a zodiac sign.
///
/// Standard Vedic lordship: Mars rules Aries/Scorpio, Venus rules
/// Taurus/Libra, Mercury rules Gemini/Virgo, Moon rules Cancer, Sun
/// rules Leo, Jupiter rules Sagittarius/Pisces, Saturn rules
/// Capricorn/Aquarius.
pub const fn sign_lord(sign: ZodiacSign) -> Planet {
    match sign {
        ZodiacSign::Aries => Planet::Mars,
        ZodiacSign::Taurus => Planet::Venus,
        ZodiacSign::Gemini => Planet::Mercury,
        ZodiacSign::Cancer => Planet::Moon,
        ZodiacSign::Leo => Planet::Sun,
        ZodiacSign::Virgo => Planet::Mercury,
        ZodiacSign::Libra => Planet::Venus,
        ZodiacSign::Scorpio => Planet::Mars,
        ZodiacSign::Sagittarius => Planet::Jupiter,
        ZodiacSign::Capricorn => Planet::Saturn,
        ZodiacSign::Aquarius => Planet::Saturn,
        ZodiacSign::Pisces => Planet::Jupiter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sign::ALL_SIGNS;

    #[test]
    fn all_planets_count() {
        assert_eq!(ALL_PLANETS.len(), 9);
    }

    #[test]
    fn planet_indices_sequential() {
        for (i, p) in ALL_PLANETS.iter().enumerate() {
            assert_eq!(p.index() as usize, i);
        }
    }

    #[test]
    fn planet_names_nonempty() {
        for p in ALL_PLANETS {
            assert!(!p.name().is_empty());
        }
    }

    #[test]
    fn vimshottari_years_sum_120() {
        let total: f64 = ALL_PLANETS.iter().map(|p| p.vimshottari_years()).sum();
        assert!((total - 120.0).abs() < 1e-12);
    }

    #[test]
    fn sign_lord_dual_rulerships() {
        assert_eq!(sign_lord(ZodiacSign::Aries), Planet::Mars);
        assert_eq!(sign_lord(ZodiacSign::Scorpio), Planet::Mars);
        assert_eq!(sign_lord(ZodiacSign::Taurus), Planet::Venus);
        assert_eq!(sign_lord(ZodiacSign::Libra), Planet::Venus);
        assert_eq!(sign_lord(ZodiacSign::Gemini), Planet::Mercury);
        assert_eq!(sign_lord(ZodiacSign::Virgo), Planet::Mercury);
        assert_eq!(sign_lord(ZodiacSign::Sagittarius), Planet::Jupiter);
        assert_eq!(sign_lord(ZodiacSign::Pisces), Planet::Jupiter);
        assert_eq!(sign_lord(ZodiacSign::Capricorn), Planet::Saturn);
        assert_eq!(sign_lord(ZodiacSign::Aquarius), Planet::Saturn);
    }

    #[test]
    fn sign_lord_luminaries() {
        assert_eq!(sign_lord(ZodiacSign::Leo), Planet::Sun);
        assert_eq!(sign_lord(ZodiacSign::Cancer), Planet::Moon);
    }

    #[test]
    fn nodes_never_rule_a_sign() {
        for s in ALL_SIGNS {
            let lord = sign_lord(s);
            assert_ne!(lord, Planet::Rahu);
            assert_ne!(lord, Planet::Ketu);
        }
    }

    #[test]
    fn graha_longitudes_accessor() {
        let mut lons = [0.0; 9];
        lons[Planet::Jupiter.index() as usize] = 123.4;
        let g = GrahaLongitudes { longitudes: lons };
        assert!((g.longitude(Planet::Jupiter) - 123.4).abs() < 1e-12);
        assert!(g.longitude(Planet::Sun).abs() < 1e-12);
    }
}
