//! Pure Vedic astrology math over ecliptic longitudes.
//!
//! This crate has no dependencies and performs no I/O: every function is
//! a deterministic computation over its arguments. It provides:
//! - Zodiac sign and nakshatra classification with static trait tables
//! - The Ascendant (lagna) spherical-astronomy formula
//! - Vimshottari dasha sequencing
//! - Yoga detection heuristics
//! - Guna Milan (Ashtakoota) compatibility scoring

pub mod dasha;
pub mod guna;
pub mod lagna;
pub mod nakshatra;
pub mod planet;
pub mod sign;
pub mod util;
pub mod yoga;

pub use dasha::{
    DAYS_PER_YEAR, DashaInfluence, DashaPeriod, VIMSHOTTARI_SEQUENCE, dasha_influence,
    vimshottari_periods,
};
pub use guna::{
    CompatibilityBand, Gana, GunaBreakdown, Nadi, Varna, Vashya, Yoni, compatibility_band,
    gana_of, guna_milan, nadi_of, planet_friends, varna_of, vashya_of, yoni_of,
};
pub use lagna::{ascendant_longitude_deg, obliquity_deg};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, NakshatraReadingText,
    NakshatraTraits, PADA_SPAN, nakshatra_from_longitude, nakshatra_interpretation,
    nakshatra_traits,
};
pub use planet::{ALL_PLANETS, GrahaLongitudes, Planet, sign_lord};
pub use sign::{
    ALL_SIGNS, Dms, Element, Quality, SignInfo, SignTraits, ZodiacSign, deg_to_dms,
    sign_from_longitude, sign_traits,
};
pub use util::{angular_separation, normalize_360};
pub use yoga::{
    ALL_YOGAS, Yoga, YogaInterpretation, YogaMatch, detect_yogas, yoga_interpretation,
};
