//! Chart-level Vedic astrology readings.
//!
//! This crate is the boundary API over the time, ephemeris, and pure-math
//! layers: each `compute_*` function takes a birth time (and coordinates
//! where the computation uses them) and returns a self-contained reading
//! record. Everything is deterministic; the only fallible operation is
//! name compatibility, which needs at least one letter per name.

pub mod atmakaraka;
pub mod chart;
pub mod error;
pub mod navamsa;
pub mod numerology;
pub mod upapada;

pub use atmakaraka::{
    Atmakaraka, AtmakarakaInterpretation, atmakaraka_characteristics, atmakaraka_interpretation,
};
pub use chart::{
    DashaPeriodReading, GunaMilan, MoonSignNakshatra, NakshatraReading, RisingSign, SunSign,
    compute_atmakaraka, compute_dasha_periods, compute_guna_milan, compute_moon_sign_and_nakshatra,
    compute_nakshatra, compute_rising_sign, compute_sun_sign, compute_yogas, interpret_guna_total,
};
pub use error::ChartError;
pub use navamsa::{NAVAMSA_SPAN, Navamsa, VargaAspect, VargaReading, navamsa_for_birth, navamsa_sign_of};
pub use numerology::{NameAspect, NameBand, NameCompatibility, compute_name_compatibility, name_band};
pub use upapada::{UpapadaLagna, upapada_for_birth};
