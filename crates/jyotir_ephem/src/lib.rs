//! Low-order ephemeris: Sun, Moon, and whole-chart graha longitudes.
//!
//! Everything here is an analytic approximation evaluated directly from
//! a Julian Date; there are no data files and no kernel loading. Sidereal
//! longitudes use a constant Lahiri ayanamsa (see [`ayanamsha`]).

pub mod ayanamsha;
pub mod graha_positions;
pub mod moon;
pub mod sun;

pub use ayanamsha::{LAHIRI_AYANAMSHA_DEG, tropical_to_sidereal};
pub use graha_positions::graha_mean_longitudes;
pub use moon::{
    moon_sidereal_longitude_deg, moon_simple_sidereal_longitude_deg,
    moon_simple_tropical_longitude_deg, moon_tropical_longitude_deg,
};
pub use sun::{sun_sidereal_longitude_deg, sun_tropical_longitude_deg};
