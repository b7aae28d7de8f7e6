//! Naive local civil date-time.

/// A civil calendar date-time in the birth locale's local clock time.
///
/// No timezone or UTC offset is modeled anywhere in the pipeline: the
/// value is fed into Julian Date and sidereal time computation as-is.
/// This is a documented precision gap for locations far from the
/// Greenwich meridian, inherited deliberately from the system this
/// engine reproduces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CivilTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Fractional day-of-month, including the time-of-day part.
    pub fn day_fraction(&self) -> f64 {
        self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0
    }
}

impl std::fmt::Display for CivilTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second as u32
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_constructor() {
        let t = CivilTime::new(1990, 7, 15, 14, 30, 0.0);
        assert_eq!(t.year, 1990);
        assert_eq!(t.month, 7);
        assert_eq!(t.day, 15);
        assert_eq!(t.hour, 14);
        assert_eq!(t.minute, 30);
        assert!(t.second.abs() < 1e-12);
    }

    #[test]
    fn day_fraction_noon() {
        let t = CivilTime::new(2000, 1, 1, 12, 0, 0.0);
        assert!((t.day_fraction() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn day_fraction_half_minute() {
        let t = CivilTime::new(2000, 1, 10, 0, 0, 30.0);
        assert!((t.day_fraction() - (10.0 + 30.0 / 86_400.0)).abs() < 1e-12);
    }

    #[test]
    fn display_format() {
        let t = CivilTime::new(1990, 7, 15, 14, 30, 5.0);
        assert_eq!(t.to_string(), "1990-07-15T14:30:05");
    }
}
