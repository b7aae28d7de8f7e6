//! Julian Date conversion (Meeus calendar algorithm).

use crate::civil::CivilTime;

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Convert a civil date-time to a Julian Date.
///
/// Standard Meeus algorithm with fractional day from the time-of-day.
/// The Gregorian correction term is applied for all input dates, i.e.
/// the calendar is treated as proleptic Gregorian; any valid calendar
/// date yields a result, including dates before 1582.
pub fn calendar_to_jd(t: &CivilTime) -> f64 {
    let (y, m) = if t.month > 2 {
        (t.year as f64, t.month as f64)
    } else {
        (t.year as f64 - 1.0, t.month as f64 + 12.0)
    };
    let d = t.day_fraction();

    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + d + b - 1524.5
}

/// Julian centuries elapsed since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Days elapsed since J2000.0 (may be negative for earlier instants).
pub fn days_since_j2000(jd: f64) -> f64 {
    jd - J2000_JD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_epoch() {
        let t = CivilTime::new(2000, 1, 1, 12, 0, 0.0);
        assert!((calendar_to_jd(&t) - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn known_date_1987() {
        // Meeus example 7.a: 1987-04-10 00:00 TD -> JD 2446895.5
        let t = CivilTime::new(1987, 4, 10, 0, 0, 0.0);
        assert!((calendar_to_jd(&t) - 2_446_895.5).abs() < 1e-9);
    }

    #[test]
    fn january_handled_as_month_13() {
        // 1999-01-01 00:00 -> JD 2451179.5
        let t = CivilTime::new(1999, 1, 1, 0, 0, 0.0);
        assert!((calendar_to_jd(&t) - 2_451_179.5).abs() < 1e-9);
    }

    #[test]
    fn fractional_time_advances_jd() {
        let midnight = CivilTime::new(2020, 6, 1, 0, 0, 0.0);
        let six_am = CivilTime::new(2020, 6, 1, 6, 0, 0.0);
        let diff = calendar_to_jd(&six_am) - calendar_to_jd(&midnight);
        assert!((diff - 0.25).abs() < 1e-12);
    }

    #[test]
    fn proleptic_pre_1582() {
        // Gregorian correction applied even before the reform; the
        // algorithm stays monotonic across the historical cutover.
        let before = CivilTime::new(1500, 1, 1, 0, 0, 0.0);
        let after = CivilTime::new(1600, 1, 1, 0, 0, 0.0);
        assert!(calendar_to_jd(&before) < calendar_to_jd(&after));
    }

    #[test]
    fn centuries_at_epoch() {
        assert!(julian_centuries(J2000_JD).abs() < 1e-15);
    }

    #[test]
    fn centuries_one_century_later() {
        assert!((julian_centuries(J2000_JD + DAYS_PER_CENTURY) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn days_since_epoch_negative_before() {
        assert!(days_since_j2000(J2000_JD - 10.0) < 0.0);
    }
}
