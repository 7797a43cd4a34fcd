//! # Calendar dates and Julian time
//!
//! The NOAA equations are polynomials in **Julian centuries since J2000.0**. This module is the
//! only bridge between the caller's calendar date and that continuous time variable:
//!
//! ```text
//! CivilDate (local) --(hifitime, UTC midnight)--> JD --(- offset/24)--> JD of local midnight
//!                                                                 \--> Julian century T
//! ```
//!
//! Calendar arithmetic is delegated to [`hifitime`], which also validates that a
//! `(year, month, day)` triple is a real Gregorian date.
use std::fmt;
use std::str::FromStr;

use hifitime::{Epoch, Unit};
use serde::{Deserialize, Serialize};

use crate::constants::{Hours, JulianCentury, DAYS_PER_JULIAN_CENTURY, J2000_JD, JD};
use crate::sunrise_errors::SunriseError;

/// A Gregorian calendar date, without time of day or time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CivilDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl CivilDate {
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        CivilDate { year, month, day }
    }

    /// Calendar date (in UTC) of an [`Epoch`].
    pub fn from_epoch(epoch: &Epoch) -> Self {
        let (year, month, day, _, _, _, _) = epoch.to_gregorian_utc();
        CivilDate { year, month, day }
    }

    /// The UTC epoch at 00:00:00 of this date.
    ///
    /// Return
    /// ------
    /// * the epoch, or [`SunriseError::InvalidDate`] if the triple is not a real Gregorian day
    pub fn to_epoch_at_midnight(&self) -> Result<Epoch, SunriseError> {
        Epoch::maybe_from_gregorian_utc(self.year, self.month, self.day, 0, 0, 0, 0)
            .map_err(|e| SunriseError::InvalidDate(format!("{self}: {e}")))
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CivilDate {
    type Err = SunriseError;

    /// Parse a date in the format `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SunriseError::InvalidDate(format!("expected YYYY-MM-DD, got {s:?}"));

        // A leading '-' belongs to the year, not to the separator.
        let (sign, body) = match s.trim().strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, s.trim()),
        };
        let parts: Vec<&str> = body.split('-').collect();
        if parts.len() != 3 {
            return Err(invalid());
        }

        let year = i32::from_str(parts[0]).map_err(|_| invalid())?;
        let month = u8::from_str(parts[1]).map_err(|_| invalid())?;
        let day = u8::from_str(parts[2]).map_err(|_| invalid())?;

        Ok(CivilDate::new(sign * year, month, day))
    }
}

impl From<Epoch> for CivilDate {
    fn from(epoch: Epoch) -> Self {
        CivilDate::from_epoch(&epoch)
    }
}

/// Julian Day of local midnight of `date` for a clock running `utc_offset` hours ahead of UTC.
///
/// Arguments
/// ---------
/// * `date`: the local calendar date
/// * `utc_offset`: offset of the local clock from UTC, in hours (e.g. `-3.0` for São Paulo)
///
/// Return
/// ------
/// * the Julian Day (UTC) of 00:00 local time on `date`
pub fn julian_day(date: &CivilDate, utc_offset: Hours) -> Result<JD, SunriseError> {
    let midnight_utc = date.to_epoch_at_midnight()?;
    Ok(midnight_utc.to_jde_utc_days() - utc_offset / 24.0)
}

/// Julian centuries elapsed since J2000.0 for a Julian Day.
#[inline]
pub fn julian_century(jd: JD) -> JulianCentury {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

/// Local calendar date containing the instant `jd`, for a clock running `utc_offset` hours ahead
/// of UTC. Inverse of [`julian_day`] when `jd` is a local midnight.
///
/// The instant is rounded to the nearest second first, so that a `jd` carrying floating-point
/// noise just below midnight still maps to the intended date.
pub fn civil_date_from_julian_day(jd: JD, utc_offset: Hours) -> CivilDate {
    let local = Epoch::from_jde_utc(jd + utc_offset / 24.0).round(Unit::Second * 1.0);
    CivilDate::from_epoch(&local)
}

#[cfg(test)]
mod time_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_julian_day_utc() {
        let jd = julian_day(&CivilDate::new(2017, 3, 23), 0.0).unwrap();
        assert_abs_diff_eq!(jd, 2457835.5, epsilon = 1e-9);

        let jd = julian_day(&CivilDate::new(2000, 1, 1), 0.0).unwrap();
        assert_abs_diff_eq!(jd, J2000_JD - 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_julian_day_with_offset() {
        // Local midnight in UTC-3 happens at 03:00 UTC.
        let jd = julian_day(&CivilDate::new(2017, 3, 23), -3.0).unwrap();
        assert_abs_diff_eq!(jd, 2457835.5 + 0.125, epsilon = 1e-9);

        let jd = julian_day(&CivilDate::new(2017, 3, 23), 5.5).unwrap();
        assert_abs_diff_eq!(jd, 2457835.5 - 5.5 / 24.0, epsilon = 1e-9);
    }

    #[test]
    fn test_julian_century() {
        assert_eq!(julian_century(J2000_JD), 0.0);
        assert_eq!(julian_century(J2000_JD + DAYS_PER_JULIAN_CENTURY), 1.0);
        assert_abs_diff_eq!(
            julian_century(2457835.5),
            0.17222450376454485,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_julian_day_roundtrip() {
        for (date, offset) in [
            (CivilDate::new(2017, 3, 23), -3.0),
            (CivilDate::new(2017, 3, 23), 5.5),
            (CivilDate::new(1800, 1, 1), 14.0),
            (CivilDate::new(2100, 12, 31), -12.0),
            (CivilDate::new(2024, 2, 29), 0.0),
        ] {
            let jd = julian_day(&date, offset).unwrap();
            assert_eq!(civil_date_from_julian_day(jd, offset), date);

            let jd_again = julian_day(&civil_date_from_julian_day(jd, offset), offset).unwrap();
            assert_eq!(julian_century(jd_again), julian_century(jd));
        }
    }

    #[test]
    fn test_invalid_calendar_date() {
        assert!(matches!(
            CivilDate::new(2017, 2, 30).to_epoch_at_midnight(),
            Err(SunriseError::InvalidDate(_))
        ));
        assert!(matches!(
            julian_day(&CivilDate::new(2017, 13, 1), 0.0),
            Err(SunriseError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_parse_civil_date() {
        assert_eq!(
            "2017-03-23".parse::<CivilDate>().unwrap(),
            CivilDate::new(2017, 3, 23)
        );
        assert_eq!(
            " 1999-12-31 ".parse::<CivilDate>().unwrap(),
            CivilDate::new(1999, 12, 31)
        );
        assert!("2017/03/23".parse::<CivilDate>().is_err());
        assert!("2017-03".parse::<CivilDate>().is_err());
        assert!("2017-xx-23".parse::<CivilDate>().is_err());
        assert_eq!(CivilDate::new(2017, 3, 23).to_string(), "2017-03-23");
    }

    #[test]
    fn test_civil_date_from_epoch() {
        let epoch = Epoch::from_gregorian_utc(2017, 3, 23, 18, 14, 27, 0);
        assert_eq!(CivilDate::from(epoch), CivilDate::new(2017, 3, 23));
    }
}
