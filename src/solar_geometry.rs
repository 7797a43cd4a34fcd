//! # NOAA solar geometry
//!
//! Closed-form approximations of the Sun's apparent position, as published in the NOAA solar
//! calculator. Each function is one stage of the chain and takes the upstream quantities it needs
//! explicitly:
//!
//! ```text
//! T ─┬─> L (geom mean long) ───────────────┬──────────────────────────> equation of time
//!    ├─> M (geom mean anom) ─> C (eq ctr) ─┴─> true long ─> app long ─┐        ^
//!    ├─> e (eccentricity) ────────────────────────────────────────────┼────────┤
//!    └─> ε0 (mean obliquity) ─> ε (corrected) ─> y (multi factor) ────┼────────┘
//!                                      └──────────> declination δ <───┘
//! δ, latitude ─> hour angle H          equation of time, longitude, offset ─> solar noon N
//! sunrise = N − 4·60·H                 sunset = N + 4·60·H
//! ```
//!
//! ## Units
//!
//! - Angles are carried in **degrees** between stages; every trigonometric call converts through
//!   [`deg_to_rad`] / [`rad_to_deg`].
//! - The equation of time is in **minutes**.
//! - Solar noon, sunrise and sunset are in **seconds past local midnight**.
//!
//! [`SolarGeometry`] evaluates the whole chain once for a Julian century and keeps every
//! intermediate value, which is what the event solver and the tests consume.
use log::trace;
use serde::{Deserialize, Serialize};

use crate::constants::{
    Degree, Hours, JulianCentury, Minutes, Seconds, MINUTES_PER_DAY, MINUTES_PER_DEGREE,
    SUNRISE_ZENITH,
};
use crate::conversion::{deg_to_rad, rad_to_deg};
use crate::sunrise_errors::{PolarCondition, SunriseError};

/// Longitude of the ascending node of the Moon's orbit, the argument of the nutation terms.
#[inline]
fn omega(t: JulianCentury) -> Degree {
    125.04 - 1934.136 * t
}

/// Geometric mean longitude of the Sun, reduced to `[0, 360)` degrees.
pub fn geom_mean_long_sun(t: JulianCentury) -> Degree {
    (280.46646 + t * (36000.76983 + t * 0.0003032)).rem_euclid(360.0)
}

/// Geometric mean anomaly of the Sun, in degrees.
pub fn geom_mean_anom_sun(t: JulianCentury) -> Degree {
    357.52911 + t * (35999.05029 - 0.0001537 * t)
}

/// Eccentricity of Earth's orbit (dimensionless).
pub fn eccent_earth_orbit(t: JulianCentury) -> f64 {
    0.016708634 - t * (0.000042037 + 0.0000001267 * t)
}

/// Equation of the centre of the Sun, in degrees.
pub fn sun_eq_ctr(t: JulianCentury, geom_mean_anom_sun: Degree) -> Degree {
    let m = deg_to_rad(geom_mean_anom_sun);
    m.sin() * (1.914602 - t * (0.004817 + 0.000014 * t))
        + (2.0 * m).sin() * (0.019993 - 0.000101 * t)
        + (3.0 * m).sin() * 0.000289
}

/// True longitude of the Sun, in degrees.
pub fn sun_true_long(sun_eq_ctr: Degree, geom_mean_long_sun: Degree) -> Degree {
    sun_eq_ctr + geom_mean_long_sun
}

/// Apparent longitude of the Sun (corrected for nutation and aberration), in degrees.
pub fn sun_app_long(sun_true_long: Degree, t: JulianCentury) -> Degree {
    sun_true_long - 0.00569 - 0.00478 * deg_to_rad(omega(t)).sin()
}

/// Mean obliquity of the ecliptic, in degrees.
pub fn mean_obliq_ecliptic(t: JulianCentury) -> Degree {
    23.0 + (26.0 + (21.448 - t * (46.815 + t * (0.00059 - t * 0.001813))) / 60.0) / 60.0
}

/// Obliquity corrected for nutation, in degrees.
pub fn obliq_corr(mean_obliq_ecliptic: Degree, t: JulianCentury) -> Degree {
    mean_obliq_ecliptic + 0.00256 * deg_to_rad(omega(t)).cos()
}

/// Declination of the Sun, in degrees.
pub fn sun_declination(obliq_corr: Degree, sun_app_long: Degree) -> Degree {
    rad_to_deg((deg_to_rad(obliq_corr).sin() * deg_to_rad(sun_app_long).sin()).asin())
}

/// The `y = tan²(ε/2)` factor of the equation of time.
pub fn multi_factor(obliq_corr: Degree) -> f64 {
    let half = deg_to_rad(obliq_corr / 2.0).tan();
    half * half
}

/// Equation of time, in minutes of time.
///
/// Arguments
/// ---------
/// * `multi_factor`: `tan²(ε/2)` from [`multi_factor`]
/// * `geom_mean_long_sun`: geometric mean longitude, in degrees
/// * `eccent_earth_orbit`: orbital eccentricity
/// * `geom_mean_anom_sun`: geometric mean anomaly, in degrees
///
/// Return
/// ------
/// * apparent solar time minus mean solar time, in minutes
pub fn equation_of_time(
    multi_factor: f64,
    geom_mean_long_sun: Degree,
    eccent_earth_orbit: f64,
    geom_mean_anom_sun: Degree,
) -> Minutes {
    let y = multi_factor;
    let e = eccent_earth_orbit;
    let l = deg_to_rad(geom_mean_long_sun);
    let m = deg_to_rad(geom_mean_anom_sun);

    let radians = y * (2.0 * l).sin() - 2.0 * e * m.sin()
        + 4.0 * e * y * m.sin() * (2.0 * l).cos()
        - 0.5 * y * y * (4.0 * l).sin()
        - 1.25 * e * e * (2.0 * m).sin();

    MINUTES_PER_DEGREE * rad_to_deg(radians)
}

/// Hour angle of sunrise, i.e. half of the daylight arc, in degrees.
///
/// Arguments
/// ---------
/// * `latitude`: observer latitude, in degrees
/// * `sun_declination`: solar declination, in degrees
///
/// Return
/// ------
/// * the hour angle in `[0, 180]` degrees
///
/// Errors
/// ------
/// * [`SunriseError::SunNeverRisesOrSets`] when the arccosine argument falls outside `[-1, 1]`
///   (or is NaN). An argument below `-1` means the Sun never sets ([`PolarCondition::PolarDay`]),
///   anything else means it never rises ([`PolarCondition::PolarNight`]).
pub fn ha_sunrise(latitude: Degree, sun_declination: Degree) -> Result<Degree, SunriseError> {
    let phi = deg_to_rad(latitude);
    let delta = deg_to_rad(sun_declination);

    let cos_h =
        deg_to_rad(SUNRISE_ZENITH).cos() / (phi.cos() * delta.cos()) - phi.tan() * delta.tan();

    if !(-1.0..=1.0).contains(&cos_h) {
        let condition = if cos_h < -1.0 {
            PolarCondition::PolarDay
        } else {
            PolarCondition::PolarNight
        };
        return Err(SunriseError::SunNeverRisesOrSets {
            latitude,
            declination: sun_declination,
            condition,
        });
    }

    Ok(rad_to_deg(cos_h.acos()))
}

/// Time of solar noon, in seconds past local midnight.
pub fn solar_noon(longitude: Degree, equation_of_time: Minutes, utc_offset: Hours) -> Seconds {
    (MINUTES_PER_DAY / 2.0 - MINUTES_PER_DEGREE * longitude - equation_of_time
        + utc_offset * 60.0)
        * 60.0
}

/// Time of sunrise, in seconds past local midnight.
pub fn sunrise_time(solar_noon: Seconds, ha_sunrise: Degree) -> Seconds {
    solar_noon - ha_sunrise * MINUTES_PER_DEGREE * 60.0
}

/// Time of sunset, in seconds past local midnight.
pub fn sunset_time(solar_noon: Seconds, ha_sunrise: Degree) -> Seconds {
    solar_noon + ha_sunrise * MINUTES_PER_DEGREE * 60.0
}

/// Every quantity of the NOAA chain evaluated at one Julian century.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarGeometry {
    pub julian_century: JulianCentury,
    pub geom_mean_long_sun: Degree,
    pub geom_mean_anom_sun: Degree,
    pub eccent_earth_orbit: f64,
    pub sun_eq_ctr: Degree,
    pub sun_true_long: Degree,
    pub sun_app_long: Degree,
    pub mean_obliq_ecliptic: Degree,
    pub obliq_corr: Degree,
    pub sun_declination: Degree,
    pub multi_factor: f64,
    pub equation_of_time: Minutes,
}

impl SolarGeometry {
    /// Run the location-independent part of the chain.
    pub fn at(t: JulianCentury) -> Self {
        let geom_mean_long_sun = geom_mean_long_sun(t);
        let geom_mean_anom_sun = geom_mean_anom_sun(t);
        let eccent_earth_orbit = eccent_earth_orbit(t);
        let sun_eq_ctr = sun_eq_ctr(t, geom_mean_anom_sun);
        let sun_true_long = sun_true_long(sun_eq_ctr, geom_mean_long_sun);
        let sun_app_long = sun_app_long(sun_true_long, t);
        let mean_obliq_ecliptic = mean_obliq_ecliptic(t);
        let obliq_corr = obliq_corr(mean_obliq_ecliptic, t);
        let sun_declination = sun_declination(obliq_corr, sun_app_long);
        let multi_factor = multi_factor(obliq_corr);
        let equation_of_time = equation_of_time(
            multi_factor,
            geom_mean_long_sun,
            eccent_earth_orbit,
            geom_mean_anom_sun,
        );

        trace!(
            "solar geometry at T={t:.10}: declination={sun_declination:.6}°, equation of time={equation_of_time:.6} min"
        );

        SolarGeometry {
            julian_century: t,
            geom_mean_long_sun,
            geom_mean_anom_sun,
            eccent_earth_orbit,
            sun_eq_ctr,
            sun_true_long,
            sun_app_long,
            mean_obliq_ecliptic,
            obliq_corr,
            sun_declination,
            multi_factor,
            equation_of_time,
        }
    }

    /// Sunrise hour angle for an observer at `latitude`, see [`ha_sunrise`].
    pub fn ha_sunrise(&self, latitude: Degree) -> Result<Degree, SunriseError> {
        ha_sunrise(latitude, self.sun_declination)
    }

    /// Solar noon for an observer at `longitude` on a clock `utc_offset` hours ahead of UTC.
    pub fn solar_noon(&self, longitude: Degree, utc_offset: Hours) -> Seconds {
        solar_noon(longitude, self.equation_of_time, utc_offset)
    }

    /// `(sunrise, solar noon, sunset)` in seconds past local midnight, all from this single
    /// geometry.
    pub fn event_offsets(
        &self,
        latitude: Degree,
        longitude: Degree,
        utc_offset: Hours,
    ) -> Result<(Seconds, Seconds, Seconds), SunriseError> {
        let ha = self.ha_sunrise(latitude)?;
        let noon = self.solar_noon(longitude, utc_offset);
        trace!("hour angle={ha:.6}°, solar noon={noon:.3} s");
        Ok((sunrise_time(noon, ha), noon, sunset_time(noon, ha)))
    }
}
