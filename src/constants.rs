//! # Constants and type definitions for sunrise_noaa
//!
//! This module centralizes the **physical constants**, **conversion factors**, **accepted input
//! ranges** and **type aliases** used by the solar position pipeline.
//!
//! ## Overview
//!
//! - Time-scale anchors (J2000.0 epoch, days per Julian century)
//! - Unit conversions (degrees ↔ radians, days ↔ seconds, hour angle ↔ time)
//! - The zenith used for the sunrise/sunset hour angle
//! - Domain bounds for latitude, longitude, UTC offset and calendar year
//! - Core type aliases used across the crate

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Radians → degrees
pub const DEGRAD: f64 = 180.0 / std::f64::consts::PI;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Divisor mapping a second of the local day to a fraction of day when sampling whole seconds:
/// second `i` is evaluated at `i / 86399`, so the samples span the closed interval `[0, 1]`
pub const DAY_SAMPLE_SPAN: f64 = 86_399.0;

/// Number of minutes in a day
pub const MINUTES_PER_DAY: f64 = 1_440.0;

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00:00)
pub const J2000_JD: f64 = 2_451_545.0;

/// Number of days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Minutes of time per degree of hour angle (360° ↔ 1440 min)
pub const MINUTES_PER_DEGREE: f64 = 4.0;

/// Zenith distance of the Sun's centre at apparent sunrise/sunset, in degrees.
///
/// 90° plus 0.833° for the mean atmospheric refraction at the horizon and the solar semi-diameter.
pub const SUNRISE_ZENITH: Degree = 90.833;

// -------------------------------------------------------------------------------------------------
// Accepted input ranges
// -------------------------------------------------------------------------------------------------

pub const MIN_LATITUDE: Degree = -90.0;
pub const MAX_LATITUDE: Degree = 90.0;

pub const MIN_LONGITUDE: Degree = -180.0;
pub const MAX_LONGITUDE: Degree = 180.0;

/// Westernmost civil UTC offset in use (hours)
pub const MIN_UTC_OFFSET: Hours = -12.0;
/// Easternmost civil UTC offset in use (hours, Line Islands)
pub const MAX_UTC_OFFSET: Hours = 14.0;

/// Default lower bound of the calendar years accepted by the pipeline.
///
/// The polynomial fits behind the NOAA equations are only published as valid for 1800–2100.
pub const MIN_SUPPORTED_YEAR: i32 = 1800;
/// Default upper bound of the calendar years accepted by the pipeline.
pub const MAX_SUPPORTED_YEAR: i32 = 2100;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Duration or offset in hours
pub type Hours = f64;
/// Duration in minutes of time
pub type Minutes = f64;
/// Duration in seconds, or seconds past local midnight
pub type Seconds = f64;
/// Julian Day (days)
pub type JD = f64;
/// Julian centuries elapsed since J2000.0
pub type JulianCentury = f64;
