use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::Degree;

/// Why the hour-angle equation has no solution on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolarCondition {
    /// The Sun stays above the horizon for the whole day (midnight sun).
    PolarDay,
    /// The Sun stays below the horizon for the whole day.
    PolarNight,
}

impl fmt::Display for PolarCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolarCondition::PolarDay => write!(f, "polar day"),
            PolarCondition::PolarNight => write!(f, "polar night"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SunriseError {
    #[error("Latitude invalid: {0} (expected a value in [-90, 90] degrees)")]
    InvalidLatitude(f64),

    #[error("Longitude invalid: {0} (expected a value in [-180, 180] degrees)")]
    InvalidLongitude(f64),

    #[error("UTC offset invalid: {0} (expected a value in [-12, 14] hours)")]
    InvalidUTCOffset(f64),

    #[error("Date invalid: {0}")]
    InvalidDate(String),

    #[error("The sun never rises or sets at latitude {latitude} (declination {declination:.4}°): {condition}")]
    SunNeverRisesOrSets {
        latitude: Degree,
        declination: Degree,
        condition: PolarCondition,
    },

    #[error("Invalid sexagesimal angle: {0}")]
    InvalidSexagesimal(String),

    #[error("Invalid sunrise parameter: {0}")]
    InvalidSunriseParameter(String),
}
