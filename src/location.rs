use serde::{Deserialize, Serialize};

use crate::constants::Degree;
use crate::conversion::parse_sexagesimal_deg;
use crate::sunrise_errors::SunriseError;
use crate::validation::{validate_latitude, validate_longitude};

/// A point on Earth in geodetic coordinates.
///
/// Longitudes are positive east of Greenwich, latitudes positive north of the equator. Both are
/// validated on construction, so a `Location` is always inside the accepted domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    latitude: Degree,
    longitude: Degree,
}

impl Location {
    /// Build a location from decimal degrees.
    ///
    /// Arguments
    /// -----------------
    /// * `latitude`: degrees in `[-90, 90]`.
    /// * `longitude`: degrees in `[-180, 180]`.
    ///
    /// Errors
    /// ----------
    /// * [`SunriseError::InvalidLatitude`] / [`SunriseError::InvalidLongitude`] when out of range.
    pub fn new(latitude: Degree, longitude: Degree) -> Result<Self, SunriseError> {
        validate_latitude(latitude)?;
        validate_longitude(longitude)?;
        Ok(Location {
            latitude,
            longitude,
        })
    }

    /// Build a location from sexagesimal strings such as `"-23 32 44.05"` or `"46 42 14.7 W"`.
    pub fn from_sexagesimal(latitude: &str, longitude: &str) -> Result<Self, SunriseError> {
        let lat = parse_sexagesimal_deg(latitude)
            .ok_or_else(|| SunriseError::InvalidSexagesimal(latitude.to_string()))?;
        let lon = parse_sexagesimal_deg(longitude)
            .ok_or_else(|| SunriseError::InvalidSexagesimal(longitude.to_string()))?;
        Location::new(lat, lon)
    }

    pub fn latitude(&self) -> Degree {
        self.latitude
    }

    pub fn longitude(&self) -> Degree {
        self.longitude
    }
}
