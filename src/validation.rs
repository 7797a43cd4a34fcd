//! Input-domain checks run before any part of the solar pipeline.
//!
//! Every check is a pure predicate. [`validate_inputs`] applies them in a fixed order
//! (latitude, longitude, UTC offset, date), so the first offending input decides the error.
use crate::constants::{
    Degree, Hours, MAX_LATITUDE, MAX_LONGITUDE, MAX_UTC_OFFSET, MIN_LATITUDE, MIN_LONGITUDE,
    MIN_UTC_OFFSET,
};
use crate::params::SunriseParams;
use crate::sunrise_errors::SunriseError;
use crate::time::CivilDate;

/// Reject latitudes outside `[-90, 90]` degrees (NaN included).
pub fn validate_latitude(latitude: Degree) -> Result<(), SunriseError> {
    if (MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
        Ok(())
    } else {
        Err(SunriseError::InvalidLatitude(latitude))
    }
}

/// Reject longitudes outside `[-180, 180]` degrees (NaN included).
pub fn validate_longitude(longitude: Degree) -> Result<(), SunriseError> {
    if (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
        Ok(())
    } else {
        Err(SunriseError::InvalidLongitude(longitude))
    }
}

/// Reject UTC offsets outside `[-12, 14]` hours (NaN included).
pub fn validate_utc_offset(utc_offset: Hours) -> Result<(), SunriseError> {
    if (MIN_UTC_OFFSET..=MAX_UTC_OFFSET).contains(&utc_offset) {
        Ok(())
    } else {
        Err(SunriseError::InvalidUTCOffset(utc_offset))
    }
}

/// Reject dates outside the supported year range of `params`, and dates that do not exist in
/// the Gregorian calendar.
pub fn validate_date(date: &CivilDate, params: &SunriseParams) -> Result<(), SunriseError> {
    if !(params.min_year..=params.max_year).contains(&date.year) {
        return Err(SunriseError::InvalidDate(format!(
            "{date}: year {} outside the supported range [{}, {}]",
            date.year, params.min_year, params.max_year
        )));
    }
    date.to_epoch_at_midnight().map(|_| ())
}

/// Run every input check, in order.
pub fn validate_inputs(
    latitude: Degree,
    longitude: Degree,
    utc_offset: Hours,
    date: &CivilDate,
    params: &SunriseParams,
) -> Result<(), SunriseError> {
    validate_latitude(latitude)?;
    validate_longitude(longitude)?;
    validate_utc_offset(utc_offset)?;
    validate_date(date, params)
}
