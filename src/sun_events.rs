//! # Sunrise, solar noon and sunset
//!
//! Top-level entry points of the crate. Given a location, a UTC offset and a local calendar date,
//! they validate the inputs, anchor the computation at **local midnight** (as a Julian Day), and
//! solve each event with the [`SolarGeometry`] chain.
//!
//! ## Event refinement
//!
//! The NOAA quantities drift slowly during the day (the declination moves by up to ~0.4° per
//! day around the equinoxes). Each event is therefore solved as a fixed point:
//!
//! ```text
//! s₀ = 0                                   (local midnight)
//! sₖ₊₁ = event(SolarGeometry::at(T(JD_midnight + sₖ / 86400)))
//! ```
//!
//! [`SunriseParams::refine_iterations`](crate::params::SunriseParams::refine_iterations) sets the
//! number of passes after the first one; zero keeps the midnight geometry for every event, which
//! makes sunrise and sunset exactly symmetric around solar noon.
//!
//! ## Whole seconds
//!
//! With the default [`SecondRounding::SelfConsistent`], each refined event is snapped to the
//! second `i` of a discrete sampling of the day: second `i` is evaluated at
//! `JD_midnight + i / 86399`, the hour angle term is rounded to whole seconds, and the kept `i`
//! minimises `|event(i) − 86400 · i / 86399|`. Only the seconds within
//! `SELF_CONSISTENT_SEARCH_RADIUS` of the refined event are scored.
//!
//! ## Example
//!
//! ```rust
//! use sunrise_noaa::sun_events::{sunrise_sunset, TimeOfDay};
//! use sunrise_noaa::time::CivilDate;
//!
//! let (sunrise, sunset) =
//!     sunrise_sunset(-23.545570, -46.704082, -3.0, &CivilDate::new(2017, 3, 23)).unwrap();
//! assert_eq!(sunrise, TimeOfDay::new(6, 11, 44));
//! assert_eq!(sunset.to_string(), "18:14:27");
//! ```
use std::fmt;

use hifitime::{Duration, Epoch, Unit};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::constants::{
    Degree, Hours, Seconds, DAY_SAMPLE_SPAN, JD, MINUTES_PER_DEGREE, SECONDS_PER_DAY,
};
use crate::conversion::seconds_to_hms;
use crate::location::Location;
use crate::params::{SecondRounding, SunriseParams};
use crate::solar_geometry::SolarGeometry;
use crate::sunrise_errors::SunriseError;
use crate::time::{julian_century, julian_day, CivilDate};
use crate::validation::validate_inputs;

/// A wall-clock time, in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8, second: u8) -> Self {
        TimeOfDay {
            hour,
            minute,
            second,
        }
    }

    /// Wall-clock time of an offset in seconds from local midnight.
    ///
    /// Offsets outside `[0, 86400)` (an event on the previous or the next local day) are folded
    /// back into the day.
    pub fn from_seconds(seconds: i64) -> Self {
        let (hour, minute, second) =
            seconds_to_hms(seconds.rem_euclid(SECONDS_PER_DAY as i64) as u32);
        TimeOfDay::new(hour, minute, second)
    }

    pub fn seconds_since_midnight(&self) -> u32 {
        self.hour as u32 * 3600 + self.minute as u32 * 60 + self.second as u32
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// The solar events of one local day.
///
/// The `*_seconds` fields keep the refined, unrounded offsets from local midnight; they may fall
/// outside `[0, 86400)` at high latitudes, where the Sun sets after local midnight. The
/// [`TimeOfDay`] fields are the whole seconds chosen by
/// [`SunriseParams::rounding`](crate::params::SunriseParams::rounding), which can differ from the
/// nearest second of the `*_seconds` fields by one.
///
/// Each event is solved with the geometry at its own time, so `solar_noon_seconds` is not the
/// midpoint of sunrise and sunset. Only a single evaluation of the chain
/// ([`SolarGeometry::event_offsets`], or `refine_iterations = 0`) is exactly symmetric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunEvents {
    pub date: CivilDate,
    pub utc_offset: Hours,
    pub sunrise: TimeOfDay,
    pub solar_noon: TimeOfDay,
    pub sunset: TimeOfDay,
    pub sunrise_seconds: Seconds,
    pub solar_noon_seconds: Seconds,
    pub sunset_seconds: Seconds,
    local_midnight_jd: JD,
}

impl SunEvents {
    /// Time between sunrise and sunset.
    pub fn day_length(&self) -> Duration {
        Unit::Second * (self.sunset_seconds - self.sunrise_seconds)
    }

    /// Absolute instant of local midnight.
    pub fn local_midnight_epoch(&self) -> Epoch {
        Epoch::from_jde_utc(self.local_midnight_jd)
    }

    /// Absolute instant of sunrise.
    pub fn sunrise_epoch(&self) -> Epoch {
        self.local_midnight_epoch() + Unit::Second * self.sunrise_seconds
    }

    /// Absolute instant of solar noon.
    pub fn solar_noon_epoch(&self) -> Epoch {
        self.local_midnight_epoch() + Unit::Second * self.solar_noon_seconds
    }

    /// Absolute instant of sunset.
    pub fn sunset_epoch(&self) -> Epoch {
        self.local_midnight_epoch() + Unit::Second * self.sunset_seconds
    }
}

impl fmt::Display for SunEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (UTC{:+}): sunrise {}, solar noon {}, sunset {}",
            self.date, self.utc_offset, self.sunrise, self.solar_noon, self.sunset
        )
    }
}

#[derive(Debug, Clone, Copy)]
enum SolarEvent {
    Sunrise,
    SolarNoon,
    Sunset,
}

/// Half width, in seconds, of the window searched around the refined event by
/// [`SecondRounding::SelfConsistent`].
const SELF_CONSISTENT_SEARCH_RADIUS: i64 = 5;

/// One observer on one local day, ready to solve events.
struct EventSolver<'a> {
    latitude: Degree,
    longitude: Degree,
    utc_offset: Hours,
    local_midnight_jd: JD,
    params: &'a SunriseParams,
}

impl EventSolver<'_> {
    /// Offset of `event` from local midnight, in seconds, for the geometry at fraction of day
    /// `day_fraction`. The hour angle term is rounded to whole seconds when `whole_hour_angle`.
    fn event_at(
        &self,
        event: SolarEvent,
        day_fraction: f64,
        whole_hour_angle: bool,
    ) -> Result<Seconds, SunriseError> {
        let geometry = SolarGeometry::at(julian_century(self.local_midnight_jd + day_fraction));
        let noon = geometry.solar_noon(self.longitude, self.utc_offset);
        if let SolarEvent::SolarNoon = event {
            return Ok(noon);
        }

        let mut half_day = geometry.ha_sunrise(self.latitude)? * MINUTES_PER_DEGREE * 60.0;
        if whole_hour_angle {
            half_day = half_day.round();
        }
        Ok(match event {
            SolarEvent::Sunrise => noon - half_day,
            _ => noon + half_day,
        })
    }

    /// Solve one event by re-evaluating the solar geometry at the event time found by the
    /// previous pass.
    fn refine(&self, event: SolarEvent) -> Result<Seconds, SunriseError> {
        let mut seconds = 0.0;
        for _ in 0..=self.params.refine_iterations {
            seconds = self.event_at(event, seconds / SECONDS_PER_DAY, false)?;
        }
        Ok(seconds)
    }

    /// The whole second of `event`, starting from its refined offset `seconds`.
    fn whole_second(&self, event: SolarEvent, seconds: Seconds) -> Result<i64, SunriseError> {
        if self.params.rounding != SecondRounding::SelfConsistent {
            return Ok(self.params.rounding.apply(seconds));
        }

        let centre = seconds.round() as i64;
        let mut best = (f64::INFINITY, centre);
        for i in centre - SELF_CONSISTENT_SEARCH_RADIUS..=centre + SELF_CONSISTENT_SEARCH_RADIUS {
            let day_fraction = i as f64 / DAY_SAMPLE_SPAN;
            let residual =
                (self.event_at(event, day_fraction, true)? - SECONDS_PER_DAY * day_fraction).abs();
            if residual < best.0 {
                best = (residual, i);
            }
        }
        trace!("{event:?}: refined {seconds:.3} s, self-consistent second {}", best.1);
        Ok(best.1)
    }

    fn solve(&self, event: SolarEvent) -> Result<(Seconds, i64), SunriseError> {
        let seconds = self.refine(event)?;
        Ok((seconds, self.whole_second(event, seconds)?))
    }
}

/// Compute sunrise, solar noon and sunset for one local day.
///
/// Arguments
/// -----------------
/// * `location`: the observer.
/// * `utc_offset`: offset of the local clock from UTC in hours, in `[-12, 14]`.
/// * `date`: the local calendar date.
/// * `params`: refinement, rounding and accepted year range.
///
/// Return
/// ----------
/// * the [`SunEvents`] of `date`, expressed in the local clock.
///
/// Errors
/// ----------
/// * [`SunriseError::InvalidUTCOffset`] or [`SunriseError::InvalidDate`] for inputs outside the
///   accepted domain.
/// * [`SunriseError::SunNeverRisesOrSets`] during polar day or polar night.
pub fn compute_sun_events(
    location: &Location,
    utc_offset: Hours,
    date: &CivilDate,
    params: &SunriseParams,
) -> Result<SunEvents, SunriseError> {
    let (latitude, longitude) = (location.latitude(), location.longitude());
    validate_inputs(latitude, longitude, utc_offset, date, params)?;

    let local_midnight_jd = julian_day(date, utc_offset)?;
    debug!(
        "sun events for lat={latitude}, lon={longitude}, offset={utc_offset} h on {date}: local midnight JD={local_midnight_jd}"
    );

    let solver = EventSolver {
        latitude,
        longitude,
        utc_offset,
        local_midnight_jd,
        params,
    };
    let solved = solver.solve(SolarEvent::Sunrise).and_then(|sunrise| {
        Ok((
            sunrise,
            solver.solve(SolarEvent::SolarNoon)?,
            solver.solve(SolarEvent::Sunset)?,
        ))
    });
    let ((sunrise_seconds, sunrise), (solar_noon_seconds, solar_noon), (sunset_seconds, sunset)) =
        match solved {
            Ok(events) => events,
            Err(err) => {
                debug!("no sunrise/sunset on {date} at lat={latitude}: {err}");
                return Err(err);
            }
        };

    let events = SunEvents {
        date: *date,
        utc_offset,
        sunrise: TimeOfDay::from_seconds(sunrise),
        solar_noon: TimeOfDay::from_seconds(solar_noon),
        sunset: TimeOfDay::from_seconds(sunset),
        sunrise_seconds,
        solar_noon_seconds,
        sunset_seconds,
        local_midnight_jd,
    };
    debug!("{events}");

    Ok(events)
}

/// Sunrise and sunset with the default [`SunriseParams`].
///
/// Arguments
/// -----------------
/// * `latitude`: degrees in `[-90, 90]`, positive north.
/// * `longitude`: degrees in `[-180, 180]`, positive east.
/// * `utc_offset`: hours in `[-12, 14]`.
/// * `date`: the local calendar date, years 1800 to 2100.
///
/// Return
/// ----------
/// * `(sunrise, sunset)` as wall-clock times in the given offset.
///
/// Both times are folded into the local day. At high latitudes around the summer solstice the
/// Sun can set after local midnight, and `sunset` then reads earlier than `sunrise` (Reykjavik on
/// 2017-06-21: sunrise 02:55:15, sunset 00:03:55 of the next day). Use [`compute_sun_events`]
/// and its `*_seconds` fields or `*_epoch` helpers to tell the days apart.
pub fn sunrise_sunset(
    latitude: Degree,
    longitude: Degree,
    utc_offset: Hours,
    date: &CivilDate,
) -> Result<(TimeOfDay, TimeOfDay), SunriseError> {
    let location = Location::new(latitude, longitude)?;
    let events = compute_sun_events(&location, utc_offset, date, &SunriseParams::default())?;
    Ok((events.sunrise, events.sunset))
}
