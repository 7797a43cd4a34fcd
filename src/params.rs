//! # Sunrise computation parameters
//!
//! This module defines the [`SunriseParams`](crate::params::SunriseParams) configuration struct
//! and its builder. The parameters do not change the NOAA equations themselves; they control
//! **where** in the day the equations are evaluated, **how** the results are turned into whole
//! seconds, and **which** calendar years are accepted.
//!
//! ## Pipeline overview
//!
//! 1. **Validation**
//!    Dates outside `[min_year, max_year]` are rejected with
//!    [`SunriseError::InvalidDate`](crate::sunrise_errors::SunriseError::InvalidDate).
//!
//! 2. **Event refinement**
//!    Each event is first evaluated with the solar geometry of local midnight, then re-evaluated
//!    `refine_iterations` times with the geometry at the event time found by the previous pass.
//!    `refine_iterations = 0` keeps the single midnight evaluation.
//!
//! 3. **Rounding**
//!    Event times in fractional seconds are converted to whole seconds using `rounding`. The
//!    default, [`SecondRounding::SelfConsistent`], searches the seconds next to the refined event
//!    for the one whose own evaluation of the chain lands on it.
//!
//! ## Example
//!
//! ```rust
//! use sunrise_noaa::params::{SecondRounding, SunriseParams};
//!
//! let params = SunriseParams::builder()
//!     .refine_iterations(5)
//!     .rounding(SecondRounding::Truncate)
//!     .min_year(1900)
//!     .max_year(2050)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(params.refine_iterations, 5);
//! ```
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{Seconds, MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR};
use crate::sunrise_errors::SunriseError;

/// Upper bound for [`SunriseParams::refine_iterations`].
pub const MAX_REFINE_ITERATIONS: usize = 32;

/// How an event time in fractional seconds becomes a whole second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SecondRounding {
    /// Pick the second `i` near the event that minimises `|event(i) − 86400 · i / 86399|`,
    /// with the chain evaluated at `JD_midnight + i / 86399` and the hour angle term rounded to
    /// whole seconds.
    #[default]
    SelfConsistent,
    /// Round to the nearest second (half away from zero).
    Nearest,
    /// Drop the fractional part (floor, also for negative offsets).
    Truncate,
}

impl SecondRounding {
    /// Arithmetic rounding of `seconds`.
    ///
    /// [`SecondRounding::SelfConsistent`] needs the solar geometry around the event; here it
    /// rounds to nearest, which is the centre of its search.
    pub fn apply(self, seconds: Seconds) -> i64 {
        match self {
            SecondRounding::SelfConsistent | SecondRounding::Nearest => seconds.round() as i64,
            SecondRounding::Truncate => seconds.floor() as i64,
        }
    }
}

impl fmt::Display for SecondRounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecondRounding::SelfConsistent => write!(f, "self-consistent"),
            SecondRounding::Nearest => write!(f, "nearest"),
            SecondRounding::Truncate => write!(f, "truncate"),
        }
    }
}

/// Configuration of a sunrise/sunset computation.
///
/// Fields
/// -----------------
/// * `refine_iterations` – number of re-evaluations of the solar geometry at the event time.
/// * `rounding` – conversion of event times to whole seconds.
/// * `min_year`, `max_year` – inclusive range of accepted calendar years.
///
/// Default values:
///
/// * `refine_iterations`: 3
/// * `rounding`: [`SecondRounding::SelfConsistent`]
/// * `min_year`: 1800
/// * `max_year`: 2100
///
/// Notes & Validation
/// -----------------
/// * `refine_iterations ≤ MAX_REFINE_ITERATIONS`.
/// * `1 ≤ min_year ≤ max_year ≤ 9999`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunriseParams {
    pub refine_iterations: usize,
    pub rounding: SecondRounding,
    pub min_year: i32,
    pub max_year: i32,
}

impl SunriseParams {
    /// Construct a new [`SunriseParams`] with default values.
    ///
    /// This is equivalent to calling [`SunriseParams::default()`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new [`SunriseParamsBuilder`] starting from the defaults.
    pub fn builder() -> SunriseParamsBuilder {
        SunriseParamsBuilder::new()
    }
}

impl Default for SunriseParams {
    fn default() -> Self {
        SunriseParams {
            refine_iterations: 3,
            rounding: SecondRounding::SelfConsistent,
            min_year: MIN_SUPPORTED_YEAR,
            max_year: MAX_SUPPORTED_YEAR,
        }
    }
}

/// Builder for [`SunriseParams`], with validation.
#[derive(Debug, Clone)]
pub struct SunriseParamsBuilder {
    params: SunriseParams,
}

impl Default for SunriseParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SunriseParamsBuilder {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self {
            params: SunriseParams::default(),
        }
    }

    pub fn refine_iterations(mut self, v: usize) -> Self {
        self.params.refine_iterations = v;
        self
    }
    pub fn rounding(mut self, v: SecondRounding) -> Self {
        self.params.rounding = v;
        self
    }
    pub fn min_year(mut self, v: i32) -> Self {
        self.params.min_year = v;
        self
    }
    pub fn max_year(mut self, v: i32) -> Self {
        self.params.max_year = v;
        self
    }

    /// Validate and build the final [`SunriseParams`].
    ///
    /// Errors
    /// -----------------
    /// * [`SunriseError::InvalidSunriseParameter`] when a constraint listed on
    ///   [`SunriseParams`] is violated.
    pub fn build(self) -> Result<SunriseParams, SunriseError> {
        let p = &self.params;

        if p.refine_iterations > MAX_REFINE_ITERATIONS {
            return Err(SunriseError::InvalidSunriseParameter(format!(
                "refine_iterations must be <= {MAX_REFINE_ITERATIONS}"
            )));
        }
        if !(1..=9999).contains(&p.min_year) || !(1..=9999).contains(&p.max_year) {
            return Err(SunriseError::InvalidSunriseParameter(
                "min_year and max_year must lie in [1, 9999]".into(),
            ));
        }
        if p.min_year > p.max_year {
            return Err(SunriseError::InvalidSunriseParameter(
                "require min_year <= max_year".into(),
            ));
        }

        Ok(self.params)
    }
}

impl fmt::Display for SunriseParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            const PARAM_COL: usize = 32;
            writeln!(f, "Sunrise Parameters")?;
            writeln!(f, "------------------")?;

            macro_rules! line {
                ($fmt:expr, $val:expr, $comment:expr) => {{
                    let s = format!($fmt, $val);
                    let pad = if s.len() < PARAM_COL {
                        " ".repeat(PARAM_COL - s.len())
                    } else {
                        " ".to_string()
                    };
                    writeln!(f, "  {}{}# {}", s, pad, $comment)
                }};
            }

            line!(
                "refine_iterations = {}",
                self.refine_iterations,
                "re-evaluations at the event time"
            )?;
            line!("rounding = {}", self.rounding, "fractional → whole seconds")?;
            line!("min_year = {}", self.min_year, "first accepted year")?;
            line!("max_year = {}", self.max_year, "last accepted year")?;
            Ok(())
        } else {
            write!(
                f,
                "SunriseParams(refine_iterations={}, rounding={}, years={}..={})",
                self.refine_iterations, self.rounding, self.min_year, self.max_year
            )
        }
    }
}
