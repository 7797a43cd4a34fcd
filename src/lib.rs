pub mod constants;
pub mod conversion;
pub mod location;
pub mod params;
pub mod solar_geometry;
pub mod sun_events;
pub mod sunrise_errors;
pub mod time;
pub mod validation;

pub use location::Location;
pub use params::{SecondRounding, SunriseParams};
pub use sun_events::{compute_sun_events, sunrise_sunset, SunEvents, TimeOfDay};
pub use sunrise_errors::{PolarCondition, SunriseError};
pub use time::CivilDate;
