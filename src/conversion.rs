use crate::constants::{Degree, Hours, Radian, DEGRAD, RADEG};

/// Convert an angle from degrees to radians.
#[inline]
pub fn deg_to_rad(degrees: Degree) -> Radian {
    degrees * RADEG
}

/// Convert an angle from radians to degrees.
#[inline]
pub fn rad_to_deg(radians: Radian) -> Degree {
    radians * DEGRAD
}

/// Split a number of seconds into hours, minutes and seconds.
///
/// Arguments
/// ---------
/// * `seconds`: whole seconds in `[0, 86400)`
///
/// Return
/// ------
/// * a tuple `(hour, minute, second)`
pub fn seconds_to_hms(seconds: u32) -> (u8, u8, u8) {
    let hour = seconds / 3600;
    let minute = (seconds % 3600) / 60;
    let second = seconds % 60;
    (hour as u8, minute as u8, second as u8)
}

/// Parse a sexagesimal angle string to degrees
///
/// Arguments
/// ---------
/// * `angle`: a string in the format `±DD MM SS.SS`, optionally followed by a hemisphere letter
///   (`N`, `S`, `E` or `W`). A trailing `S` or `W` flips the sign.
///
/// Returns
/// -------
/// * `Option<Degree>`: the angle in degrees, or `None` if the input format is invalid.
pub fn parse_sexagesimal_deg(angle: &str) -> Option<Degree> {
    let trimmed = angle.trim();
    let (body, hemisphere_sign) = match trimmed.chars().last()? {
        'N' | 'n' | 'E' | 'e' => (&trimmed[..trimmed.len() - 1], 1.0),
        'S' | 's' | 'W' | 'w' => (&trimmed[..trimmed.len() - 1], -1.0),
        _ => (trimmed, 1.0),
    };

    let parts: Vec<&str> = body.split_whitespace().collect();
    if parts.len() != 3 {
        return None;
    }

    let sign = if parts[0].starts_with('-') { -1.0 } else { 1.0 };
    let d: f64 = parts[0].trim_start_matches(&['-', '+'][..]).parse().ok()?;
    let m: f64 = parts[1].parse().ok()?;
    let s: f64 = parts[2].parse().ok()?;

    if !(0.0..60.0).contains(&m) || !(0.0..60.0).contains(&s) {
        return None;
    }

    Some(hemisphere_sign * sign * (d + m / 60.0 + s / 3600.0))
}

/// Parse a UTC offset written as `±HH:MM`, `±HH` or a decimal number of hours.
///
/// `"+05:30"` and `"5.5"` both give `5.5`; `"-03:00"` gives `-3.0`.
pub fn parse_utc_offset(offset: &str) -> Option<Hours> {
    let trimmed = offset.trim();
    let trimmed = trimmed
        .strip_prefix("UTC")
        .or_else(|| trimmed.strip_prefix("GMT"))
        .unwrap_or(trimmed);

    match trimmed.split_once(':') {
        Some((hours, minutes)) => {
            let sign = if hours.starts_with('-') { -1.0 } else { 1.0 };
            let h: f64 = hours.trim_start_matches(&['-', '+'][..]).parse().ok()?;
            let m: f64 = minutes.parse().ok()?;
            if !(0.0..60.0).contains(&m) {
                return None;
            }
            Some(sign * (h + m / 60.0))
        }
        None => trimmed.parse().ok(),
    }
}
