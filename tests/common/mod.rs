use sunrise_noaa::TimeOfDay;

/// Parse `HH:MM:SS`.
pub fn parse_time_of_day(s: &str) -> TimeOfDay {
    let parts: Vec<u8> = s
        .split(':')
        .map(|p| p.parse().expect("time field is not a number"))
        .collect();
    assert_eq!(parts.len(), 3, "expected HH:MM:SS, got {s:?}");
    TimeOfDay::new(parts[0], parts[1], parts[2])
}
