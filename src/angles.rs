pub const DEGREES_PER_HOUR: f64 = 15.0;
pub const MINUTES_PER_DEGREE: f64 = 4.0;
pub const MINUTES_PER_DAY: f64 = 1440.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

/// Wraps an angle into [0, 360).
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Local Standard Time Meridian in degrees for a UTC offset in hours.
pub fn standard_meridian(tz_offset_hours: f64) -> f64 {
    DEGREES_PER_HOUR * tz_offset_hours
}

/// Minutes to add to clock time to reach true solar time.
pub fn time_offset_minutes(eot_minutes: f64, longitude: f64, tz_offset_hours: f64) -> f64 {
    eot_minutes + MINUTES_PER_DEGREE * (longitude - standard_meridian(tz_offset_hours))
}

/// True solar time in minutes, in [0, 1440).
pub fn true_solar_time(clock_minutes: f64, time_offset_minutes: f64) -> f64 {
    let tst = (clock_minutes + time_offset_minutes).rem_euclid(MINUTES_PER_DAY);
    if tst >= MINUTES_PER_DAY {
        0.0
    } else {
        tst
    }
}

/// Hour angle in degrees for a true solar time; 720 minutes is local solar noon.
pub fn hour_angle(true_solar_minutes: f64) -> f64 {
    true_solar_minutes / MINUTES_PER_DEGREE - 180.0
}

/// Hour angle in degrees (positive westward) for a local clock time.
pub fn resolve_hour_angle(
    clock_minutes: f64,
    eot_minutes: f64,
    longitude: f64,
    tz_offset_hours: f64,
) -> f64 {
    let offset = time_offset_minutes(eot_minutes, longitude, tz_offset_hours);
    hour_angle(true_solar_time(clock_minutes, offset))
}
