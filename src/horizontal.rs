//! Equatorial-to-horizontal transform in East-North-Up form.
//!
//! Azimuth is taken from the (E, N) pair of the same unit vector that yields
//! the altitude, so the two can never disagree. The vector stays finite at the
//! zenith and at declinations of +/-90 degrees, where a `tan(declination)`
//! formulation diverges.

use crate::angles::{normalize_angle, rad_to_deg};
use crate::types::HorizontalPosition;

/// Local ENU unit vector towards the Sun.
///
/// `hour_angle` is positive westward, so a morning Sun (negative hour angle)
/// has a positive East component.
pub fn enu_vector(latitude: f64, declination: f64, hour_angle: f64) -> (f64, f64, f64) {
    let (sin_lat, cos_lat) = latitude.sin_cos();
    let (sin_dec, cos_dec) = declination.sin_cos();
    let (sin_ha, cos_ha) = hour_angle.sin_cos();
    let e = -cos_dec * sin_ha;
    let n = cos_lat * sin_dec - sin_lat * cos_dec * cos_ha;
    let u = sin_lat * sin_dec + cos_lat * cos_dec * cos_ha;
    (e, n, u)
}

/// Altitude in degrees from the Up component, tolerant of round-off past +/-1.
pub fn altitude_from_up(u: f64) -> f64 {
    rad_to_deg(u.clamp(-1.0, 1.0).asin()).clamp(-90.0, 90.0)
}

/// Compass azimuth in degrees, 0 = North, clockwise through East.
pub fn azimuth_from_en(e: f64, n: f64) -> f64 {
    normalize_angle(rad_to_deg(e.atan2(n)))
}

/// Horizontal position for latitude, declination and hour angle, all in radians.
pub fn horizontal_position(latitude: f64, declination: f64, hour_angle: f64) -> HorizontalPosition {
    let (e, n, u) = enu_vector(latitude, declination, hour_angle);
    HorizontalPosition {
        e,
        n,
        u,
        altitude_deg: altitude_from_up(u),
        azimuth_deg: azimuth_from_en(e, n),
    }
}

impl HorizontalPosition {
    pub fn is_visible(&self) -> bool {
        self.altitude_deg > 0.0
    }

    pub fn zenith_deg(&self) -> f64 {
        90.0 - self.altitude_deg
    }
}
