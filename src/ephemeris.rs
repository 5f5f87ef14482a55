//! Low-order solar ephemeris: declination and equation of time as truncated
//! Fourier series in the mean orbital angle.

use std::f64::consts::PI;

use crate::types::{Components, EphemerisSample};

/// Minutes of time per radian of the equation-of-time series.
pub const EOT_SCALE_MINUTES: f64 = 229.18;

/// Mean orbital angle (radians) at local noon of day `n` in a year of `days_in_year` days.
pub fn orbital_angle(n: u32, days_in_year: u32) -> f64 {
    (2.0 * PI / days_in_year as f64) * (n as f64 - 1.0 + 0.5)
}

/// Solar declination, radians.
pub fn declination(gamma: f64) -> f64 {
    0.006918 - 0.399912 * gamma.cos() + 0.070257 * gamma.sin()
        - 0.006758 * (2.0 * gamma).cos()
        + 0.000907 * (2.0 * gamma).sin()
        - 0.002697 * (3.0 * gamma).cos()
        + 0.00148 * (3.0 * gamma).sin()
}

/// Axial-tilt share of the equation of time, minutes.
pub fn tilt_component(gamma: f64) -> f64 {
    EOT_SCALE_MINUTES * (-0.032077 * gamma.sin() - 0.040849 * (2.0 * gamma).sin())
}

/// Eccentricity share of the equation of time, minutes.
pub fn eccentricity_component(gamma: f64) -> f64 {
    EOT_SCALE_MINUTES * (0.000075 + 0.001868 * gamma.cos() - 0.014615 * (2.0 * gamma).cos())
}

/// Equation of time in minutes, the sum of both components.
pub fn equation_of_time(gamma: f64) -> f64 {
    tilt_component(gamma) + eccentricity_component(gamma)
}

pub fn sample(n: u32, days_in_year: u32) -> EphemerisSample {
    let gamma = orbital_angle(n, days_in_year);
    let tilt = tilt_component(gamma);
    let eccentricity = eccentricity_component(gamma);
    EphemerisSample {
        orbital_angle: gamma,
        declination: declination(gamma),
        eot_minutes: tilt + eccentricity,
        tilt_component_minutes: tilt,
        eccentricity_component_minutes: eccentricity,
    }
}

impl EphemerisSample {
    /// Declination and equation of time with the excluded effects removed.
    ///
    /// Dropping the tilt also pins the Sun to the celestial equator. With
    /// [`Components::ALL`] the result is bit-identical to the unfiltered sample.
    pub fn filtered(&self, components: Components) -> (f64, f64) {
        let declination = if components.tilt {
            self.declination
        } else {
            0.0
        };
        let eot = match (components.tilt, components.eccentricity) {
            (true, true) => self.tilt_component_minutes + self.eccentricity_component_minutes,
            (true, false) => self.tilt_component_minutes,
            (false, true) => self.eccentricity_component_minutes,
            (false, false) => 0.0,
        };
        (declination, eot)
    }
}
