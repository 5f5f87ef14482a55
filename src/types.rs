use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::error::AnalemmaError;

/// Observer position on the Earth, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "latitudeDeg")]
    pub latitude: f64,
    #[serde(rename = "longitudeDeg")]
    pub longitude: f64,
}

impl Location {
    /// Builds a location, rejecting coordinates outside [-90, 90] x [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, AnalemmaError> {
        if !latitude.is_finite() {
            return Err(AnalemmaError::NonFiniteInput { input: "latitude" });
        }
        if !longitude.is_finite() {
            return Err(AnalemmaError::NonFiniteInput { input: "longitude" });
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(AnalemmaError::LatitudeOutOfRange { latitude });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(AnalemmaError::LongitudeOutOfRange { longitude });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl Default for Location {
    fn default() -> Self {
        Self {
            latitude: 39.8,
            longitude: -89.6,
        }
    }
}

/// Daily clock-time rule sampled by the analemma series.
///
/// Hour and minute of the fixed variant are clamped into 0..=23 / 0..=59 when
/// used; out-of-range values are corrected rather than rejected. Use
/// [`TimeMode::fixed_strict`] to validate at construction instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TimeMode {
    /// Civil clock time held constant every day.
    FixedLocalClockTime { hour: i32, minute: i32 },
    /// Local solar noon; see [`NoonModel`] for how it is resolved.
    SolarNoon,
}

impl TimeMode {
    pub fn fixed(hour: i32, minute: i32) -> Self {
        TimeMode::FixedLocalClockTime { hour, minute }
    }

    pub fn fixed_strict(hour: i32, minute: i32) -> Result<Self, AnalemmaError> {
        if (0..=23).contains(&hour) && (0..=59).contains(&minute) {
            Ok(TimeMode::FixedLocalClockTime { hour, minute })
        } else {
            Err(AnalemmaError::ClockTimeOutOfRange { hour, minute })
        }
    }

    /// Clock minutes-of-day after clamping; solar noon maps to 12:00.
    pub fn clock_minutes(&self) -> i32 {
        match *self {
            TimeMode::FixedLocalClockTime { hour, minute } => {
                hour.clamp(0, 23) * 60 + minute.clamp(0, 59)
            }
            TimeMode::SolarNoon => 720,
        }
    }
}

impl Default for TimeMode {
    fn default() -> Self {
        TimeMode::FixedLocalClockTime {
            hour: 12,
            minute: 0,
        }
    }
}

/// How [`TimeMode::SolarNoon`] is resolved into an hour angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NoonModel {
    /// 12:00 clock time through the full model, equation of time included.
    #[default]
    ClockNoon,
    /// Idealized noon: the hour angle is exactly zero every day.
    Meridian,
}

/// Which equation-of-time contributions feed the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Components {
    /// Axial tilt: declination and the tilt share of the equation of time.
    pub tilt: bool,
    /// Orbital eccentricity share of the equation of time.
    pub eccentricity: bool,
}

impl Components {
    pub const ALL: Components = Components {
        tilt: true,
        eccentricity: true,
    };
    pub const NONE: Components = Components {
        tilt: false,
        eccentricity: false,
    };
    pub const TILT_ONLY: Components = Components {
        tilt: true,
        eccentricity: false,
    };
    pub const ECCENTRICITY_ONLY: Components = Components {
        tilt: false,
        eccentricity: true,
    };

    pub fn new(tilt: bool, eccentricity: bool) -> Self {
        Self { tilt, eccentricity }
    }

    /// True when neither effect is included and the curve collapses to one point.
    pub fn is_degenerate(&self) -> bool {
        !self.tilt && !self.eccentricity
    }
}

impl Default for Components {
    fn default() -> Self {
        Components::ALL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EphemerisSample {
    /// Mean orbital angle, radians.
    pub orbital_angle: f64,
    /// Solar declination, radians.
    pub declination: f64,
    /// Always `tilt_component_minutes + eccentricity_component_minutes`.
    pub eot_minutes: f64,
    pub tilt_component_minutes: f64,
    pub eccentricity_component_minutes: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HorizontalPosition {
    #[serde(rename = "E")]
    pub e: f64,
    #[serde(rename = "N")]
    pub n: f64,
    #[serde(rename = "U")]
    pub u: f64,
    pub altitude_deg: f64,
    pub azimuth_deg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalemmaPoint {
    #[serde(rename = "dateISO")]
    pub date_iso: String,
    #[serde(flatten)]
    pub position: HorizontalPosition,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EotPoint {
    #[serde(rename = "dateISO")]
    pub date_iso: String,
    pub day_of_year: u32,
    pub eot_minutes: f64,
    pub tilt_component_minutes: f64,
    pub eccentricity_component_minutes: f64,
}

/// Closed axis interval used for one plotted axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn mid(&self) -> f64 {
        0.5 * (self.min + self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Inputs of one analemma computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalemmaConfig {
    pub location: Location,
    pub time_mode: TimeMode,
    /// Signed offset from UTC in hours, e.g. `7.0` for UTC+7.
    pub tz_offset_hours: f64,
    /// Calendar year; `None` means the current local year.
    pub year: Option<i32>,
    pub noon: NoonModel,
}

impl Default for AnalemmaConfig {
    fn default() -> Self {
        Self {
            location: Location::default(),
            time_mode: TimeMode::default(),
            tz_offset_hours: -6.0,
            year: None,
            noon: NoonModel::ClockNoon,
        }
    }
}

impl AnalemmaConfig {
    pub fn new(location: Location, time_mode: TimeMode, tz_offset_hours: f64) -> Self {
        Self {
            location,
            time_mode,
            tz_offset_hours,
            ..Self::default()
        }
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    pub fn with_time_mode(mut self, time_mode: TimeMode) -> Self {
        self.time_mode = time_mode;
        self
    }

    pub fn with_tz_offset_hours(mut self, tz_offset_hours: f64) -> Self {
        self.tz_offset_hours = tz_offset_hours;
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_noon(mut self, noon: NoonModel) -> Self {
        self.noon = noon;
        self
    }

    /// The configured year, or the current local calendar year.
    pub fn resolved_year(&self) -> i32 {
        self.year.unwrap_or_else(|| Local::now().year())
    }

    /// Checks the location and offset; clock values are clamped, not validated.
    pub fn validate(&self) -> Result<(), AnalemmaError> {
        Location::new(self.location.latitude, self.location.longitude)?;
        if !self.tz_offset_hours.is_finite() {
            return Err(AnalemmaError::NonFiniteInput {
                input: "tz_offset_hours",
            });
        }
        Ok(())
    }
}

/// Plot geometry and padding rules for the aspect-locked scaler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScalerConfig {
    pub width_px: f64,
    pub height_px: f64,
    /// Padding as a fraction of each axis span.
    pub pad_fraction: f64,
    pub min_pad_e: f64,
    pub min_pad_u: f64,
    /// Floor applied to a zero-width input range.
    pub min_span: f64,
}

impl Default for ScalerConfig {
    fn default() -> Self {
        Self {
            width_px: 800.0,
            height_px: 600.0,
            pad_fraction: 0.05,
            min_pad_e: 0.0,
            min_pad_u: 0.0,
            min_span: 1e-6,
        }
    }
}

impl ScalerConfig {
    pub fn new(width_px: f64, height_px: f64) -> Self {
        Self {
            width_px,
            height_px,
            ..Self::default()
        }
    }

    pub fn with_pad_fraction(mut self, pad_fraction: f64) -> Self {
        self.pad_fraction = pad_fraction;
        self
    }

    pub fn with_min_pads(mut self, min_pad_e: f64, min_pad_u: f64) -> Self {
        self.min_pad_e = min_pad_e;
        self.min_pad_u = min_pad_u;
        self
    }

    pub fn with_min_span(mut self, min_span: f64) -> Self {
        self.min_span = min_span;
        self
    }
}

/// Aggregate view of one generated analemma series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSummary {
    pub points: usize,
    pub visible_days: usize,
    pub altitude_deg: Option<Domain>,
    pub azimuth_deg: Option<Domain>,
    pub e_range: Option<Domain>,
    pub u_range: Option<Domain>,
    /// Largest Euclidean ENU distance between consecutive days.
    pub max_step: f64,
}
