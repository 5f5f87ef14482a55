pub mod angles;
pub mod calendar;
pub mod diagnostics;
pub mod ephemeris;
pub mod error;
pub mod horizontal;
pub mod scaler;
pub mod series;
pub mod types;

pub use angles::{
    deg_to_rad, hour_angle, normalize_angle, rad_to_deg, resolve_hour_angle, standard_meridian,
    time_offset_minutes, true_solar_time, DEGREES_PER_HOUR, MINUTES_PER_DAY, MINUTES_PER_DEGREE,
};

pub use calendar::{
    calendar_date, date_from_day_of_year, day_of_year, days_in_months, days_in_year, is_leap_year,
    month_day,
};

pub use diagnostics::{NoopObserver, SeriesKey, SeriesObserver, TracingObserver};

pub use ephemeris::{
    declination, eccentricity_component, equation_of_time, orbital_angle, tilt_component,
    EOT_SCALE_MINUTES,
};

pub use error::AnalemmaError;

pub use horizontal::{altitude_from_up, azimuth_from_en, enu_vector, horizontal_position};

pub use scaler::{aspect_locked_domains, padded_domain, scale_for_points, units_per_pixel};

pub use series::{
    analemma_point, analemma_series, analemma_series_observed, clock_hour_angle,
    component_filtered_series, component_filtered_series_observed, equation_of_time_series,
    summarize,
};

pub use types::{
    AnalemmaConfig, AnalemmaPoint, Components, Domain, EotPoint, EphemerisSample,
    HorizontalPosition, Location, NoonModel, ScalerConfig, SeriesSummary, TimeMode,
};
