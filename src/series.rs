use tracing::trace;

use crate::angles::{deg_to_rad, resolve_hour_angle};
use crate::calendar::{date_from_day_of_year, days_in_year};
use crate::diagnostics::{NoopObserver, SeriesKey, SeriesObserver};
use crate::ephemeris;
use crate::horizontal::horizontal_position;
use crate::types::{
    AnalemmaConfig, AnalemmaPoint, Components, Domain, EotPoint, EphemerisSample, NoonModel,
    SeriesSummary, TimeMode,
};

fn generate_days<E, F>(year: i32, entry_fn: F) -> Vec<E>
where
    F: Fn(u32, &EphemerisSample) -> E,
{
    let total = days_in_year(year);
    (1..=total)
        .map(|n| entry_fn(n, &ephemeris::sample(n, total)))
        .collect()
}

/// Hour angle in radians for one day under the configured clock rule.
pub fn clock_hour_angle(config: &AnalemmaConfig, eot_minutes: f64) -> f64 {
    match (config.time_mode, config.noon) {
        (TimeMode::SolarNoon, NoonModel::Meridian) => 0.0,
        (mode, _) => deg_to_rad(resolve_hour_angle(
            mode.clock_minutes() as f64,
            eot_minutes,
            config.location.longitude,
            config.tz_offset_hours,
        )),
    }
}

/// One analemma point for day `n` of `year`.
pub fn analemma_point(
    config: &AnalemmaConfig,
    components: Components,
    year: i32,
    n: u32,
    sample: &EphemerisSample,
) -> AnalemmaPoint {
    let (declination, eot) = sample.filtered(components);
    let hour_angle = clock_hour_angle(config, eot);
    let position = horizontal_position(
        deg_to_rad(config.location.latitude),
        declination,
        hour_angle,
    );
    AnalemmaPoint {
        date_iso: date_from_day_of_year(year, n),
        visible: position.is_visible(),
        position,
    }
}

/// Solar position at the configured clock rule for every day of the year.
pub fn analemma_series(config: &AnalemmaConfig) -> Vec<AnalemmaPoint> {
    component_filtered_series_observed(config, Components::ALL, &mut NoopObserver)
}

pub fn analemma_series_observed(
    config: &AnalemmaConfig,
    observer: &mut dyn SeriesObserver,
) -> Vec<AnalemmaPoint> {
    component_filtered_series_observed(config, Components::ALL, observer)
}

/// Analemma with the tilt and/or eccentricity effect switched off.
///
/// With [`Components::NONE`] every point is identical; that is a valid,
/// empty-looking curve rather than an error.
pub fn component_filtered_series(
    config: &AnalemmaConfig,
    components: Components,
) -> Vec<AnalemmaPoint> {
    component_filtered_series_observed(config, components, &mut NoopObserver)
}

pub fn component_filtered_series_observed(
    config: &AnalemmaConfig,
    components: Components,
    observer: &mut dyn SeriesObserver,
) -> Vec<AnalemmaPoint> {
    let year = config.resolved_year();
    let points = generate_days(year, |n, sample| {
        analemma_point(config, components, year, n, sample)
    });
    trace!(
        year,
        days = points.len(),
        tilt = components.tilt,
        eccentricity = components.eccentricity,
        "analemma series generated"
    );

    let key = SeriesKey::new(config, year, components);
    if observer.wants(&key) {
        observer.observe(&key, &summarize(&points));
    }
    points
}

/// Daily equation of time and its decomposition.
pub fn equation_of_time_series(year: i32) -> Vec<EotPoint> {
    let points = generate_days(year, |n, sample| EotPoint {
        date_iso: date_from_day_of_year(year, n),
        day_of_year: n,
        eot_minutes: sample.eot_minutes,
        tilt_component_minutes: sample.tilt_component_minutes,
        eccentricity_component_minutes: sample.eccentricity_component_minutes,
    });
    trace!(year, days = points.len(), "equation of time series generated");
    points
}

fn extend(range: Option<Domain>, value: f64) -> Option<Domain> {
    Some(match range {
        None => Domain::new(value, value),
        Some(d) => Domain::new(d.min.min(value), d.max.max(value)),
    })
}

/// Ranges of the visible points, visible-day count and largest day-to-day step.
///
/// Altitude/azimuth ranges cover visible points only; E/U ranges cover all.
pub fn summarize(points: &[AnalemmaPoint]) -> SeriesSummary {
    let mut summary = SeriesSummary {
        points: points.len(),
        visible_days: 0,
        altitude_deg: None,
        azimuth_deg: None,
        e_range: None,
        u_range: None,
        max_step: 0.0,
    };
    for p in points {
        summary.e_range = extend(summary.e_range, p.position.e);
        summary.u_range = extend(summary.u_range, p.position.u);
        if p.visible {
            summary.visible_days += 1;
            summary.altitude_deg = extend(summary.altitude_deg, p.position.altitude_deg);
            summary.azimuth_deg = extend(summary.azimuth_deg, p.position.azimuth_deg);
        }
    }
    summary.max_step = points
        .windows(2)
        .map(|w| {
            let (a, b) = (&w[0].position, &w[1].position);
            ((b.e - a.e).powi(2) + (b.n - a.n).powi(2) + (b.u - a.u).powi(2)).sqrt()
        })
        .fold(0.0, f64::max);
    summary
}
