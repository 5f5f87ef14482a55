//! Optional diagnostic sink for generated series.
//!
//! An observer is handed to the `*_observed` series generators and receives a
//! [`SeriesSummary`] per distinct input combination. It never influences the
//! computed points.

use std::collections::HashSet;

use tracing::debug;

use crate::types::{AnalemmaConfig, Components, NoonModel, SeriesSummary, TimeMode};

/// Identity of one series computation, used for de-duplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeriesKey {
    latitude_bits: u64,
    longitude_bits: u64,
    tz_offset_bits: u64,
    pub time_mode: TimeMode,
    pub noon: NoonModel,
    pub year: i32,
    pub components: Components,
}

impl SeriesKey {
    pub fn new(config: &AnalemmaConfig, year: i32, components: Components) -> Self {
        Self {
            latitude_bits: config.location.latitude.to_bits(),
            longitude_bits: config.location.longitude.to_bits(),
            tz_offset_bits: config.tz_offset_hours.to_bits(),
            time_mode: config.time_mode,
            noon: config.noon,
            year,
            components,
        }
    }

    pub fn latitude(&self) -> f64 {
        f64::from_bits(self.latitude_bits)
    }

    pub fn longitude(&self) -> f64 {
        f64::from_bits(self.longitude_bits)
    }

    pub fn tz_offset_hours(&self) -> f64 {
        f64::from_bits(self.tz_offset_bits)
    }
}

pub trait SeriesObserver {
    /// Whether a summary for `key` should be computed at all.
    fn wants(&self, _key: &SeriesKey) -> bool {
        true
    }

    fn observe(&mut self, key: &SeriesKey, summary: &SeriesSummary);
}

/// Observer that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SeriesObserver for NoopObserver {
    fn wants(&self, _key: &SeriesKey) -> bool {
        false
    }

    fn observe(&mut self, _key: &SeriesKey, _summary: &SeriesSummary) {}
}

/// Emits one `debug!` event per distinct [`SeriesKey`] for as long as it lives.
#[derive(Debug, Clone)]
pub struct TracingObserver {
    enabled: bool,
    seen: HashSet<SeriesKey>,
}

impl Default for TracingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl TracingObserver {
    pub fn new() -> Self {
        Self {
            enabled: true,
            seen: HashSet::new(),
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            seen: HashSet::new(),
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Number of distinct keys already emitted.
    pub fn emitted(&self) -> usize {
        self.seen.len()
    }

    /// Forgets emitted keys so they are reported again.
    pub fn reset(&mut self) {
        self.seen.clear();
    }
}

impl SeriesObserver for TracingObserver {
    fn wants(&self, key: &SeriesKey) -> bool {
        self.enabled && !self.seen.contains(key)
    }

    fn observe(&mut self, key: &SeriesKey, summary: &SeriesSummary) {
        if !self.enabled || !self.seen.insert(*key) {
            return;
        }
        let (alt_min, alt_max) = summary
            .altitude_deg
            .map_or((f64::NAN, f64::NAN), |d| (d.min, d.max));
        let (az_min, az_max) = summary
            .azimuth_deg
            .map_or((f64::NAN, f64::NAN), |d| (d.min, d.max));
        debug!(
            latitude = key.latitude(),
            longitude = key.longitude(),
            tz_offset_hours = key.tz_offset_hours(),
            time_mode = ?key.time_mode,
            noon = ?key.noon,
            year = key.year,
            tilt = key.components.tilt,
            eccentricity = key.components.eccentricity,
            points = summary.points,
            visible_days = summary.visible_days,
            alt_min,
            alt_max,
            az_min,
            az_max,
            max_step = summary.max_step,
            "analemma series summary"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> SeriesSummary {
        SeriesSummary {
            points: 365,
            visible_days: 200,
            altitude_deg: None,
            azimuth_deg: None,
            e_range: None,
            u_range: None,
            max_step: 0.01,
        }
    }

    #[test]
    fn tracing_observer_deduplicates_keys() {
        let config = AnalemmaConfig::default();
        let key = SeriesKey::new(&config, 2024, Components::ALL);
        let mut observer = TracingObserver::new();
        assert!(observer.wants(&key));
        observer.observe(&key, &summary());
        assert!(!observer.wants(&key));
        observer.observe(&key, &summary());
        assert_eq!(observer.emitted(), 1);

        let other = SeriesKey::new(&config, 2025, Components::ALL);
        assert!(observer.wants(&other));
    }

    #[test]
    fn tracing_observer_reset_forgets_keys() {
        let key = SeriesKey::new(&AnalemmaConfig::default(), 2024, Components::NONE);
        let mut observer = TracingObserver::new();
        observer.observe(&key, &summary());
        observer.reset();
        assert_eq!(observer.emitted(), 0);
        assert!(observer.wants(&key));
    }

    #[test]
    fn disabled_observer_records_nothing() {
        let key = SeriesKey::new(&AnalemmaConfig::default(), 2024, Components::ALL);
        let mut observer = TracingObserver::disabled();
        assert!(!observer.wants(&key));
        observer.observe(&key, &summary());
        assert_eq!(observer.emitted(), 0);
    }

    #[test]
    fn key_distinguishes_components() {
        let config = AnalemmaConfig::default();
        assert_ne!(
            SeriesKey::new(&config, 2024, Components::TILT_ONLY),
            SeriesKey::new(&config, 2024, Components::ECCENTRICITY_ONLY)
        );
    }

    #[test]
    fn key_round_trips_coordinates() {
        let config = AnalemmaConfig::default().with_tz_offset_hours(5.5);
        let key = SeriesKey::new(&config, 2024, Components::ALL);
        assert_eq!(key.latitude(), config.location.latitude);
        assert_eq!(key.longitude(), config.location.longitude);
        assert_eq!(key.tz_offset_hours(), 5.5);
    }
}
