use tracing_subscriber::EnvFilter;

use analemma::{
    analemma_series_observed, component_filtered_series, equation_of_time_series,
    scale_for_points, summarize, AnalemmaConfig, Components, Location, ScalerConfig, TimeMode,
    TracingObserver,
};

/// `RUST_LOG` overrides the default `analemma=debug` filter.
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("analemma=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    init_logging();

    let london = Location::new(51.5, -0.13).expect("valid coordinates");
    let config = AnalemmaConfig::new(london, TimeMode::fixed(10, 0), 0.0).with_year(2024);

    let mut observer = TracingObserver::new();
    let points = analemma_series_observed(&config, &mut observer);
    // identical inputs: the observer stays quiet the second time
    let _ = analemma_series_observed(&config, &mut observer);

    println!("=== Analemma: London, 10:00 UTC, 2024 ===");
    println!("{:<12} {:>9} {:>9} {:>8}", "Date", "Alt (°)", "Az (°)", "Visible");
    for p in points.iter().step_by(30) {
        println!(
            "{:<12} {:>9.2} {:>9.2} {:>8}",
            p.date_iso, p.position.altitude_deg, p.position.azimuth_deg, p.visible
        );
    }

    let summary = summarize(&points);
    println!();
    println!("Visible days: {}/{}", summary.visible_days, summary.points);
    if let (Some(alt), Some(az)) = (summary.altitude_deg, summary.azimuth_deg) {
        println!("Altitude range: {:.2}° .. {:.2}°", alt.min, alt.max);
        println!("Azimuth range:  {:.2}° .. {:.2}°", az.min, az.max);
    }

    if let Some((e, u)) = scale_for_points(&points, &ScalerConfig::new(800.0, 600.0)) {
        println!("Plot domains: E [{:.4}, {:.4}]  U [{:.4}, {:.4}]", e.min, e.max, u.min, u.max);
    }

    let eot = equation_of_time_series(2024);
    let by_eot = |a: &&analemma::EotPoint, b: &&analemma::EotPoint| {
        a.eot_minutes.total_cmp(&b.eot_minutes)
    };
    if let (Some(lo), Some(hi)) = (eot.iter().min_by(by_eot), eot.iter().max_by(by_eot)) {
        println!();
        println!("=== Equation of Time, 2024 ===");
        println!("Minimum: {:+.2} min on {}", lo.eot_minutes, lo.date_iso);
        println!("Maximum: {:+.2} min on {}", hi.eot_minutes, hi.date_iso);
    }

    println!();
    println!("=== Component contributions (altitude span) ===");
    for (label, components) in [
        ("tilt only", Components::TILT_ONLY),
        ("eccentricity only", Components::ECCENTRICITY_ONLY),
        ("neither", Components::NONE),
    ] {
        let s = summarize(&component_filtered_series(&config, components));
        let span = s.altitude_deg.map_or(0.0, |d| d.span());
        println!("{:<18} {:>7.2}°", label, span);
    }
}
