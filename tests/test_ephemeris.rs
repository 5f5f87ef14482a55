use std::f64::consts::PI;

use analemma::ephemeris::*;
use analemma::Components;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

// ── Orbital angle ──

#[test]
fn test_orbital_angle_centres_on_noon() {
    assert_approx!(orbital_angle(1, 365), PI / 365.0, 1e-15);
    assert_approx!(orbital_angle(1, 366), PI / 366.0, 1e-15);
    assert_approx!(orbital_angle(365, 365), 2.0 * PI - PI / 365.0, 1e-12);
}

// ── Declination ──

#[test]
fn test_declination_literal_coefficients() {
    assert_approx!(declination(0.0), 0.006918 - 0.399912 - 0.006758 - 0.002697, 1e-12);
    let g = PI / 2.0;
    let expected = 0.006918 + 0.070257 + 0.006758 - 0.00148;
    assert_approx!(declination(g), expected, 1e-12);
}

#[test]
fn test_declination_solstices() {
    let dec_jan1 = sample(1, 366).declination;
    assert_approx!(dec_jan1, -0.40178, 1e-4);
    let summer = sample(173, 366).declination;
    assert_approx!(summer, 0.40938, 1e-4);
    let winter = sample(357, 366).declination;
    assert_approx!(winter, -0.40886, 1e-4);
}

#[test]
fn test_declination_bounded() {
    for n in 1..=366 {
        let d = sample(n, 366).declination;
        assert!(d.abs() < 0.41, "Day {}: {}", n, d);
    }
}

// ── Equation of time ──

#[test]
fn test_eot_matches_scaled_series() {
    for n in [1, 45, 120, 200, 306] {
        let g = orbital_angle(n, 365);
        let direct = 229.18
            * (0.000075 + 0.001868 * g.cos() - 0.032077 * g.sin()
                - 0.014615 * (2.0 * g).cos()
                - 0.040849 * (2.0 * g).sin());
        assert_approx!(equation_of_time(g), direct, 1e-10);
    }
}

#[test]
fn test_eot_extremes_2024() {
    let eots: Vec<f64> = (1..=366).map(|n| sample(n, 366).eot_minutes).collect();
    let (min_day, min) = eots
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.total_cmp(b.1))
        .unwrap();
    let (max_day, max) = eots
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .unwrap();
    assert_approx!(*min, -14.256, 0.01);
    assert_eq!(min_day + 1, 45);
    assert_approx!(*max, 16.381, 0.01);
    assert_eq!(max_day + 1, 306);
}

#[test]
fn test_components_day_one() {
    let s = sample(1, 366);
    assert_approx!(s.tilt_component_minutes, -0.2238, 1e-3);
    assert_approx!(s.eccentricity_component_minutes, -2.9037, 1e-3);
    assert_approx!(s.eot_minutes, -3.1275, 1e-3);
}

#[test]
fn test_components_sum_exactly() {
    for n in 1..=365 {
        let s = sample(n, 365);
        assert_eq!(
            s.eot_minutes,
            s.tilt_component_minutes + s.eccentricity_component_minutes,
            "Day {}",
            n
        );
    }
}

// ── Filtering ──

#[test]
fn test_filtered_all_is_unchanged() {
    let s = sample(100, 365);
    assert_eq!(s.filtered(Components::ALL), (s.declination, s.eot_minutes));
}

#[test]
fn test_filtered_variants() {
    let s = sample(100, 365);
    assert_eq!(s.filtered(Components::TILT_ONLY), (s.declination, s.tilt_component_minutes));
    assert_eq!(
        s.filtered(Components::ECCENTRICITY_ONLY),
        (0.0, s.eccentricity_component_minutes)
    );
    assert_eq!(s.filtered(Components::NONE), (0.0, 0.0));
}
