//! Axis domains for an East-vs-Up plot drawn at equal scale on both axes.

use crate::types::{AnalemmaPoint, Domain, ScalerConfig};

/// Pixel extents below one pixel are treated as one pixel.
pub fn floor_pixels(px: f64) -> f64 {
    px.max(1.0)
}

pub fn units_per_pixel(domain: &Domain, px: f64) -> f64 {
    domain.span() / floor_pixels(px)
}

/// Range `[min, max]` widened to at least `min_span` and padded on both ends.
pub fn padded_domain(min: f64, max: f64, min_span: f64, pad_fraction: f64, min_pad: f64) -> Domain {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    // keep the span above a few ulps of the bounds so min < max survives rounding
    let min_span = min_span.max(4.0 * f64::EPSILON * lo.abs().max(hi.abs()).max(1.0));
    let span = min_span.max(hi - lo);
    let pad = min_pad.max(0.0).max(span * pad_fraction.max(0.0));
    if hi - lo >= span {
        Domain::new(lo - pad, hi + pad)
    } else {
        let mid = 0.5 * (lo + hi);
        Domain::new(mid - 0.5 * span - pad, mid + 0.5 * span + pad)
    }
}

fn expand_to(domain: Domain, span: f64) -> Domain {
    let mid = domain.mid();
    Domain::new(
        (mid - 0.5 * span).min(domain.min),
        (mid + 0.5 * span).max(domain.max),
    )
}

/// Padded E and U domains with equal units-per-pixel on both axes.
///
/// The axis whose padded span is short for the plot's aspect ratio is widened
/// symmetrically about its midpoint; the other axis is left as padded.
pub fn aspect_locked_domains(
    e_min: f64,
    e_max: f64,
    u_min: f64,
    u_max: f64,
    config: &ScalerConfig,
) -> (Domain, Domain) {
    let w = floor_pixels(config.width_px);
    let h = floor_pixels(config.height_px);
    let e = padded_domain(e_min, e_max, config.min_span, config.pad_fraction, config.min_pad_e);
    let u = padded_domain(u_min, u_max, config.min_span, config.pad_fraction, config.min_pad_u);

    // span each axis would need to match the other's scale
    let e_needed = u.span() * w / h;
    let u_needed = e.span() * h / w;

    if e.span() < e_needed {
        (expand_to(e, e_needed), u)
    } else if u.span() < u_needed {
        (e, expand_to(u, u_needed))
    } else {
        (e, u)
    }
}

/// Aspect-locked domains covering every point of a series, `None` when empty.
pub fn scale_for_points(points: &[AnalemmaPoint], config: &ScalerConfig) -> Option<(Domain, Domain)> {
    let first = points.first()?;
    let init = (
        first.position.e,
        first.position.e,
        first.position.u,
        first.position.u,
    );
    let (e_min, e_max, u_min, u_max) = points.iter().fold(init, |(e0, e1, u0, u1), p| {
        (
            e0.min(p.position.e),
            e1.max(p.position.e),
            u0.min(p.position.u),
            u1.max(p.position.u),
        )
    });
    Some(aspect_locked_domains(e_min, e_max, u_min, u_max, config))
}
