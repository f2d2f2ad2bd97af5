//! Hole cutting: splice a hole ring into its source ring through a bridge seam.
//!
//! Purpose
//! - Turn "polygon with interior holes" into one weakly simple ring that the
//!   ear clipper can consume unchanged. The seam is a zero-width corridor made
//!   of the bridge edge traversed once in each direction.
//!
//! Model
//! - The hole is traversed opposite to the source, so its interior ends up on
//!   the outside of the merged ring.
//! - Bridge: the hole vertex `h` with the largest x (first on ties) connects to
//!   the nearest source vertex strictly right of `h` that can see it (ring
//!   order on ties). A horizontal ray from `h` hits some source edge, and the
//!   triangle spanned by `h`, the hit point and that edge's right end always
//!   holds a visible vertex, so a candidate exists for valid input. Seam
//!   duplicates from earlier cuts share coordinates; the wedge test picks the
//!   copy whose corner actually faces the hole.
//! - Cut order: every point of a seam other than `h` lies at `x > h.x`. Holes
//!   cut later with a max x no larger than `h.x` can never meet it, so several
//!   holes must go in by decreasing max x. `cut_holes_in_shape` does that;
//!   one-at-a-time callers have to keep the same order.
//! - Output ring: `source[..=s]`, hole from `h` around, `h`, `s`, `source[s+1..]`,
//!   so `len = len(source) + len(hole) + 2`.
//!
//! Code cross-refs: `geom::{segments_intersect, locally_inside, point_in_polygon}`

use nalgebra::Vector2;
use tracing::debug;

use crate::error::GeometryError;
use crate::geom::{
    locally_inside, point_in_polygon, segments_intersect, GeomCfg, Polygon, WindingOrder,
};

/// Cut every hole out of `source` with the default tolerances.
pub fn cut_holes_in_shape(source: &Polygon, holes: &[Polygon]) -> Result<Polygon, GeometryError> {
    cut_holes_in_shape_with_cfg(source, holes, &GeomCfg::default())
}

/// Cut `holes` out of `source` in decreasing max-x order (input order on ties).
///
/// Errors name the offending hole by its index in `holes`.
pub fn cut_holes_in_shape_with_cfg(
    source: &Polygon,
    holes: &[Polygon],
    cfg: &GeomCfg,
) -> Result<Polygon, GeometryError> {
    let mut order: Vec<usize> = (0..holes.len()).collect();
    order.sort_by(|&a, &b| max_x(holes[b].points()).total_cmp(&max_x(holes[a].points())));
    debug!(holes = holes.len(), ?order, "cut holes");
    order.into_iter().try_fold(source.clone(), |shape, k| {
        cut_hole_in_shape_with_cfg(&shape, &holes[k], cfg).map_err(|e| e.for_hole(k))
    })
}

/// Cut `hole` out of `source` with the default tolerances.
pub fn cut_hole_in_shape(source: &Polygon, hole: &Polygon) -> Result<Polygon, GeometryError> {
    cut_hole_in_shape_with_cfg(source, hole, &GeomCfg::default())
}

/// Cut `hole` out of `source`; returns a new merged ring, inputs are not modified.
///
/// Pre: `hole` lies strictly inside `source` and does not touch its boundary or
/// any previously cut hole. Violations that are noticed surface as
/// `HoleNotEnclosed`; unnoticed ones give an invalid ring, not a panic.
pub fn cut_hole_in_shape_with_cfg(
    source: &Polygon,
    hole: &Polygon,
    cfg: &GeomCfg,
) -> Result<Polygon, GeometryError> {
    let src = source.points();
    let eps = cfg
        .area_tolerance(src)
        .max(cfg.area_tolerance(hole.points()));

    let s_area = source.signed_area();
    if s_area.abs() <= eps {
        return Err(GeometryError::invalid("source polygon has zero area"));
    }
    let h_area = hole.signed_area();
    if h_area.abs() <= eps {
        return Err(GeometryError::invalid("hole polygon has zero area"));
    }
    let s_order = if s_area > 0.0 {
        WindingOrder::CounterClockwise
    } else {
        WindingOrder::Clockwise
    };
    let sign = s_order.sign();
    let hole = hole.with_winding(s_order.reversed());
    let hp = hole.points();

    check_enclosed(src, hp, eps)?;

    let hi = extremal_vertex(hp);
    let h = hp[hi];
    let h_prev = hp[(hi + hp.len() - 1) % hp.len()];
    let h_next = hp[(hi + 1) % hp.len()];

    let mut candidates: Vec<usize> = (0..src.len()).filter(|&k| src[k].x > h.x).collect();
    candidates.sort_by(|&a, &b| {
        let da = (src[a] - h).norm_squared();
        let db = (src[b] - h).norm_squared();
        da.total_cmp(&db)
    });

    let si = candidates
        .into_iter()
        .find(|&k| {
            let s = src[k];
            let prev = src[(k + src.len() - 1) % src.len()];
            let next = src[(k + 1) % src.len()];
            locally_inside(prev, s, next, h, sign, eps)
                && locally_inside(h_prev, h, h_next, s, sign, eps)
                && !blocked(src, s, h, eps)
                && !blocked(hp, h, s, eps)
        })
        .ok_or_else(|| {
            GeometryError::not_enclosed("no source vertex right of the hole can see it")
        })?;

    debug!(
        source_vertex = si,
        hole_vertex = hi,
        source_len = src.len(),
        hole_len = hp.len(),
        "bridge"
    );

    let mut out = Vec::with_capacity(src.len() + hp.len() + 2);
    out.extend_from_slice(&src[..=si]);
    out.extend(hp[hi..].iter().chain(hp[..hi].iter()).copied());
    out.push(h);
    out.push(src[si]);
    out.extend_from_slice(&src[si + 1..]);
    Ok(Polygon::from_vec_unchecked(out))
}

/// Largest x, first occurrence on ties.
fn extremal_vertex(pts: &[Vector2<f64>]) -> usize {
    let mut best = 0;
    for (k, p) in pts.iter().enumerate().skip(1) {
        if p.x > pts[best].x {
            best = k;
        }
    }
    best
}

fn max_x(pts: &[Vector2<f64>]) -> f64 {
    pts.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max)
}

/// Bridge `from → to` hits an edge of `ring` that does not end at `from`.
fn blocked(ring: &[Vector2<f64>], from: Vector2<f64>, to: Vector2<f64>, eps: f64) -> bool {
    (0..ring.len()).any(|k| {
        let a = ring[k];
        let b = ring[(k + 1) % ring.len()];
        a != from && b != from && segments_intersect(from, to, a, b, eps)
    })
}

fn check_enclosed(
    src: &[Vector2<f64>],
    hole: &[Vector2<f64>],
    eps: f64,
) -> Result<(), GeometryError> {
    if let Some(k) = hole.iter().position(|p| !point_in_polygon(src, *p)) {
        return Err(GeometryError::not_enclosed(format!(
            "hole vertex {k} lies outside the source"
        )));
    }
    for i in 0..hole.len() {
        let (a, b) = (hole[i], hole[(i + 1) % hole.len()]);
        for j in 0..src.len() {
            let (c, d) = (src[j], src[(j + 1) % src.len()]);
            if segments_intersect(a, b, c, d, eps) {
                return Err(GeometryError::not_enclosed(format!(
                    "hole edge {i} crosses source edge {j}"
                )));
            }
        }
    }
    Ok(())
}
