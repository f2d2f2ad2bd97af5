//! Ear-clipping triangulation of simple polygons (holes via seams).
//!
//! Purpose
//! - Decompose a simple ring (convex, concave, or carrying seams from
//!   `hole::cut_hole_in_shape`) into non-overlapping triangles that cover
//!   exactly its interior, as an indexed `Mesh` ready for upload.
//!
//! Model
//! - Working ring: flat `Vec` of active vertex indices. A corner is an ear if it
//!   turns with the ring's natural winding by more than the area tolerance and
//!   no other ring vertex (except copies of its corners) lies in the closed
//!   triangle. Clip, remove, resume at the same position.
//! - A pass without ears falls back to dropping one near-zero turn (collinear
//!   point or zero-width spike) without emitting a triangle; a pass with neither
//!   is `NoEarFound`.
//! - Triangles come out in the natural winding; one post-pass swaps corners when
//!   the caller asked for the other order. Vertices are passed through and then
//!   compacted to the ones actually referenced.
//!
//! Complexity: O(n²) ear tests of O(n) each; meant for tens to hundreds of vertices.
//!
//! Code cross-refs: `geom::{cross, in_triangle_closed, first_self_intersection}`, `Mesh`

use nalgebra::Vector2;
use tracing::{debug, trace};

use crate::error::GeometryError;
use crate::geom::{
    cross, first_self_intersection, in_triangle_closed, GeomCfg, Polygon, WindingOrder,
};
use crate::mesh::Mesh;

/// Triangulate with the default tolerances.
pub fn triangulate(polygon: &Polygon, order: WindingOrder) -> Result<Mesh, GeometryError> {
    triangulate_with_cfg(polygon, order, &GeomCfg::default())
}

/// Triangulate `polygon`; every output triangle has winding `order`.
pub fn triangulate_with_cfg(
    polygon: &Polygon,
    order: WindingOrder,
    cfg: &GeomCfg,
) -> Result<Mesh, GeometryError> {
    let pts = polygon.points();
    if pts.len() > u32::MAX as usize {
        return Err(GeometryError::invalid(format!(
            "{} vertices exceed the u32 index range",
            pts.len()
        )));
    }
    let eps = cfg.area_tolerance(pts);
    if cfg.check_simple {
        if let Some((i, j)) = first_self_intersection(pts, eps) {
            return Err(GeometryError::invalid(format!("edges {i} and {j} intersect")));
        }
    }
    let area = polygon.signed_area();
    if area.abs() <= eps {
        return Err(GeometryError::invalid("polygon has zero area"));
    }
    let natural = if area > 0.0 {
        WindingOrder::CounterClockwise
    } else {
        WindingOrder::Clockwise
    };
    debug!(vertices = pts.len(), ?natural, requested = ?order, "triangulate");

    let tris = clip_ears(pts, natural.sign(), eps)?;
    let mut mesh = compact(pts, &tris);
    if natural != order {
        mesh.flip_winding();
    }
    debug!(
        triangles = mesh.triangle_count(),
        vertices = mesh.vertices.len(),
        "triangulated"
    );
    Ok(mesh)
}

/// Core ear clipper. `s` is the natural winding sign, `eps` the area tolerance.
/// Returns triangles as input indices, in the natural winding.
fn clip_ears(pts: &[Vector2<f64>], s: f64, eps: f64) -> Result<Vec<[usize; 3]>, GeometryError> {
    let mut ring: Vec<usize> = (0..pts.len()).collect();
    let mut tris = Vec::with_capacity(pts.len().saturating_sub(2));
    let mut start = 0usize;

    'clip: while ring.len() > 3 {
        let n = ring.len();
        let mut degenerate = None;
        for step in 0..n {
            let i = (start + step) % n;
            let (a, b, c) = (ring[(i + n - 1) % n], ring[i], ring[(i + 1) % n]);
            let turn = cross(pts[a], pts[b], pts[c]) * s;
            if turn.abs() <= eps {
                degenerate.get_or_insert(i);
                continue;
            }
            if turn > 0.0 && is_ear(pts, &ring, [a, b, c], s, eps) {
                trace!(prev = a, ear = b, next = c, "clip");
                tris.push([a, b, c]);
                ring.remove(i);
                start = i % ring.len();
                continue 'clip;
            }
        }
        match degenerate {
            Some(i) => {
                trace!(vertex = ring[i], "drop degenerate corner");
                ring.remove(i);
                start = i % ring.len();
            }
            None => return Err(GeometryError::NoEarFound { remaining: n }),
        }
    }

    let (a, b, c) = (ring[0], ring[1], ring[2]);
    if cross(pts[a], pts[b], pts[c]) * s > eps {
        tris.push([a, b, c]);
    } else {
        trace!(a, b, c, "skip degenerate final triangle");
    }
    Ok(tris)
}

/// No other ring vertex inside the closed triangle; copies of the corners
/// (seam duplicates) are ignored.
fn is_ear(
    pts: &[Vector2<f64>],
    ring: &[usize],
    [a, b, c]: [usize; 3],
    s: f64,
    eps: f64,
) -> bool {
    let (pa, pb, pc) = (pts[a], pts[b], pts[c]);
    ring.iter().all(|&k| {
        let p = pts[k];
        p == pa || p == pb || p == pc || !in_triangle_closed(pa, pb, pc, p, s, eps)
    })
}

/// Keep only referenced vertices (input order preserved) and remap indices.
fn compact(pts: &[Vector2<f64>], tris: &[[usize; 3]]) -> Mesh {
    let mut remap: Vec<Option<u32>> = vec![None; pts.len()];
    for &k in tris.iter().flatten() {
        remap[k] = Some(0);
    }
    let mut vertices = Vec::with_capacity(pts.len());
    for (k, slot) in remap.iter_mut().enumerate() {
        if slot.is_some() {
            *slot = Some(vertices.len() as u32);
            vertices.push(pts[k]);
        }
    }
    let indices = tris
        .iter()
        .flatten()
        .filter_map(|&k| remap[k])
        .collect();
    Mesh { vertices, indices }
}

#[cfg(test)]
mod tests;
