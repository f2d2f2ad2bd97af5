//! Basic 2D types and tolerances shared by hole cutting and ear clipping.
//!
//! - `GeomCfg`: centralizes the area tolerance and the optional simplicity check.
//! - `WindingOrder`: clockwise / counter‑clockwise, derived from signed area.
//! - `Polygon`: owned vertex ring with validated invariants.
//!
//! Code cross-refs: `util::{signed_area, bbox_extent}`, `crate::hole`, `crate::triangulate`

use nalgebra::Vector2;

use super::util::{bbox_extent, signed_area};
use crate::error::GeometryError;

/// Geometry configuration (tolerances).
///
/// Orientation predicates compare a 2D cross product against
/// `area_tolerance(points)`, which scales `eps_rel` by the squared extent of the
/// input so that the same config works for unit-sized and world-sized shapes.
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    pub eps_rel: f64,
    pub eps_abs: f64,
    /// Reject self-intersecting rings in `triangulate` before clipping (O(n²)).
    pub check_simple: bool,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_rel: 64.0 * f64::EPSILON,
            eps_abs: 0.0,
            check_simple: false,
        }
    }
}

impl GeomCfg {
    /// Area tolerance for cross products over `points`.
    #[inline]
    pub fn area_tolerance(&self, points: &[Vector2<f64>]) -> f64 {
        let extent = bbox_extent(points);
        (self.eps_rel * extent * extent).max(self.eps_abs)
    }
}

/// Orientation of a ring or triangle (y axis pointing up).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WindingOrder {
    /// Negative signed area.
    Clockwise,
    /// Positive signed area.
    CounterClockwise,
}

impl WindingOrder {
    /// `+1.0` for counter-clockwise, `-1.0` for clockwise.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            WindingOrder::Clockwise => -1.0,
            WindingOrder::CounterClockwise => 1.0,
        }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            WindingOrder::Clockwise => WindingOrder::CounterClockwise,
            WindingOrder::CounterClockwise => WindingOrder::Clockwise,
        }
    }

    /// Winding of a signed area, or `None` if the area is exactly zero (or NaN).
    #[inline]
    pub fn of_area(area: f64) -> Option<Self> {
        if area > 0.0 {
            Some(WindingOrder::CounterClockwise)
        } else if area < 0.0 {
            Some(WindingOrder::Clockwise)
        } else {
            None
        }
    }
}

/// Closed polygon ring; the last vertex connects back to the first.
///
/// Invariants:
/// - At least 3 vertices, all coordinates finite.
/// - No explicit closing duplicate (stripped by `new`).
/// - Winding is not stored; see `winding_order`.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pts: Vec<Vector2<f64>>,
}

impl Polygon {
    pub fn new(mut pts: Vec<Vector2<f64>>) -> Result<Self, GeometryError> {
        if pts.len() > 1 && pts.first() == pts.last() {
            pts.pop();
        }
        if pts.len() < 3 {
            return Err(GeometryError::invalid(format!(
                "need at least 3 vertices, got {}",
                pts.len()
            )));
        }
        if let Some(k) = pts.iter().position(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(GeometryError::invalid(format!(
                "vertex {k} has a non-finite coordinate"
            )));
        }
        Ok(Self { pts })
    }

    /// Build from `(x, y)` pairs.
    pub fn from_xy(coords: &[(f64, f64)]) -> Result<Self, GeometryError> {
        Self::new(coords.iter().map(|&(x, y)| Vector2::new(x, y)).collect())
    }

    /// Skips validation; callers guarantee the invariants.
    pub(crate) fn from_vec_unchecked(pts: Vec<Vector2<f64>>) -> Self {
        debug_assert!(pts.len() >= 3);
        Self { pts }
    }

    #[inline]
    pub fn points(&self) -> &[Vector2<f64>] {
        &self.pts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }

    /// Always false for a constructed polygon; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    #[inline]
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.pts)
    }

    #[inline]
    pub fn winding_order(&self) -> Option<WindingOrder> {
        WindingOrder::of_area(self.signed_area())
    }

    /// Same ring traversed the other way, starting from the same vertex.
    pub fn reversed(&self) -> Polygon {
        let mut pts = self.pts.clone();
        pts[1..].reverse();
        Polygon { pts }
    }

    /// Returns the ring in the requested order, reversing only if needed.
    /// Zero-area rings are returned unchanged.
    pub fn with_winding(&self, order: WindingOrder) -> Polygon {
        match self.winding_order() {
            Some(w) if w != order => self.reversed(),
            _ => self.clone(),
        }
    }

    /// Copy translated by `t`.
    pub fn translated(&self, t: Vector2<f64>) -> Polygon {
        Polygon {
            pts: self.pts.iter().map(|p| p + t).collect(),
        }
    }
}
