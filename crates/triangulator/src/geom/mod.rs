//! 2D polygon geometry shared by hole cutting and ear clipping.
//!
//! Purpose
//! - Provide the ring type (`Polygon`), winding conventions (`WindingOrder`),
//!   numeric tolerances (`GeomCfg`) and the small set of predicates
//!   (orientation, segment intersection, point-in-polygon) the algorithms use.
//! - Keep predicates eps-aware: every sign test compares against an area
//!   tolerance derived from `GeomCfg`, never against exact zero.
//!
//! Code cross-refs: `crate::hole`, `crate::triangulate`, `crate::mesh::Mesh`

pub mod rand;
mod types;
mod util;

pub(crate) use util::{
    first_self_intersection, in_triangle_closed, locally_inside, segments_intersect,
};
pub use types::{GeomCfg, Polygon, WindingOrder};
pub use util::{cross, point_in_polygon, signed_area};

use nalgebra::Vector2;

/// Winding of a raw ring, `None` for zero area.
#[inline]
pub fn winding_order(pts: &[Vector2<f64>]) -> Option<WindingOrder> {
    WindingOrder::of_area(signed_area(pts))
}
