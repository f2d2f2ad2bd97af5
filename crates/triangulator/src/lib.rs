//! Polygon triangulation by ear clipping, with holes cut in through bridge seams.
//!
//! Pipeline
//! - Build a `Polygon` for the outline and for each hole.
//! - `cut_holes_in_shape` splices the holes into the outline by decreasing
//!   max x, producing a single ring with zero-width seams.
//! - `triangulate` clips ears off that ring and returns a `Mesh` (vertices plus
//!   `u32` triangle indices) in the requested winding order.
//!
//! Errors are reported as `GeometryError`; nothing in the library panics on bad
//! input. Tolerances live in `GeomCfg`. Diagnostics go through `tracing`.

pub mod api;
pub mod error;
pub mod geom;
pub mod hole;
pub mod mesh;
pub mod shapes;
pub mod triangulate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::GeometryError;
pub use geom::{GeomCfg, Polygon, WindingOrder};
pub use hole::{cut_hole_in_shape, cut_holes_in_shape};
pub use mesh::Mesh;
pub use nalgebra::Vector2 as Vec2;
pub use triangulate::triangulate;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::GeometryError;
    pub use crate::geom::{GeomCfg, Polygon, WindingOrder};
    pub use crate::hole::{
        cut_hole_in_shape, cut_hole_in_shape_with_cfg, cut_holes_in_shape,
        cut_holes_in_shape_with_cfg,
    };
    pub use crate::mesh::Mesh;
    pub use crate::triangulate::{triangulate, triangulate_with_cfg};
    pub use nalgebra::Vector2 as Vec2;
}
